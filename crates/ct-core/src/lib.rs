//! `ct-core` — foundational types for the `city_tour` workspace.
//!
//! This crate is a dependency of every other `ct-*` crate.  It intentionally
//! has no `ct-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `SegmentId` (signed), `StreetId`                      |
//! | [`geo`]         | `GridPoint`, `GridVector`, `Point2`                   |
//! | [`manoeuvre`]   | `Manoeuvre` enum, `ManoeuvrePenalties`                |
//! | [`config`]      | `DirectionFrequencies`, `CityConfig`, `PipelineConfig`|
//! | [`rng`]         | `CityRng`                                             |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `PipelineConfig` from JSON.             |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod manoeuvre;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AdjacentPartners, CityConfig, DirectionFrequencies, MAX_STREET_SLOTS, PipelineConfig, UTurnOrder,
};
pub use error::{CoreError, CoreResult};
pub use geo::{GridPoint, GridVector, Point2};
pub use ids::{SegmentId, StreetId};
pub use manoeuvre::{Manoeuvre, ManoeuvrePenalties};
pub use rng::CityRng;
