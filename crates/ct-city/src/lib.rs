//! `ct-city` — synthetic grid cities.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`segment`]   | `Segment`, `Direction`, `City`                            |
//! | [`generator`] | `generate_city`                                           |
//! | [`district`]  | `District`, `random_district`, `select_district`          |
//! | [`stats`]     | `CityStatistics`                                          |
//! | [`index`]     | `SegmentIndex` (R-tree over segment midpoints)            |
//! | [`error`]     | `CityError`, `CityResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod district;
pub mod error;
pub mod generator;
pub mod index;
pub mod segment;
pub mod stats;


pub use district::{District, random_district, select_district};
pub use error::{CityError, CityResult};
pub use generator::generate_city;
pub use index::SegmentIndex;
pub use segment::{City, Direction, Segment};
pub use stats::CityStatistics;
