//! `ct-graph` — manoeuvre graphs over a city's segments.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`graph`]      | `ManoeuvreGraph`, `Edge`, `EdgeKind`                      |
//! | [`classifier`] | `classify_manoeuvre`, `turn_angle`                        |
//! | [`builder`]    | `connect_segments`, `build_manoeuvre_graph`               |
//! | [`scc`]        | strongly connected components, connectivity tests         |
//! | [`paths`]      | `Path`, BFS distances and shortest paths                  |
//! | [`prune`]      | `prune`, `prune_turns`                                    |
//! | [`stats`]      | `GraphStatistics`, dead ends, disconnected nodes          |
//! | [`error`]      | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod builder;
pub mod classifier;
pub mod error;
pub mod graph;
pub mod paths;
pub mod prune;
pub mod scc;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::{build_manoeuvre_graph, connect_segments};
pub use classifier::{classify_manoeuvre, classify_vectors, turn_angle};
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeKind, ManoeuvreGraph};
pub use paths::{Path, bfs_distances, hop_distance, shortest_path};
pub use prune::{prune, prune_turns};
pub use scc::{
    is_strongly_connected, is_strongly_connected_without, largest_component, reachable_from,
    strongly_connected_components,
};
pub use stats::{GraphStatistics, dead_ends, disconnected_nodes};
