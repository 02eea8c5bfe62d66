//! `ct-route` — from a pruned manoeuvre graph to a closed driving route.
//!
//! # Pipeline
//!
//! ```text
//! City ──build──▶ ManoeuvreGraph ──prune──▶ pruned graph
//!                                             │
//!                              balance ◀──────┤ (read-only base)
//!                                 │           │
//!                                 ▼           ▼
//!                           VirtualGraph ──extract──▶ RealCircuit ──▶ RouteStatistics
//! ```
//!
//! 1. **Balance**: add virtual edges until every node's in-degree equals
//!    its out-degree.
//! 2. **Extract**: Hierholzer circuit over the balanced graph; each virtual
//!    edge is replaced by the shortest real path in the pruned graph.
//! 3. **Summarise**: coverage, repeats, penalties, manoeuvre mix.
//!
//! [`TourBuilder`] runs all of it, generation included.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Computes the balancer's BFS tables on Rayon's thread pool.|
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ct_core::PipelineConfig;
//! use ct_route::TourBuilder;
//!
//! let tour = TourBuilder::new(PipelineConfig::default()).build()?;
//! for node in tour.circuit.nodes() {
//!     println!("{node}");
//! }
//! ```

pub mod balance;
pub mod builder;
pub mod circuit;
pub mod error;
pub mod stats;
pub mod walk;


pub use balance::{VirtualGraph, balance, is_eulerian};
pub use builder::{Tour, TourBuilder};
pub use circuit::{
    EdgeVisits, RealCircuit, Step, StepOrigin, eulerian_circuit, extract_circuit,
    extract_circuit_from,
};
pub use error::{RouteError, RouteResult};
pub use stats::RouteStatistics;
pub use walk::{RandomWalk, WalkStrategy, random_walk};
