//! Random-walk baseline.
//!
//! A walk starts at a random node and keeps stepping to a random successor
//! until every node of the graph has been visited.  Its length is the yard
//! stick the Eulerian route is compared against.

use rustc_hash::FxHashSet;
use tracing::info;

use ct_core::{CityRng, SegmentId};
use ct_graph::ManoeuvreGraph;

use crate::{RouteError, RouteResult};

/// How the next node is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WalkStrategy {
    /// Every successor is equally likely.
    #[default]
    Uniform,
    /// When only some successors are unvisited, pick among those.
    PreferUnvisited,
}

/// Outcome of one walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomWalk {
    /// Visited nodes in order, repeats included.
    pub nodes:    Vec<SegmentId>,
    /// `false` if the step cap was hit or the walk reached a node with no
    /// way on before covering the graph.
    pub complete: bool,
}

impl RandomWalk {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Walk `graph` at random until every node is visited or `max_steps` nodes
/// have been recorded.
///
/// # Errors
///
/// [`RouteError::PreconditionViolation`] for an empty graph.
pub fn random_walk(
    graph:     &ManoeuvreGraph,
    strategy:  WalkStrategy,
    max_steps: usize,
    rng:       &mut CityRng,
) -> RouteResult<RandomWalk> {
    let Some(&start) = rng.choose(graph.nodes()) else {
        return Err(RouteError::PreconditionViolation("random walk over an empty graph".into()));
    };

    let target = graph.node_count();
    let mut seen: FxHashSet<SegmentId> = FxHashSet::default();
    let mut nodes = Vec::new();
    let mut current = start;

    while seen.len() < target && nodes.len() < max_steps {
        nodes.push(current);
        seen.insert(current);
        if seen.len() == target {
            break;
        }
        let successors: Vec<SegmentId> = graph.out_edges(current).iter().map(|e| e.to).collect();
        let unvisited: Vec<SegmentId> =
            successors.iter().copied().filter(|s| !seen.contains(s)).collect();
        let pool = match strategy {
            WalkStrategy::PreferUnvisited if !unvisited.is_empty() => &unvisited,
            _ => &successors,
        };
        match rng.choose(pool) {
            Some(&next) => current = next,
            None => break,
        }
    }

    let walk = RandomWalk { complete: seen.len() == target, nodes };
    info!(?strategy, steps = walk.len(), complete = walk.complete, "random walk");
    Ok(walk)
}
