//! Degree balancing with virtual edges.
//!
//! # Passes
//!
//! ```text
//! while some node has in-degree ≠ out-degree:
//!   excess_in  = nodes with in > out   (node order)
//!   excess_out = nodes with in < out   (node order)
//!   for n in excess_in:
//!     stop the pass if excess_out is empty
//!     m = nearest remaining excess_out node by hop distance from n in the
//!         current (already augmented) graph, skipping nodes n already has an
//!         edge to; ties go to the first candidate in order
//!     if no such m exists: with AdjacentPartners::Skip stop the pass; with
//!         AdjacentPartners::Allow take the first reachable adjacent
//!         candidate instead (a parallel edge)
//!     pair n → m and drop m from excess_out for the rest of the pass
//!   add one virtual edge per pairing
//! ```
//!
//! Every pairing removes one unit of surplus at each end, so a pass with at
//! least one pairing makes progress.  A pass with none, or more passes than
//! the configured cap, is reported as [`RouteError::BalancingNonConvergence`].
//!
//! A virtual edge's weight is the hop distance between its endpoints in the
//! *base* graph, i.e. the number of real segments the circuit extractor will
//! splice in for it.

use tracing::{debug, info};

use ct_core::{AdjacentPartners, SegmentId};
use ct_graph::{
    Edge, GraphError, GraphResult, ManoeuvreGraph, bfs_distances, hop_distance,
    is_strongly_connected, largest_component,
};

use crate::{RouteError, RouteResult};

// ── VirtualGraph ──────────────────────────────────────────────────────────────

/// A pruned graph augmented with virtual edges until it is balanced.
#[derive(Clone, Debug)]
pub struct VirtualGraph {
    graph:  ManoeuvreGraph,
    passes: usize,
}

impl VirtualGraph {
    pub fn graph(&self) -> &ManoeuvreGraph {
        &self.graph
    }

    /// Balancing passes that added edges.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn virtual_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.graph.edges().filter(|e| e.is_virtual())
    }

    pub fn virtual_edge_count(&self) -> usize {
        self.graph.virtual_edge_count()
    }
}

/// `true` if `graph` is strongly connected and every node is balanced.
pub fn is_eulerian(graph: &ManoeuvreGraph) -> bool {
    graph.is_balanced() && is_strongly_connected(graph)
}

// ── Balancer ──────────────────────────────────────────────────────────────────

/// Add virtual edges to a copy of `base` until every node is balanced.
///
/// # Errors
///
/// - [`GraphError::DisconnectedInput`] if `base` is not strongly connected.
/// - [`RouteError::BalancingNonConvergence`] if a pass pairs nothing or
///   `max_passes` passes are not enough.
pub fn balance(
    base:       &ManoeuvreGraph,
    max_passes: usize,
    adjacent:   AdjacentPartners,
) -> RouteResult<VirtualGraph> {
    if !is_strongly_connected(base) {
        return Err(GraphError::DisconnectedInput {
            nodes:             base.node_count(),
            largest_component: largest_component(base).len(),
        }
        .into());
    }

    let mut graph = base.clone();
    let mut passes = 0usize;

    loop {
        let excess_in = graph.excess_in();
        let mut excess_out = graph.excess_out();
        if excess_in.is_empty() && excess_out.is_empty() {
            break;
        }
        if passes == max_passes {
            return Err(RouteError::BalancingNonConvergence {
                passes,
                excess_in: excess_in.len(),
                excess_out: excess_out.len(),
            });
        }
        passes += 1;

        let tables = distance_tables(&graph, &excess_in)?;
        let mut pairings: Vec<(SegmentId, SegmentId)> = Vec::new();
        for (&n, dist) in excess_in.iter().zip(&tables) {
            if excess_out.is_empty() {
                break;
            }
            match pick_partner(&graph, n, &excess_out, dist, adjacent) {
                Some(slot) => pairings.push((n, excess_out.remove(slot))),
                None if adjacent == AdjacentPartners::Skip => {
                    debug!(node = n.0, pass = passes, "no non-adjacent partner, ending pass");
                    break;
                }
                None => debug!(node = n.0, pass = passes, "no reachable partner this pass"),
            }
        }

        if pairings.is_empty() {
            return Err(RouteError::BalancingNonConvergence {
                passes,
                excess_in: excess_in.len(),
                excess_out: graph.excess_out().len(),
            });
        }

        for &(n, m) in &pairings {
            let weight = hop_distance(base, n, m)?;
            graph.add_edge(Edge::virtual_edge(n, m, weight));
        }
        debug!(pass = passes, added = pairings.len(), "balancing pass");
    }

    let balanced = VirtualGraph { graph, passes };
    info!(
        passes,
        virtual_edges = balanced.virtual_edge_count(),
        edges = balanced.graph.edge_count(),
        "balanced graph"
    );
    Ok(balanced)
}

/// Slot in `candidates` of the partner for `n`: the nearest reachable node
/// `n` has no edge to yet, else (when `adjacent` allows) the first reachable
/// one it does.
fn pick_partner(
    graph:      &ManoeuvreGraph,
    n:          SegmentId,
    candidates: &[SegmentId],
    dist:       &[Option<u32>],
    adjacent:   AdjacentPartners,
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    let mut first_adjacent: Option<usize> = None;
    for (slot, &m) in candidates.iter().enumerate() {
        let Some(d) = graph.position(m).and_then(|q| dist[q]) else { continue };
        if graph.has_edge(n, m) {
            first_adjacent.get_or_insert(slot);
            continue;
        }
        if best.is_none_or(|(_, b)| d < b) {
            best = Some((slot, d));
        }
    }
    match adjacent {
        AdjacentPartners::Skip => best.map(|(slot, _)| slot),
        AdjacentPartners::Allow => best.map(|(slot, _)| slot).or(first_adjacent),
    }
}

/// BFS distance table from every surplus-in node, in the order given.
#[cfg(not(feature = "parallel"))]
fn distance_tables(graph: &ManoeuvreGraph, sources: &[SegmentId]) -> GraphResult<Vec<Vec<Option<u32>>>> {
    sources.iter().map(|&n| bfs_distances(graph, n)).collect()
}

/// BFS distance table from every surplus-in node, in the order given.
#[cfg(feature = "parallel")]
fn distance_tables(graph: &ManoeuvreGraph, sources: &[SegmentId]) -> GraphResult<Vec<Vec<Option<u32>>>> {
    use rayon::prelude::*;

    sources.par_iter().map(|&n| bfs_distances(graph, n)).collect()
}
