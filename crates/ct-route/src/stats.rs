//! Route quality summary.

use rustc_hash::FxHashSet;

use ct_core::{Manoeuvre, SegmentId};
use ct_graph::ManoeuvreGraph;

use crate::RealCircuit;

/// Counts describing how well a real circuit covers the pruned graph.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStatistics {
    /// Steps in the closed walk.
    pub length:             usize,
    pub distinct_nodes:     usize,
    pub distinct_edges:     usize,
    /// Fraction of the pruned graph's nodes the route visits.
    pub node_coverage:      f64,
    /// Fraction of the pruned graph's edges the route traverses.
    pub edge_coverage:      f64,
    /// Traversals beyond the first of each edge.
    pub repeated_steps:     usize,
    pub virtual_expansions: usize,
    /// Steps contributed by virtual-edge expansion.
    pub expanded_steps:     usize,
    pub total_penalty:      u64,
    /// Steps per manoeuvre, indexed by [`Manoeuvre::index`].
    pub manoeuvres:         [usize; 4],
}

impl RouteStatistics {
    pub fn of(circuit: &RealCircuit, pruned: &ManoeuvreGraph) -> Self {
        let nodes: FxHashSet<SegmentId> = circuit.steps().iter().map(|s| s.edge.from).collect();
        let edges: FxHashSet<(SegmentId, SegmentId)> =
            circuit.steps().iter().map(|s| s.edge.endpoints()).collect();

        let mut manoeuvres = [0usize; 4];
        for m in circuit.steps().iter().filter_map(|s| s.edge.manoeuvre()) {
            manoeuvres[m.index()] += 1;
        }

        Self {
            length:             circuit.len(),
            distinct_nodes:     nodes.len(),
            distinct_edges:     edges.len(),
            node_coverage:      ratio(nodes.len(), pruned.node_count()),
            edge_coverage:      ratio(edges.len(), pruned.edge_count()),
            repeated_steps:     circuit.len() - edges.len(),
            virtual_expansions: circuit.expansions(),
            expanded_steps:     circuit.steps().iter().filter(|s| s.is_expanded()).count(),
            total_penalty:      circuit.steps().iter().map(|s| s.edge.weight as u64).sum(),
            manoeuvres,
        }
    }

    #[inline]
    pub fn count(&self, manoeuvre: Manoeuvre) -> usize {
        self.manoeuvres[manoeuvre.index()]
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 }
}
