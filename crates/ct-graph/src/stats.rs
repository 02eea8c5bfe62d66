//! Read-only summaries of a finished graph.

use rustc_hash::FxHashSet;

use ct_core::{Manoeuvre, SegmentId};

use crate::{ManoeuvreGraph, is_strongly_connected, largest_component};

/// Structural counts of a manoeuvre graph.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphStatistics {
    pub nodes:              usize,
    pub edges:              usize,
    /// Segment edges per manoeuvre, indexed by [`Manoeuvre::index`].
    pub manoeuvres:         [usize; 4],
    pub virtual_edges:      usize,
    pub strongly_connected: bool,
    /// Nodes outside the largest strongly connected component.
    pub disconnected:       usize,
    pub dead_ends:          usize,
}

impl GraphStatistics {
    pub fn of(graph: &ManoeuvreGraph) -> Self {
        let mut manoeuvres = [0usize; 4];
        let mut virtual_edges = 0usize;
        for edge in graph.edges() {
            match edge.manoeuvre() {
                Some(m) => manoeuvres[m.index()] += 1,
                None => virtual_edges += 1,
            }
        }
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            manoeuvres,
            virtual_edges,
            strongly_connected: is_strongly_connected(graph),
            disconnected: disconnected_nodes(graph).len(),
            dead_ends: dead_ends(graph).len(),
        }
    }

    #[inline]
    pub fn count(&self, manoeuvre: Manoeuvre) -> usize {
        self.manoeuvres[manoeuvre.index()]
    }
}

/// Nodes whose only way on is straight back: in-degree and out-degree are
/// both 1 and the single outgoing edge is a u-turn.
pub fn dead_ends(graph: &ManoeuvreGraph) -> Vec<SegmentId> {
    graph
        .nodes()
        .iter()
        .copied()
        .filter(|&id| {
            let out = graph.out_edges(id);
            graph.in_degree(id) == 1
                && out.len() == 1
                && out[0].manoeuvre() == Some(Manoeuvre::MakeUTurn)
        })
        .collect()
}

/// Nodes outside the largest strongly connected component, in node order.
pub fn disconnected_nodes(graph: &ManoeuvreGraph) -> Vec<SegmentId> {
    let main: FxHashSet<SegmentId> = largest_component(graph).into_iter().collect();
    graph
        .nodes()
        .iter()
        .copied()
        .filter(|id| !main.contains(id))
        .collect()
}
