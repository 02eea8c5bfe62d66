//! Manoeuvre graph construction.
//!
//! An edge `a → b` exists exactly when segment `a`'s head is segment `b`'s
//! tail.  Segments are bucketed by tail point first, so each segment only
//! meets the segments that can follow it; within a bucket the city's segment
//! order is kept, which yields the same edge order as a full pairwise scan.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info, warn};

use ct_city::{City, Segment};
use ct_core::{GridPoint, ManoeuvrePenalties};

use crate::{
    Edge, GraphError, GraphResult, ManoeuvreGraph, classify_manoeuvre, largest_component,
};

/// Every adjacency of `city` as a classified, weighted edge.
///
/// The result may contain dead branches and several components; see
/// [`build_manoeuvre_graph`] for the routable version.
pub fn connect_segments(city: &City, penalties: &ManoeuvrePenalties) -> ManoeuvreGraph {
    let mut by_tail: FxHashMap<GridPoint, Vec<&Segment>> = FxHashMap::default();
    for seg in city {
        by_tail.entry(seg.tail).or_default().push(seg);
    }

    let mut graph = ManoeuvreGraph::new();
    for incoming in city {
        let Some(successors) = by_tail.get(&incoming.head) else { continue };
        for &outgoing in successors {
            let manoeuvre = classify_manoeuvre(incoming, outgoing);
            graph.add_edge(Edge::segment(
                incoming.id,
                outgoing.id,
                manoeuvre,
                penalties.penalty(manoeuvre),
                [incoming.midpoint(), outgoing.midpoint()],
            ));
        }
    }
    debug!(
        segments = city.len(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "connected segments"
    );
    graph
}

/// Build the manoeuvre graph of `city`, restricted to its largest strongly
/// connected component.
///
/// # Errors
///
/// [`GraphError::DisconnectedInput`] when that component has fewer than two
/// nodes, since no closed route exists.
pub fn build_manoeuvre_graph(city: &City, penalties: &ManoeuvrePenalties) -> GraphResult<ManoeuvreGraph> {
    let raw = connect_segments(city, penalties);
    let component = largest_component(&raw);
    if component.len() < 2 {
        return Err(GraphError::DisconnectedInput {
            nodes:             raw.node_count(),
            largest_component: component.len(),
        });
    }

    let graph = if component.len() == raw.node_count() {
        raw
    } else {
        warn!(
            discarded = raw.node_count() - component.len(),
            kept = component.len(),
            "discarding nodes outside the largest strongly connected component"
        );
        let keep: FxHashSet<_> = component.into_iter().collect();
        raw.induced(|id| keep.contains(&id))
    };

    info!(nodes = graph.node_count(), edges = graph.edge_count(), "built manoeuvre graph");
    Ok(graph)
}
