//! Turn pruning.
//!
//! Each edge of the target manoeuvre is removed unless its removal would
//! break strong connectivity.  Candidates are visited once, in a fixed order,
//! and the connectivity test always runs against the graph as already pruned
//! so far; a second pass over the result therefore removes nothing.
//!
//! The default pipeline prunes u-turns first, then left turns.  Order
//! matters: dropping u-turns changes which left turns are still needed.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use ct_core::{Manoeuvre, SegmentId, UTurnOrder};

use crate::{
    GraphError, GraphResult, ManoeuvreGraph, is_strongly_connected, is_strongly_connected_without,
    largest_component,
};

/// Remove every `target` edge that the graph can do without.
///
/// `order` only affects u-turn pruning; other manoeuvres are always offered
/// in plain edge order.
///
/// # Errors
///
/// [`GraphError::DisconnectedInput`] if `graph` is not strongly connected to
/// begin with.
pub fn prune(graph: ManoeuvreGraph, target: Manoeuvre, order: UTurnOrder) -> GraphResult<ManoeuvreGraph> {
    if !is_strongly_connected(&graph) {
        return Err(GraphError::DisconnectedInput {
            nodes:             graph.node_count(),
            largest_component: largest_component(&graph).len(),
        });
    }

    let candidates = match (target, order) {
        (Manoeuvre::MakeUTurn, UTurnOrder::MirrorPairs) => mirror_pair_order(&graph),
        _ => graph.edges().map(|e| e.endpoints()).collect(),
    };

    let mut graph = graph;
    let mut removed = 0usize;
    for (from, to) in candidates {
        let is_target = graph.edge(from, to).and_then(|e| e.manoeuvre()) == Some(target);
        if is_target && is_strongly_connected_without(&graph, from, to) {
            graph.remove_edge(from, to);
            removed += 1;
            debug!(from = from.0, to = to.0, manoeuvre = %target, "pruned edge");
        }
    }

    info!(
        manoeuvre = %target,
        removed,
        remaining = graph.edges_of_kind(target).count(),
        edges = graph.edge_count(),
        "pruned manoeuvre"
    );
    Ok(graph)
}

/// Prune u-turns, then left turns, then (optionally) right turns.
pub fn prune_turns(graph: ManoeuvreGraph, order: UTurnOrder, prune_right_turns: bool) -> GraphResult<ManoeuvreGraph> {
    let graph = prune(graph, Manoeuvre::MakeUTurn, order)?;
    let graph = prune(graph, Manoeuvre::TurnLeft, order)?;
    if prune_right_turns {
        prune(graph, Manoeuvre::TurnRight, order)
    } else {
        Ok(graph)
    }
}

/// Edge order with mirror pairs adjacent.
///
/// An edge `(a, b)` joining a forward and a reverse segment is immediately
/// followed by `(-a, -b)`, when that edge exists and has not been placed yet.
fn mirror_pair_order(graph: &ManoeuvreGraph) -> Vec<(SegmentId, SegmentId)> {
    let all: Vec<(SegmentId, SegmentId)> = graph.edges().map(|e| e.endpoints()).collect();
    let present: FxHashSet<(SegmentId, SegmentId)> = all.iter().copied().collect();
    let mut placed: FxHashSet<(SegmentId, SegmentId)> = FxHashSet::default();
    let mut ordered = Vec::with_capacity(all.len());

    for (a, b) in all {
        if !placed.insert((a, b)) {
            continue;
        }
        ordered.push((a, b));
        let mirror = (a.reverse(), b.reverse());
        if a.is_reverse() != b.is_reverse() && present.contains(&mirror) && placed.insert(mirror) {
            ordered.push(mirror);
        }
    }
    ordered
}
