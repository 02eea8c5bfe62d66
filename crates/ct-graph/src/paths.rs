//! Unweighted shortest paths.
//!
//! Distances count edges (hops), not penalties: a virtual edge stands for
//! the fewest real segments needed to get from one node to another, and the
//! expanded route uses exactly that many.
//!
//! Ties between equally short paths resolve to the first discovery in edge
//! order, so a given graph always expands the same way.

use std::collections::VecDeque;

use ct_core::SegmentId;

use crate::{Edge, GraphError, GraphResult, ManoeuvreGraph};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a path query: the ordered edges walked from source to
/// destination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    pub edges: Vec<Edge>,
}

impl Path {
    /// Number of edges walked.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of edge weights along the path.
    pub fn penalty(&self) -> u32 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Visited nodes, both endpoints included.  Empty for a trivial path.
    pub fn nodes(&self) -> Vec<SegmentId> {
        let mut nodes: Vec<SegmentId> = self.edges.iter().map(|e| e.from).collect();
        if let Some(last) = self.edges.last() {
            nodes.push(last.to);
        }
        nodes
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Hop distance from `source` to every node, indexed by node position;
/// `None` for unreachable nodes.
pub fn bfs_distances(graph: &ManoeuvreGraph, source: SegmentId) -> GraphResult<Vec<Option<u32>>> {
    let start = graph.position(source).ok_or(GraphError::NodeNotFound(source))?;
    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    dist[start] = Some(0);
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        let next = dist[p].map_or(0, |d| d + 1);
        for edge in graph.out_edges_at(p) {
            let Some(q) = graph.position(edge.to) else { continue };
            if dist[q].is_none() {
                dist[q] = Some(next);
                queue.push_back(q);
            }
        }
    }
    Ok(dist)
}

/// Hop distance from `from` to `to`.
pub fn hop_distance(graph: &ManoeuvreGraph, from: SegmentId, to: SegmentId) -> GraphResult<u32> {
    let q = graph.position(to).ok_or(GraphError::NodeNotFound(to))?;
    bfs_distances(graph, from)?[q].ok_or(GraphError::NoPath { from, to })
}

/// Fewest-edges path from `from` to `to`.
pub fn shortest_path(graph: &ManoeuvreGraph, from: SegmentId, to: SegmentId) -> GraphResult<Path> {
    let start = graph.position(from).ok_or(GraphError::NodeNotFound(from))?;
    let goal = graph.position(to).ok_or(GraphError::NodeNotFound(to))?;
    if start == goal {
        return Ok(Path::default());
    }

    // prev_edge[q] = (position of predecessor, slot in its out-list).
    let mut prev_edge: Vec<Option<(usize, usize)>> = vec![None; graph.node_count()];
    let mut seen = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    seen[start] = true;
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        for (slot, edge) in graph.out_edges_at(p).iter().enumerate() {
            let Some(q) = graph.position(edge.to) else { continue };
            if seen[q] {
                continue;
            }
            seen[q] = true;
            prev_edge[q] = Some((p, slot));
            if q == goal {
                return Ok(reconstruct(graph, &prev_edge, goal));
            }
            queue.push_back(q);
        }
    }

    Err(GraphError::NoPath { from, to })
}

fn reconstruct(graph: &ManoeuvreGraph, prev_edge: &[Option<(usize, usize)>], goal: usize) -> Path {
    let mut edges = Vec::new();
    let mut cur = goal;
    while let Some((p, slot)) = prev_edge[cur] {
        edges.push(graph.out_edges_at(p)[slot]);
        cur = p;
    }
    edges.reverse();
    Path { edges }
}
