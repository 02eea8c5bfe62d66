//! Directed manoeuvre graph.
//!
//! # Data layout
//!
//! Nodes are segment ids kept in a dense `Vec` in **insertion order**; a node
//! is inserted the first time it appears as an edge endpoint.  Every
//! algorithm that scans "all nodes" or "all edges" does so in this order,
//! which is what makes pruning, balancing and circuit extraction
//! reproducible run to run.
//!
//! Outgoing edges of the node at position `p` live in `out[p]`, again in
//! insertion order, so the global edge order is "nodes in order, then each
//! node's out-list".  In-degrees are maintained incrementally.
//!
//! The graph is a multigraph: the balancer may add a virtual edge parallel to
//! an existing one.  Segment edges are unique per ordered node pair because
//! adjacency is a pure function of the two segments' endpoints.

use rustc_hash::FxHashMap;

use ct_core::{Manoeuvre, Point2, SegmentId};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// What an edge stands for.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum EdgeKind {
    /// A real move from one segment onto the next.  `geometry` is the short
    /// connector line between the two segments' midpoints.
    Segment { manoeuvre: Manoeuvre, geometry: [Point2; 2] },
    /// Synthetic balancing edge with no geometry of its own.
    Virtual,
}

/// One directed edge `from → to`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:   SegmentId,
    pub to:     SegmentId,
    /// Manoeuvre penalty for segment edges; shortest-path hop count for
    /// virtual edges.
    pub weight: u32,
    pub kind:   EdgeKind,
}

impl Edge {
    pub fn segment(from: SegmentId, to: SegmentId, manoeuvre: Manoeuvre, weight: u32, geometry: [Point2; 2]) -> Self {
        Self { from, to, weight, kind: EdgeKind::Segment { manoeuvre, geometry } }
    }

    pub fn virtual_edge(from: SegmentId, to: SegmentId, weight: u32) -> Self {
        Self { from, to, weight, kind: EdgeKind::Virtual }
    }

    /// The manoeuvre of a segment edge; `None` for virtual edges.
    #[inline]
    pub fn manoeuvre(&self) -> Option<Manoeuvre> {
        match self.kind {
            EdgeKind::Segment { manoeuvre, .. } => Some(manoeuvre),
            EdgeKind::Virtual => None,
        }
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        matches!(self.kind, EdgeKind::Virtual)
    }

    #[inline]
    pub fn endpoints(&self) -> (SegmentId, SegmentId) {
        (self.from, self.to)
    }
}

// ── ManoeuvreGraph ────────────────────────────────────────────────────────────

/// Directed graph whose nodes are segments and whose edges are manoeuvres.
///
/// Pipeline stages never share a graph: pruning consumes and returns one,
/// balancing clones the pruned graph before adding virtual edges.
#[derive(Clone, Debug, Default)]
pub struct ManoeuvreGraph {
    nodes:     Vec<SegmentId>,
    position:  FxHashMap<SegmentId, usize>,
    out:       Vec<Vec<Edge>>,
    in_degree: Vec<usize>,
    edges:     usize,
}

impl ManoeuvreGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Nodes ─────────────────────────────────────────────────────────────

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[SegmentId] {
        &self.nodes
    }

    pub fn contains_node(&self, id: SegmentId) -> bool {
        self.position.contains_key(&id)
    }

    /// Dense position of `id` in [`nodes`](Self::nodes).
    #[inline]
    pub fn position(&self, id: SegmentId) -> Option<usize> {
        self.position.get(&id).copied()
    }

    /// Insert `id` if absent; returns its position either way.
    pub fn add_node(&mut self, id: SegmentId) -> usize {
        if let Some(&p) = self.position.get(&id) {
            return p;
        }
        let p = self.nodes.len();
        self.nodes.push(id);
        self.position.insert(id, p);
        self.out.push(Vec::new());
        self.in_degree.push(0);
        p
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    /// Append an edge, inserting its endpoints (`from` first) if needed.
    pub fn add_edge(&mut self, edge: Edge) {
        let from = self.add_node(edge.from);
        let to = self.add_node(edge.to);
        self.out[from].push(edge);
        self.in_degree[to] += 1;
        self.edges += 1;
    }

    /// Remove the first `from → to` edge in out-list order.
    pub fn remove_edge(&mut self, from: SegmentId, to: SegmentId) -> Option<Edge> {
        let p = self.position(from)?;
        let slot = self.out[p].iter().position(|e| e.to == to)?;
        let edge = self.out[p].remove(slot);
        if let Some(q) = self.position(to) {
            self.in_degree[q] -= 1;
        }
        self.edges -= 1;
        Some(edge)
    }

    pub fn has_edge(&self, from: SegmentId, to: SegmentId) -> bool {
        self.out_edges(from).iter().any(|e| e.to == to)
    }

    /// First `from → to` edge, if any.
    pub fn edge(&self, from: SegmentId, to: SegmentId) -> Option<&Edge> {
        self.out_edges(from).iter().find(|e| e.to == to)
    }

    /// Outgoing edges of `id`; empty for unknown nodes.
    #[inline]
    pub fn out_edges(&self, id: SegmentId) -> &[Edge] {
        match self.position(id) {
            Some(p) => &self.out[p],
            None => &[],
        }
    }

    /// Outgoing edges of the node at dense position `p`.
    #[inline]
    pub fn out_edges_at(&self, p: usize) -> &[Edge] {
        &self.out[p]
    }

    /// All edges: nodes in order, then each out-list in order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.out.iter().flatten()
    }

    /// Segment edges labelled with `manoeuvre`, in edge order.
    pub fn edges_of_kind(&self, manoeuvre: Manoeuvre) -> impl Iterator<Item = &Edge> + '_ {
        self.edges().filter(move |e| e.manoeuvre() == Some(manoeuvre))
    }

    pub fn virtual_edge_count(&self) -> usize {
        self.edges().filter(|e| e.is_virtual()).count()
    }

    // ── Degrees ───────────────────────────────────────────────────────────

    pub fn out_degree(&self, id: SegmentId) -> usize {
        self.out_edges(id).len()
    }

    pub fn in_degree(&self, id: SegmentId) -> usize {
        self.position(id).map_or(0, |p| self.in_degree[p])
    }

    /// `in_degree - out_degree` of the node at position `p`.
    #[inline]
    pub fn imbalance_at(&self, p: usize) -> i64 {
        self.in_degree[p] as i64 - self.out[p].len() as i64
    }

    /// `true` if every node has equal in- and out-degree.
    pub fn is_balanced(&self) -> bool {
        (0..self.nodes.len()).all(|p| self.imbalance_at(p) == 0)
    }

    /// Nodes with in-degree > out-degree, in node order.
    pub fn excess_in(&self) -> Vec<SegmentId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|&(p, _)| self.imbalance_at(p) > 0)
            .map(|(_, &id)| id)
            .collect()
    }

    /// Nodes with out-degree > in-degree, in node order.
    pub fn excess_out(&self) -> Vec<SegmentId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|&(p, _)| self.imbalance_at(p) < 0)
            .map(|(_, &id)| id)
            .collect()
    }

    // ── Derivation ────────────────────────────────────────────────────────

    /// The subgraph induced by the nodes for which `keep` is true.
    ///
    /// Node order and edge order are preserved.  Kept nodes appear even if
    /// all their edges are dropped.
    pub fn induced(&self, keep: impl Fn(SegmentId) -> bool) -> ManoeuvreGraph {
        let mut sub = ManoeuvreGraph::new();
        for &id in self.nodes.iter().filter(|&&id| keep(id)) {
            sub.add_node(id);
        }
        for edge in self.edges() {
            if sub.contains_node(edge.from) && sub.contains_node(edge.to) {
                sub.add_edge(*edge);
            }
        }
        sub
    }
}
