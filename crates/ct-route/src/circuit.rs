//! Eulerian circuit extraction and virtual-edge expansion.
//!
//! The circuit over the balanced graph is found with an iterative Hierholzer
//! traversal from the first node.  Walking it, real edges are kept as they
//! are; each virtual edge is replaced by the shortest real path between its
//! endpoints in the pruned graph.  The result is a closed walk over real
//! segments only.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use ct_core::SegmentId;
use ct_graph::{Edge, GraphError, ManoeuvreGraph, shortest_path};

use crate::{RouteError, RouteResult, VirtualGraph, is_eulerian};

// ── Steps ─────────────────────────────────────────────────────────────────────

/// Where a step of the real circuit came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOrigin {
    /// A real edge of the Eulerian circuit.
    Real,
    /// Part of the path substituted for the virtual edge `from → to`.
    Expanded { from: SegmentId, to: SegmentId },
}

/// One traversed real edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    pub edge:   Edge,
    pub origin: StepOrigin,
}

impl Step {
    #[inline]
    pub fn is_expanded(&self) -> bool {
        matches!(self.origin, StepOrigin::Expanded { .. })
    }
}

/// Every position at which one distinct edge is traversed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeVisits {
    pub from:      SegmentId,
    pub to:        SegmentId,
    pub positions: Vec<usize>,
}

impl EdgeVisits {
    pub fn count(&self) -> usize {
        self.positions.len()
    }
}

// ── RealCircuit ───────────────────────────────────────────────────────────────

/// A closed walk over real edges covering every edge of the pruned graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RealCircuit {
    steps:      Vec<Step>,
    expansions: usize,
}

impl RealCircuit {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of virtual edges that were expanded into real paths.
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// The first node of every step.  The return to the start is implicit.
    pub fn nodes(&self) -> Vec<SegmentId> {
        self.steps.iter().map(|s| s.edge.from).collect()
    }

    /// `true` if consecutive steps chain up and the last leads back to the
    /// first.
    pub fn is_closed(&self) -> bool {
        let n = self.steps.len();
        (0..n).all(|i| self.steps[i].edge.to == self.steps[(i + 1) % n].edge.from)
    }

    /// The same closed walk, starting at the first visit of `node`.
    pub fn rotate_to(&self, node: SegmentId) -> RouteResult<RealCircuit> {
        let start = self
            .steps
            .iter()
            .position(|s| s.edge.from == node)
            .ok_or(GraphError::NodeNotFound(node))?;
        let mut steps = self.steps.clone();
        steps.rotate_left(start);
        Ok(RealCircuit { steps, expansions: self.expansions })
    }

    /// Visit tally per distinct edge, in order of first traversal.
    pub fn edge_visits(&self) -> Vec<EdgeVisits> {
        let mut index: FxHashMap<(SegmentId, SegmentId), usize> = FxHashMap::default();
        let mut visits: Vec<EdgeVisits> = Vec::new();
        for (pos, step) in self.steps.iter().enumerate() {
            let key = step.edge.endpoints();
            let i = *index.entry(key).or_insert_with(|| {
                visits.push(EdgeVisits { from: key.0, to: key.1, positions: Vec::new() });
                visits.len() - 1
            });
            visits[i].positions.push(pos);
        }
        visits
    }
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Edges of an Eulerian circuit of `graph`, starting at its first node.
///
/// # Errors
///
/// [`RouteError::PreconditionViolation`] if `graph` is not Eulerian.
pub fn eulerian_circuit(graph: &ManoeuvreGraph) -> RouteResult<Vec<Edge>> {
    if !is_eulerian(graph) {
        return Err(RouteError::PreconditionViolation(format!(
            "graph with {} nodes and {} edges is not Eulerian",
            graph.node_count(),
            graph.edge_count()
        )));
    }

    let mut next_slot = vec![0usize; graph.node_count()];
    let mut stack: Vec<(usize, Option<Edge>)> = vec![(0, None)];
    let mut circuit: Vec<Edge> = Vec::with_capacity(graph.edge_count());

    while let Some(&(v, _)) = stack.last() {
        let out = graph.out_edges_at(v);
        if let Some(&edge) = out.get(next_slot[v]) {
            next_slot[v] += 1;
            let w = graph
                .position(edge.to)
                .ok_or(GraphError::NodeNotFound(edge.to))?;
            stack.push((w, Some(edge)));
        } else if let Some((_, Some(edge))) = stack.pop() {
            circuit.push(edge);
        }
    }
    circuit.reverse();

    if circuit.len() != graph.edge_count() {
        return Err(RouteError::PreconditionViolation(format!(
            "circuit covers {} of {} edges",
            circuit.len(),
            graph.edge_count()
        )));
    }
    Ok(circuit)
}

/// Walk an Eulerian circuit of `virtual_graph`, expanding every virtual edge
/// into its shortest real path through `pruned`.
///
/// # Errors
///
/// [`RouteError::PreconditionViolation`] if `virtual_graph` is not Eulerian,
/// which can only happen when a caller bypasses the balancer.
pub fn extract_circuit(pruned: &ManoeuvreGraph, virtual_graph: &VirtualGraph) -> RouteResult<RealCircuit> {
    extract_circuit_from(pruned, virtual_graph.graph())
}

/// [`extract_circuit`] over a bare graph that is expected to be Eulerian.
pub fn extract_circuit_from(pruned: &ManoeuvreGraph, virtual_graph: &ManoeuvreGraph) -> RouteResult<RealCircuit> {
    let circuit = eulerian_circuit(virtual_graph)?;

    let mut steps = Vec::with_capacity(circuit.len());
    let mut expansions = 0usize;
    for edge in circuit {
        if !edge.is_virtual() {
            steps.push(Step { edge, origin: StepOrigin::Real });
            continue;
        }
        let path = shortest_path(pruned, edge.from, edge.to)?;
        debug!(
            from = edge.from.0,
            to = edge.to.0,
            hops = path.len(),
            penalty = path.penalty(),
            "expanded virtual edge"
        );
        let origin = StepOrigin::Expanded { from: edge.from, to: edge.to };
        steps.extend(path.edges.into_iter().map(|edge| Step { edge, origin }));
        expansions += 1;
    }

    let real = RealCircuit { steps, expansions };
    info!(length = real.len(), expansions, "extracted real circuit");
    Ok(real)
}
