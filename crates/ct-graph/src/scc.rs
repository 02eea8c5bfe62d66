//! Strong connectivity.
//!
//! Components are found with an iterative Tarjan traversal (no recursion, so
//! large cities cannot overflow the stack).  The cheaper yes/no question
//! "is the whole graph strongly connected?" is answered with one forward and
//! one reverse reachability sweep from the first node, optionally ignoring a
//! single edge; the pruner asks it once per candidate edge.

use ct_core::SegmentId;

use crate::ManoeuvreGraph;

const UNVISITED: usize = usize::MAX;

/// Strongly connected components, each listed in node order.
///
/// Components are returned in order of their earliest node.
pub fn strongly_connected_components(graph: &ManoeuvreGraph) -> Vec<Vec<SegmentId>> {
    let n = graph.node_count();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut component_of = vec![UNVISITED; n];
    let mut components = 0usize;
    let mut next_index = 0usize;

    // (node, next out-edge slot to explore)
    let mut work: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if index[root] != UNVISITED {
            continue;
        }
        work.push((root, 0));
        while let Some(&(v, slot)) = work.last() {
            if slot == 0 && index[v] == UNVISITED {
                index[v] = next_index;
                lowlink[v] = next_index;
                next_index += 1;
                stack.push(v);
                on_stack[v] = true;
            }

            if let Some(edge) = graph.out_edges_at(v).get(slot) {
                let top = work.len() - 1;
                work[top].1 += 1;
                let Some(w) = graph.position(edge.to) else { continue };
                if index[w] == UNVISITED {
                    work.push((w, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            // All edges of v explored.
            work.pop();
            if let Some(&(parent, _)) = work.last() {
                lowlink[parent] = lowlink[parent].min(lowlink[v]);
            }
            if lowlink[v] == index[v] {
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    component_of[w] = components;
                    if w == v {
                        break;
                    }
                }
                components += 1;
            }
        }
    }

    // Renumber by earliest member so the output order is independent of the
    // traversal's completion order.
    let mut order: Vec<usize> = vec![UNVISITED; components];
    let mut result: Vec<Vec<SegmentId>> = Vec::with_capacity(components);
    for (p, &c) in component_of.iter().enumerate() {
        if order[c] == UNVISITED {
            order[c] = result.len();
            result.push(Vec::new());
        }
        result[order[c]].push(graph.nodes()[p]);
    }
    result
}

/// The largest strongly connected component; ties go to the component whose
/// earliest node comes first.  Empty for an empty graph.
pub fn largest_component(graph: &ManoeuvreGraph) -> Vec<SegmentId> {
    let mut best: Vec<SegmentId> = Vec::new();
    for component in strongly_connected_components(graph) {
        if component.len() > best.len() {
            best = component;
        }
    }
    best
}

/// `true` if every node reaches every other.  An empty graph is not
/// strongly connected.
pub fn is_strongly_connected(graph: &ManoeuvreGraph) -> bool {
    sweep_connected(graph, None)
}

/// Whether the graph would stay strongly connected with the first
/// `from → to` edge removed.  Identical to [`is_strongly_connected`] when no
/// such edge exists.
pub fn is_strongly_connected_without(graph: &ManoeuvreGraph, from: SegmentId, to: SegmentId) -> bool {
    let skip = graph.position(from).and_then(|p| {
        graph
            .out_edges_at(p)
            .iter()
            .position(|e| e.to == to)
            .map(|slot| (p, slot))
    });
    sweep_connected(graph, skip)
}

/// Nodes reachable from `source` (including itself), as a mask over node
/// positions.
pub fn reachable_from(graph: &ManoeuvreGraph, source: SegmentId) -> Vec<bool> {
    match graph.position(source) {
        Some(p) => reach(&forward_adjacency(graph, None), p),
        None => vec![false; graph.node_count()],
    }
}

// ── Internals ─────────────────────────────────────────────────────────────────

type Skip = Option<(usize, usize)>;

fn sweep_connected(graph: &ManoeuvreGraph, skip: Skip) -> bool {
    let n = graph.node_count();
    if n == 0 {
        return false;
    }
    let forward = forward_adjacency(graph, skip);
    if reach(&forward, 0).iter().any(|r| !r) {
        return false;
    }
    let reverse = reverse_adjacency(&forward);
    !reach(&reverse, 0).iter().any(|r| !r)
}

/// Position-indexed adjacency lists, with the skipped edge left out.
fn forward_adjacency(graph: &ManoeuvreGraph, skip: Skip) -> Vec<Vec<usize>> {
    (0..graph.node_count())
        .map(|p| {
            graph
                .out_edges_at(p)
                .iter()
                .enumerate()
                .filter(|&(slot, _)| skip != Some((p, slot)))
                .filter_map(|(_, e)| graph.position(e.to))
                .collect()
        })
        .collect()
}

fn reverse_adjacency(forward: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut reverse = vec![Vec::new(); forward.len()];
    for (p, targets) in forward.iter().enumerate() {
        for &q in targets {
            reverse[q].push(p);
        }
    }
    reverse
}

fn reach(adjacency: &[Vec<usize>], source: usize) -> Vec<bool> {
    let mut seen = vec![false; adjacency.len()];
    let mut stack = vec![source];
    seen[source] = true;
    while let Some(p) = stack.pop() {
        for &q in &adjacency[p] {
            if !seen[q] {
                seen[q] = true;
                stack.push(q);
            }
        }
    }
    seen
}
