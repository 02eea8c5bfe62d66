//! Unit tests for ct-graph.
//!
//! Cities are generated all-two-way so the graphs are fully regular and the
//! expected counts are exact.

#[cfg(test)]
mod helpers {
    use ct_city::{City, generate_city};
    use ct_core::{CityConfig, CityRng, DirectionFrequencies, ManoeuvrePenalties, SegmentId, UTurnOrder};

    use crate::{ManoeuvreGraph, build_manoeuvre_graph, prune_turns};

    pub fn two_way_city(width: u32, height: u32) -> City {
        let config = CityConfig::new(width, height, DirectionFrequencies::all_two_way());
        generate_city(&config, &mut CityRng::new(0)).unwrap()
    }

    pub fn raw_graph(width: u32, height: u32) -> ManoeuvreGraph {
        build_manoeuvre_graph(&two_way_city(width, height), &ManoeuvrePenalties::default()).unwrap()
    }

    pub fn pruned_graph(width: u32, height: u32, order: UTurnOrder) -> ManoeuvreGraph {
        prune_turns(raw_graph(width, height), order, false).unwrap()
    }

    pub fn pairs(graph: &ManoeuvreGraph) -> Vec<(i32, i32)> {
        graph.edges().map(|e| (e.from.0, e.to.0)).collect()
    }

    pub fn ids(raw: &[i32]) -> Vec<SegmentId> {
        raw.iter().map(|&i| SegmentId(i)).collect()
    }
}

// ── Classifier ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod classifier {
    use ct_city::{Direction, Segment};
    use ct_core::{GridPoint, GridVector, Manoeuvre, SegmentId};

    use crate::{classify_manoeuvre, classify_vectors, turn_angle};

    const EAST: GridVector = GridVector { dx: 1, dy: 0 };
    const WEST: GridVector = GridVector { dx: -1, dy: 0 };
    const NORTH: GridVector = GridVector { dx: 0, dy: 1 };
    const SOUTH: GridVector = GridVector { dx: 0, dy: -1 };

    #[test]
    fn grid_moves() {
        assert_eq!(classify_vectors(EAST, EAST), Manoeuvre::GoStraight);
        assert_eq!(classify_vectors(EAST, SOUTH), Manoeuvre::TurnRight);
        assert_eq!(classify_vectors(EAST, NORTH), Manoeuvre::TurnLeft);
        assert_eq!(classify_vectors(EAST, WEST), Manoeuvre::MakeUTurn);
        assert_eq!(classify_vectors(NORTH, EAST), Manoeuvre::TurnRight);
        assert_eq!(classify_vectors(NORTH, WEST), Manoeuvre::TurnLeft);
        assert_eq!(classify_vectors(SOUTH, NORTH), Manoeuvre::MakeUTurn);
    }

    #[test]
    fn angles() {
        assert_eq!(turn_angle(EAST, EAST), 360.0);
        assert!((turn_angle(EAST, SOUTH) - 90.0).abs() < 1e-9);
        assert!((turn_angle(EAST, NORTH) - 270.0).abs() < 1e-9);
        assert!((turn_angle(EAST, WEST) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn diagonal_brackets() {
        // 45° right of east.
        let se = GridVector { dx: 1, dy: -1 };
        assert_eq!(classify_vectors(EAST, se), Manoeuvre::TurnRight);
        // A shallow bend of ~18° stays straight.
        let slight = GridVector { dx: 3, dy: 1 };
        assert_eq!(classify_vectors(EAST, slight), Manoeuvre::GoStraight);
        // 135° left of east.
        let nw = GridVector { dx: -1, dy: 1 };
        assert_eq!(classify_vectors(EAST, nw), Manoeuvre::TurnLeft);
    }

    #[test]
    fn classify_segments() {
        let a = Segment::straight(SegmentId(1), Direction::TwoWay, GridPoint::new(0, 0), GridPoint::new(1, 0));
        let b = Segment::straight(SegmentId(6), Direction::TwoWay, GridPoint::new(1, 0), GridPoint::new(1, 1));
        assert_eq!(classify_manoeuvre(&a, &b), Manoeuvre::TurnLeft);
        assert_eq!(classify_manoeuvre(&a, &a.reversed()), Manoeuvre::MakeUTurn);
        assert_eq!(classify_manoeuvre(&b.reversed(), &a.reversed()), Manoeuvre::TurnRight);
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use ct_core::{Manoeuvre, Point2, SegmentId};

    use crate::{Edge, ManoeuvreGraph};

    fn seg(from: i32, to: i32) -> Edge {
        Edge::segment(SegmentId(from), SegmentId(to), Manoeuvre::GoStraight, 0, [Point2::default(); 2])
    }

    #[test]
    fn empty_graph() {
        let g = ManoeuvreGraph::new();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert!(g.out_edges(SegmentId(1)).is_empty());
        assert_eq!(g.in_degree(SegmentId(1)), 0);
    }

    #[test]
    fn insertion_order_and_degrees() {
        let mut g = ManoeuvreGraph::new();
        g.add_edge(seg(5, 2));
        g.add_edge(seg(2, 5));
        g.add_edge(seg(2, 9));
        assert_eq!(g.nodes(), &[SegmentId(5), SegmentId(2), SegmentId(9)]);
        assert_eq!(g.out_degree(SegmentId(2)), 2);
        assert_eq!(g.in_degree(SegmentId(9)), 1);
        assert_eq!(g.excess_in(), vec![SegmentId(9)]);
        assert_eq!(g.excess_out(), vec![SegmentId(2)]);
        assert!(!g.is_balanced());
    }

    #[test]
    fn parallel_edges_and_removal() {
        let mut g = ManoeuvreGraph::new();
        g.add_edge(seg(1, 2));
        g.add_edge(Edge::virtual_edge(SegmentId(1), SegmentId(2), 3));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.virtual_edge_count(), 1);
        assert_eq!(g.in_degree(SegmentId(2)), 2);

        let removed = g.remove_edge(SegmentId(1), SegmentId(2)).unwrap();
        assert!(!removed.is_virtual());
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.in_degree(SegmentId(2)), 1);
        assert!(g.has_edge(SegmentId(1), SegmentId(2)));
        assert!(g.remove_edge(SegmentId(2), SegmentId(1)).is_none());
    }

    #[test]
    fn induced_keeps_order() {
        let mut g = ManoeuvreGraph::new();
        g.add_edge(seg(1, 2));
        g.add_edge(seg(2, 3));
        g.add_edge(seg(3, 1));
        g.add_edge(seg(2, 1));
        let sub = g.induced(|id| id != SegmentId(3));
        assert_eq!(sub.nodes(), &[SegmentId(1), SegmentId(2)]);
        let pairs: Vec<_> = sub.edges().map(|e| e.endpoints()).collect();
        assert_eq!(pairs, vec![(SegmentId(1), SegmentId(2)), (SegmentId(2), SegmentId(1))]);
        assert!(sub.is_balanced());
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use ct_city::City;
    use ct_core::{Manoeuvre, ManoeuvrePenalties, SegmentId};

    use super::helpers::{raw_graph, two_way_city};
    use crate::{GraphError, GraphStatistics, build_manoeuvre_graph, connect_segments};

    #[test]
    fn two_by_one_is_all_u_turns() {
        let stats = GraphStatistics::of(&raw_graph(2, 1));
        assert_eq!(stats.count(Manoeuvre::TurnRight), 0);
        assert_eq!(stats.count(Manoeuvre::TurnLeft), 0);
        assert_eq!(stats.count(Manoeuvre::MakeUTurn), 2);
        assert_eq!(stats.nodes, 2);
    }

    #[test]
    fn two_by_two_raw_counts() {
        let g = raw_graph(2, 2);
        let stats = GraphStatistics::of(&g);
        assert_eq!(stats.edges, 16);
        assert_eq!(stats.count(Manoeuvre::MakeUTurn), 8);
        assert_eq!(stats.count(Manoeuvre::TurnLeft), 4);
        assert_eq!(stats.count(Manoeuvre::TurnRight), 4);
        assert_eq!(stats.count(Manoeuvre::GoStraight), 0);
        assert_eq!(super::helpers::pairs(&g)[..2], [(1, -1), (1, 6)]);
        assert_eq!(g.nodes(), &super::helpers::ids(&[1, -1, 6, 2, -2, 3, -3, -6])[..]);
    }

    #[test]
    fn three_by_two_raw_counts() {
        let stats = GraphStatistics::of(&raw_graph(3, 2));
        assert_eq!(stats.nodes, 14);
        assert_eq!(stats.edges, 34);
        assert_eq!(stats.count(Manoeuvre::MakeUTurn), 14);
        assert_eq!(stats.count(Manoeuvre::GoStraight), 4);
        assert_eq!(stats.count(Manoeuvre::TurnLeft), 8);
        assert_eq!(stats.count(Manoeuvre::TurnRight), 8);
        assert!(stats.strongly_connected);
    }

    #[test]
    fn penalties_and_geometry() {
        let city = two_way_city(2, 2);
        let g = connect_segments(&city, &ManoeuvrePenalties::default());
        for edge in g.edges() {
            let m = edge.manoeuvre().unwrap();
            assert_eq!(edge.weight, ManoeuvrePenalties::default().penalty(m));
        }
        let e = g.edge(SegmentId(1), SegmentId(6)).unwrap();
        match e.kind {
            crate::EdgeKind::Segment { manoeuvre, geometry } => {
                assert_eq!(manoeuvre, Manoeuvre::TurnLeft);
                assert_eq!(geometry[0], city.segment(SegmentId(1)).unwrap().midpoint());
                assert_eq!(geometry[1], city.segment(SegmentId(6)).unwrap().midpoint());
            }
            crate::EdgeKind::Virtual => panic!("segment edge expected"),
        }
    }

    #[test]
    fn custom_penalties_flow_into_weights() {
        let penalties = ManoeuvrePenalties { go_straight: 1, turn_right: 2, turn_left: 7, make_u_turn: 20 };
        let g = build_manoeuvre_graph(&two_way_city(2, 1), &penalties).unwrap();
        assert!(g.edges().all(|e| e.weight == 20));
    }

    #[test]
    fn one_by_one_is_disconnected() {
        let err = build_manoeuvre_graph(&two_way_city(1, 1), &ManoeuvrePenalties::default()).unwrap_err();
        assert_eq!(err, GraphError::DisconnectedInput { nodes: 0, largest_component: 0 });
    }

    #[test]
    fn one_way_chain_is_disconnected() {
        use ct_city::{Direction, Segment};
        use ct_core::GridPoint;
        let segs = vec![
            Segment::straight(SegmentId(1), Direction::OneWayForward, GridPoint::new(0, 0), GridPoint::new(1, 0)),
            Segment::straight(SegmentId(3), Direction::OneWayForward, GridPoint::new(1, 0), GridPoint::new(2, 0)),
        ];
        let err = build_manoeuvre_graph(&City::new(3, 1, segs), &ManoeuvrePenalties::default()).unwrap_err();
        assert_eq!(err, GraphError::DisconnectedInput { nodes: 2, largest_component: 1 });
    }

    #[test]
    fn dangling_branch_is_discarded() {
        use ct_city::{Direction, Segment};
        use ct_core::GridPoint;
        // A two-way street plus a one-way spur leading out of it.
        let a = Segment::straight(SegmentId(1), Direction::TwoWay, GridPoint::new(0, 0), GridPoint::new(1, 0));
        let spur = Segment::straight(SegmentId(6), Direction::OneWayForward, GridPoint::new(1, 0), GridPoint::new(1, 1));
        let city = City::new(2, 2, vec![a.clone(), a.reversed(), spur]);
        let g = build_manoeuvre_graph(&city, &ManoeuvrePenalties::default()).unwrap();
        assert_eq!(g.nodes(), &[SegmentId(1), SegmentId(-1)]);
        assert_eq!(g.edge_count(), 2);
    }
}

// ── Connectivity ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod scc {
    use ct_core::{Manoeuvre, Point2, SegmentId};

    use super::helpers::raw_graph;
    use crate::{
        Edge, ManoeuvreGraph, disconnected_nodes, is_strongly_connected,
        is_strongly_connected_without, largest_component, reachable_from,
        strongly_connected_components,
    };

    fn graph(pairs: &[(i32, i32)]) -> ManoeuvreGraph {
        let mut g = ManoeuvreGraph::new();
        for &(a, b) in pairs {
            g.add_edge(Edge::segment(SegmentId(a), SegmentId(b), Manoeuvre::GoStraight, 0, [Point2::default(); 2]));
        }
        g
    }

    #[test]
    fn components_in_node_order() {
        // Two 2-cycles joined by a one-way bridge, plus a sink.
        let g = graph(&[(1, 2), (2, 1), (2, 3), (3, 4), (4, 3), (4, 9)]);
        let comps = strongly_connected_components(&g);
        assert_eq!(comps, vec![
            vec![SegmentId(1), SegmentId(2)],
            vec![SegmentId(3), SegmentId(4)],
            vec![SegmentId(9)],
        ]);
        // Equal sizes: the earliest component wins.
        assert_eq!(largest_component(&g), vec![SegmentId(1), SegmentId(2)]);
        assert_eq!(disconnected_nodes(&g), vec![SegmentId(3), SegmentId(4), SegmentId(9)]);
        assert!(!is_strongly_connected(&g));
    }

    #[test]
    fn larger_component_wins() {
        let g = graph(&[(1, 2), (2, 1), (2, 3), (3, 4), (4, 5), (5, 3)]);
        assert_eq!(largest_component(&g), vec![SegmentId(3), SegmentId(4), SegmentId(5)]);
    }

    #[test]
    fn cycle_needs_every_edge() {
        let g = graph(&[(1, 2), (2, 3), (3, 1)]);
        assert!(is_strongly_connected(&g));
        assert!(!is_strongly_connected_without(&g, SegmentId(2), SegmentId(3)));
        // Absent edge: nothing is removed.
        assert!(is_strongly_connected_without(&g, SegmentId(3), SegmentId(2)));
    }

    #[test]
    fn empty_graph_not_connected() {
        assert!(!is_strongly_connected(&ManoeuvreGraph::new()));
        assert!(largest_component(&ManoeuvreGraph::new()).is_empty());
    }

    #[test]
    fn reachability_mask() {
        let g = graph(&[(1, 2), (2, 3)]);
        assert_eq!(reachable_from(&g, SegmentId(2)), vec![false, true, true]);
        assert_eq!(reachable_from(&g, SegmentId(7)), vec![false, false, false]);
    }

    #[test]
    fn regular_city_is_one_component() {
        let g = raw_graph(5, 4);
        assert_eq!(strongly_connected_components(&g).len(), 1);
        assert!(disconnected_nodes(&g).is_empty());
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod paths {
    use ct_core::{SegmentId, UTurnOrder};

    use super::helpers::{ids, pruned_graph};
    use crate::{GraphError, bfs_distances, hop_distance, shortest_path};

    #[test]
    fn trivial_same_node() {
        let g = pruned_graph(2, 2, UTurnOrder::MirrorPairs);
        let p = shortest_path(&g, SegmentId(1), SegmentId(1)).unwrap();
        assert!(p.is_trivial());
        assert_eq!(p.penalty(), 0);
        assert!(p.nodes().is_empty());
    }

    #[test]
    fn shortest_path_follows_pruned_edges() {
        let g = pruned_graph(2, 2, UTurnOrder::MirrorPairs);
        // 1 → 6 → -3 → -2 is the only way from 1 to -2 in three hops.
        let p = shortest_path(&g, SegmentId(1), SegmentId(-2)).unwrap();
        assert_eq!(p.nodes(), ids(&[1, 6, -3, -2]));
        assert_eq!(p.len(), 3);
        // Three left turns.
        assert_eq!(p.penalty(), 9);
        assert_eq!(hop_distance(&g, SegmentId(1), SegmentId(-2)).unwrap(), 3);
    }

    #[test]
    fn distances_cover_strongly_connected_graph() {
        let g = pruned_graph(3, 2, UTurnOrder::MirrorPairs);
        let dist = bfs_distances(&g, g.nodes()[0]).unwrap();
        assert_eq!(dist[0], Some(0));
        assert!(dist.iter().all(|d| d.is_some()));
    }

    #[test]
    fn unknown_node() {
        let g = pruned_graph(2, 2, UTurnOrder::MirrorPairs);
        assert_eq!(
            shortest_path(&g, SegmentId(99), SegmentId(1)).unwrap_err(),
            GraphError::NodeNotFound(SegmentId(99))
        );
        assert!(bfs_distances(&g, SegmentId(99)).is_err());
    }

    #[test]
    fn no_path_one_way() {
        use ct_core::{Manoeuvre, Point2};
        use crate::{Edge, ManoeuvreGraph};
        let mut g = ManoeuvreGraph::new();
        g.add_edge(Edge::segment(SegmentId(1), SegmentId(2), Manoeuvre::GoStraight, 0, [Point2::default(); 2]));
        assert!(shortest_path(&g, SegmentId(1), SegmentId(2)).is_ok());
        assert_eq!(
            shortest_path(&g, SegmentId(2), SegmentId(1)).unwrap_err(),
            GraphError::NoPath { from: SegmentId(2), to: SegmentId(1) }
        );
    }
}

// ── Pruning ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod prune {
    use ct_core::{Manoeuvre, UTurnOrder};

    use super::helpers::{pairs, pruned_graph, raw_graph};
    use crate::{GraphError, GraphStatistics, ManoeuvreGraph, dead_ends, prune, prune_turns};

    #[test]
    fn two_by_two_after_pruning() {
        let g = pruned_graph(2, 2, UTurnOrder::MirrorPairs);
        let stats = GraphStatistics::of(&g);
        assert_eq!(stats.count(Manoeuvre::TurnRight), 4);
        assert_eq!(stats.count(Manoeuvre::TurnLeft), 4);
        assert_eq!(stats.count(Manoeuvre::MakeUTurn), 2);
        assert_eq!(stats.nodes, 8);
        assert_eq!(stats.edges, 10);
        assert!(stats.strongly_connected);
        assert_eq!(stats.disconnected, 0);
        assert_eq!(stats.dead_ends, 0);
        assert_eq!(pairs(&g), vec![
            (1, 6), (-1, 2), (6, -3), (2, 3), (-2, 1),
            (3, -3), (3, -6), (-3, -2), (-3, 3), (-6, -1),
        ]);
    }

    #[test]
    fn two_by_two_scan_order() {
        let g = pruned_graph(2, 2, UTurnOrder::Scan);
        let stats = GraphStatistics::of(&g);
        assert_eq!(stats.edges, 10);
        assert_eq!(stats.count(Manoeuvre::MakeUTurn), 2);
        assert!(stats.strongly_connected);
        // Scan order keeps the u-turns at -3 and -6, which leaves the graph
        // unbalanced.
        assert!(!g.is_balanced());
    }

    #[test]
    fn three_by_two_after_pruning() {
        let g = pruned_graph(3, 2, UTurnOrder::MirrorPairs);
        let stats = GraphStatistics::of(&g);
        assert_eq!(stats.nodes, 14);
        assert_eq!(stats.edges, 18);
        assert!(stats.strongly_connected);
        assert_eq!(stats.count(Manoeuvre::GoStraight), 4);
        assert_eq!(stats.count(Manoeuvre::TurnRight), 8);
        assert_eq!(stats.count(Manoeuvre::TurnLeft), 6);
        assert_eq!(stats.count(Manoeuvre::MakeUTurn), 0);
        assert_eq!(stats.dead_ends, 0);
    }

    #[test]
    fn three_by_one_keeps_end_u_turns() {
        let g = pruned_graph(3, 1, UTurnOrder::MirrorPairs);
        let stats = GraphStatistics::of(&g);
        assert_eq!(stats.count(Manoeuvre::GoStraight), 2);
        assert_eq!(stats.count(Manoeuvre::MakeUTurn), 2);
        assert_eq!(stats.edges, 4);
        // The ends of a single street are dead ends.
        assert_eq!(dead_ends(&g).len(), 2);
    }

    #[test]
    fn pruning_is_idempotent() {
        for (w, h) in [(2, 2), (3, 2), (4, 3), (5, 5)] {
            let once = pruned_graph(w, h, UTurnOrder::MirrorPairs);
            let twice = prune_turns(once.clone(), UTurnOrder::MirrorPairs, false).unwrap();
            assert_eq!(pairs(&once), pairs(&twice), "{w}x{h}");
        }
    }

    #[test]
    fn right_turn_pruning_keeps_connectivity() {
        let g = prune_turns(raw_graph(4, 3), UTurnOrder::MirrorPairs, true).unwrap();
        let stats = GraphStatistics::of(&g);
        assert!(stats.strongly_connected);
        let without = pruned_graph(4, 3, UTurnOrder::MirrorPairs);
        assert!(stats.count(Manoeuvre::TurnRight) <= GraphStatistics::of(&without).count(Manoeuvre::TurnRight));
    }

    #[test]
    fn disconnected_input_rejected() {
        let err = prune(ManoeuvreGraph::new(), Manoeuvre::MakeUTurn, UTurnOrder::MirrorPairs).unwrap_err();
        assert!(matches!(err, GraphError::DisconnectedInput { nodes: 0, .. }));
    }
}
