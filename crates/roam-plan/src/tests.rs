//! Unit tests for roam-plan.
//!
//! All tests use hand-crafted maps so they run without any OSM file.

#[cfg(test)]
mod helpers {
    use roam_core::{MapPoint, NodeId};
    use roam_graph::{RoadMap, RoadMapBuilder};

    /// Build a small grid map for testing.
    ///
    /// Nodes (x, y) in map units:
    ///   0:(0.0, 0.0)  1:(0.1, 0.0)  2:(0.2, 0.0)
    ///   3:(0.0, 0.1)                4:(0.2, 0.1)
    ///
    /// Undirected edges: 0-1 (0.1), 1-2 (0.1), 2-4 (0.1),
    /// 0-3 (0.5 long detour), 3-4 (0.2).
    ///
    /// Every length is at least the straight-line distance between its
    /// endpoints, so the planner's heuristic stays admissible here.
    /// Cheapest 0→4 is 0→1→2→4 (0.3) vs 0→3→4 (0.7).
    pub fn grid_map() -> (RoadMap, [NodeId; 5]) {
        let mut b = RoadMapBuilder::new();

        let n0 = b.add_node(MapPoint::new(0.0, 0.0));
        let n1 = b.add_node(MapPoint::new(0.1, 0.0));
        let n2 = b.add_node(MapPoint::new(0.2, 0.0));
        let n3 = b.add_node(MapPoint::new(0.0, 0.1));
        let n4 = b.add_node(MapPoint::new(0.2, 0.1));

        b.add_road(n0, n1, 0.1);
        b.add_road(n1, n2, 0.1);
        b.add_road(n2, n4, 0.1);
        b.add_road(n0, n3, 0.5); // long slow road
        b.add_road(n3, n4, 0.2);

        (b.build(), [n0, n1, n2, n3, n4])
    }

    /// The classic 4-node diamond:
    ///
    /// ```text
    ///       B
    ///   1 /   \ 1
    ///   A       D        A-C cost 4, C-D cost 1, B-C not connected
    ///   4 \   / 1
    ///       C
    /// ```
    ///
    /// Geometric positions keep every edge at least as long as the straight
    /// line between its endpoints, so the heuristic stays admissible.
    /// The cheap route is A→B→D (2), not A→C→D (5).
    pub fn diamond_map() -> (RoadMap, [NodeId; 4]) {
        let mut b = RoadMapBuilder::new();

        let a = b.add_node(MapPoint::new(0.0, 0.0));
        let bb = b.add_node(MapPoint::new(0.25, 0.0));
        let c = b.add_node(MapPoint::new(0.25, 0.25));
        let d = b.add_node(MapPoint::new(0.5, 0.0));

        b.add_road(a, bb, 1.0);
        b.add_road(a, c, 4.0);
        b.add_road(bb, d, 1.0);
        b.add_road(c, d, 1.0);

        (b.build(), [a, bb, c, d])
    }

    pub fn ids(route: &crate::PlannedRoute) -> Vec<NodeId> {
        route.nodes.iter().map(|n| n.id).collect()
    }
}

// ── A* search ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use roam_core::MapPoint;
    use roam_graph::RoadMapBuilder;

    use crate::{AStarPlanner, PlanError, Planner};

    #[test]
    fn trivial_same_node() {
        let (map, [n0, ..]) = super::helpers::grid_map();
        let route = AStarPlanner.plan(&map, n0, n0).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.len(), 1);
        assert_eq!(route.start().id, n0);
        assert_eq!(route.distance_m, 0.0);
    }

    #[test]
    fn cheapest_path_wins() {
        let (map, [n0, n1, n2, _, n4]) = super::helpers::grid_map();
        let route = AStarPlanner.plan(&map, n0, n4).unwrap();

        assert_eq!(super::helpers::ids(&route), vec![n0, n1, n2, n4]);
        assert!((route.distance_m - 0.3).abs() < 1e-5);
    }

    #[test]
    fn endpoints_are_start_and_goal() {
        let (map, [n0, _, _, n3, _]) = super::helpers::grid_map();
        let route = AStarPlanner.plan(&map, n0, n3).unwrap();
        assert_eq!(route.start().id, n0);
        assert_eq!(route.end().id, n3);
    }

    #[test]
    fn diamond_prefers_two_hops_over_heavy_edge() {
        let (map, [a, b, _, d]) = super::helpers::diamond_map();
        let route = AStarPlanner.plan(&map, a, d).unwrap();

        assert_eq!(super::helpers::ids(&route), vec![a, b, d]);
        assert!((route.distance_m - 2.0).abs() < 1e-6);
    }

    #[test]
    fn no_route_disconnected() {
        let mut b = RoadMapBuilder::new();
        let a = b.add_node(MapPoint::new(0.0, 0.0));
        let c = b.add_node(MapPoint::new(1.0, 0.0));
        // No edges — a and c are completely disconnected.
        let map = b.build();

        let result = AStarPlanner.plan(&map, a, c);
        assert!(matches!(result, Err(PlanError::NoRoute { .. })));
    }

    #[test]
    fn one_way_blocks_return() {
        let mut b = RoadMapBuilder::new();
        let a = b.add_node(MapPoint::new(0.0, 0.0));
        let c = b.add_node(MapPoint::new(0.0, 0.5));
        b.add_directed_edge(a, c, 0.5); // one-way a→c
        let map = b.build();

        assert!(AStarPlanner.plan(&map, a, c).is_ok());
        assert!(AStarPlanner.plan(&map, c, a).is_err());
    }

    #[test]
    fn distance_uses_metric_scale() {
        let mut b = RoadMapBuilder::new();
        let a = b.add_node(MapPoint::new(0.0, 0.0));
        let c = b.add_node(MapPoint::new(0.5, 0.0));
        b.add_link(a, c); // length 0.5 map units
        b.metric_scale(2_000.0);
        let map = b.build();

        let route = AStarPlanner.plan(&map, a, c).unwrap();
        assert!((route.distance_m - 1_000.0).abs() < 1e-2);
    }

    #[test]
    fn distance_matches_pairwise_node_distances() {
        // Geometric map: edge lengths equal node distances, so the reported
        // total must equal the pairwise sum along the returned route.
        let mut b = RoadMapBuilder::new();
        let a = b.add_node(MapPoint::new(0.1, 0.1));
        let c = b.add_node(MapPoint::new(0.4, 0.5));
        let d = b.add_node(MapPoint::new(0.9, 0.6));
        b.add_link(a, c);
        b.add_link(c, d);
        b.metric_scale(10_000.0);
        let map = b.build();

        let route = AStarPlanner.plan(&map, a, d).unwrap();
        let pairwise: f32 = route
            .nodes
            .windows(2)
            .map(|w| w[0].pos.distance(w[1].pos))
            .sum();
        assert!((route.distance_m - pairwise * map.metric_scale()).abs() < 1e-2);
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism {
    use roam_core::MapPoint;
    use roam_graph::RoadMapBuilder;

    use crate::{AStarPlanner, Planner};

    #[test]
    fn repeated_runs_are_identical() {
        let (map, [n0, .., n4]) = super::helpers::grid_map();

        let first = AStarPlanner.plan(&map, n0, n4).unwrap();
        let second = AStarPlanner.plan(&map, n0, n4).unwrap();

        assert_eq!(super::helpers::ids(&first), super::helpers::ids(&second));
        assert_eq!(first.distance_m, second.distance_m);
    }

    #[test]
    fn equal_cost_tie_breaks_on_node_index() {
        // A symmetric square: two optimal routes A→B→D and A→C→D of equal
        // cost.  The frontier tie-break (f, then h, then node index) must
        // pick the same one every run — B has the lower index.
        let mut bld = RoadMapBuilder::new();
        let a = bld.add_node(MapPoint::new(0.0, 0.0));
        let b = bld.add_node(MapPoint::new(0.5, 0.0));
        let c = bld.add_node(MapPoint::new(0.0, 0.5));
        let d = bld.add_node(MapPoint::new(0.5, 0.5));
        bld.add_road(a, b, 0.5);
        bld.add_road(a, c, 0.5);
        bld.add_road(b, d, 0.5);
        bld.add_road(c, d, 0.5);
        let map = bld.build();

        for _ in 0..3 {
            let route = AStarPlanner.plan(&map, a, d).unwrap();
            assert_eq!(super::helpers::ids(&route), vec![a, b, d]);
        }
    }
}

// ── RoutePlanner session ──────────────────────────────────────────────────────

#[cfg(test)]
mod session {
    use roam_core::MapPoint;
    use roam_graph::{RoadMap, RoadMapBuilder};

    use crate::{PlanError, RoutePlanner};

    /// Three nodes placed so that a start snap that wrongly reused the
    /// x-coordinate for both axes would land on the wrong node.
    fn asymmetric_map() -> (RoadMap, [roam_core::NodeId; 3]) {
        let mut b = RoadMapBuilder::new();
        let n0 = b.add_node(MapPoint::new(0.2, 0.8));
        let n1 = b.add_node(MapPoint::new(0.2, 0.2));
        let n2 = b.add_node(MapPoint::new(0.8, 0.5));
        b.add_link(n0, n2);
        b.add_link(n1, n2);
        (b.build(), [n0, n1, n2])
    }

    #[test]
    fn resolves_with_both_axes() {
        let (map, [n0, _, n2]) = asymmetric_map();
        // (20, 80) percent → (0.2, 0.8) map units → exactly n0.  Snapping
        // with (0.2, 0.2) instead would pick n1.
        let planner = RoutePlanner::new(&map, (20.0, 80.0), (80.0, 50.0)).unwrap();
        assert_eq!(planner.start(), n0);
        assert_eq!(planner.end(), n2);
    }

    #[test]
    fn runs_end_to_end() {
        let (map, [n0, _, n2]) = asymmetric_map();
        let planner = RoutePlanner::new(&map, (20.0, 80.0), (80.0, 50.0)).unwrap();
        let route = planner.run().unwrap();
        assert_eq!(route.start().id, n0);
        assert_eq!(route.end().id, n2);
        assert_eq!(route.len(), 2);
    }

    #[test]
    fn same_resolved_node_is_trivial() {
        let (map, [n0, ..]) = asymmetric_map();
        // Both coordinates snap to n0.
        let planner = RoutePlanner::new(&map, (20.0, 80.0), (21.0, 79.0)).unwrap();
        let route = planner.run().unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.start().id, n0);
        assert_eq!(route.distance_m, 0.0);
    }

    #[test]
    fn empty_map_fails_at_construction() {
        let map = RoadMap::empty();
        let result = RoutePlanner::new(&map, (10.0, 10.0), (90.0, 90.0));
        assert!(matches!(result, Err(PlanError::EmptyMap)));
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let (map, _) = asymmetric_map();
        let result = RoutePlanner::new(&map, (f32::NAN, 10.0), (90.0, 90.0));
        assert!(matches!(result, Err(PlanError::InvalidCoordinate { .. })));
    }

    #[test]
    fn out_of_range_coordinate_snaps() {
        let (map, [_, _, n2]) = asymmetric_map();
        // 250 % is outside the map but finite — snaps to the nearest node.
        let planner = RoutePlanner::new(&map, (250.0, 50.0), (20.0, 80.0)).unwrap();
        assert_eq!(planner.start(), n2);
    }
}
