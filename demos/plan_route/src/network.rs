//! Synthetic town map used by the demo.
//!
//! Seven nodes across the unit square: a main street running west→east via
//! the market and the bridge, and a northern bypass.  Segment lengths come
//! from geometry; the metric scale maps the square to a 15 km town.

use roam_core::MapPoint;
use roam_graph::{RoadMap, RoadMapBuilder};

/// Meters per map unit.
const SCALE_M: f32 = 15_000.0;

pub fn build_map() -> RoadMap {
    let mut b = RoadMapBuilder::new();
    b.metric_scale(SCALE_M);

    let west = b.add_node(MapPoint::new(0.10, 0.10));
    let square = b.add_node(MapPoint::new(0.35, 0.20));
    let market = b.add_node(MapPoint::new(0.55, 0.35));
    let bridge = b.add_node(MapPoint::new(0.70, 0.55));
    let east = b.add_node(MapPoint::new(0.90, 0.85));
    let north_a = b.add_node(MapPoint::new(0.20, 0.55));
    let north_b = b.add_node(MapPoint::new(0.50, 0.75));

    // Main street
    b.add_link(west, square);
    b.add_link(square, market);
    b.add_link(market, bridge);
    b.add_link(bridge, east);

    // Northern bypass
    b.add_link(west, north_a);
    b.add_link(north_a, north_b);
    b.add_link(north_b, east);

    b.build()
}
