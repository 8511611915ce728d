//! plan_route — smallest runnable example for the roam route planner.
//!
//! Builds a synthetic 7-node town map, plans a route between two
//! percent-unit coordinate pairs, and prints the node sequence and total
//! distance.  Swap [`network::build_map`] for
//! `roam_graph::osm::load_from_pbf` (feature `osm`) to run against a real
//! map extract.

mod network;

use anyhow::Result;

use roam_plan::RoutePlanner;

use network::build_map;

// ── Query ─────────────────────────────────────────────────────────────────────

const START: (f32, f32) = (10.0, 10.0); // percent units, west end of town
const END: (f32, f32) = (90.0, 85.0); // east end, across the bridge

fn main() -> Result<()> {
    env_logger::init();

    let map = build_map();
    let planner = RoutePlanner::new(&map, START, END)?;
    let route = planner.run()?;

    println!(
        "route from {} to {}: {} nodes, {:.0} m",
        planner.start(),
        planner.end(),
        route.len(),
        route.distance_m,
    );
    for node in &route.nodes {
        println!("  {} at {}", node.id, node.pos);
    }

    Ok(())
}
