//! Raw-coordinate front end: resolve a start/end pair once, plan on demand.
//!
//! Callers hand in coordinates in percent units (0–100 across the map, the
//! convention of map-tile front ends).  The session normalizes them to map
//! units, snaps each pair to the nearest road node, and holds the resolved
//! endpoints for its lifetime.

use roam_core::{MapPoint, NodeId};
use roam_graph::RoadMap;

use crate::error::{PlanError, PlanResult};
use crate::route::PlannedRoute;
use crate::search::{AStarPlanner, Planner};

/// Percent units per map unit.
const PERCENT: f32 = 100.0;

/// A route-planning session over one map with fixed endpoints.
///
/// Construction resolves both endpoints; [`run`](Self::run) executes the
/// search.  Each run builds its search state from scratch, so repeated runs
/// on an unmodified map return identical routes.
pub struct RoutePlanner<'m> {
    map: &'m RoadMap,
    start: NodeId,
    end: NodeId,
}

impl<'m> RoutePlanner<'m> {
    /// Resolve `(x, y)` percent-unit coordinate pairs to their nearest road
    /// nodes.  Both axes of each pair participate in the lookup.
    ///
    /// # Errors
    ///
    /// [`PlanError::EmptyMap`] if the map has no nodes,
    /// [`PlanError::InvalidCoordinate`] for non-finite input.  Out-of-range
    /// finite coordinates are accepted and snap to the nearest node.
    pub fn new(map: &'m RoadMap, start: (f32, f32), end: (f32, f32)) -> PlanResult<Self> {
        let start = resolve(map, start)?;
        let end = resolve(map, end)?;
        Ok(Self { map, start, end })
    }

    /// The resolved start node.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// The resolved end node.
    pub fn end(&self) -> NodeId {
        self.end
    }

    /// Run A* between the resolved endpoints and return the route.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoRoute`] if the endpoints are not connected.
    pub fn run(&self) -> PlanResult<PlannedRoute> {
        AStarPlanner.plan(self.map, self.start, self.end)
    }
}

fn resolve(map: &RoadMap, (x, y): (f32, f32)) -> PlanResult<NodeId> {
    if !x.is_finite() || !y.is_finite() {
        return Err(PlanError::InvalidCoordinate { x, y });
    }
    let pos = MapPoint::new(x / PERCENT, y / PERCENT);
    map.nearest_node(pos).ok_or(PlanError::EmptyMap)
}
