//! Planner trait and the default A* implementation.
//!
//! # Cost model
//!
//! Edge lengths in map units are the search cost; the heuristic is the
//! straight-line map-unit distance to the goal.  The heuristic is admissible
//! and consistent whenever every edge is at least as long as the straight
//! line between its endpoints — true by construction for maps built from
//! geometry (the OSM loader, [`RoadMapBuilder::add_link`]) and a documented
//! requirement on explicit lengths.
//!
//! # Search state
//!
//! All state is call-local: a `g` table (best known cost per node), a
//! parent-edge table, and a binary-heap frontier keyed on f = g + h.  The
//! map itself is never written, so one map can serve concurrent searches.
//!
//! [`RoadMapBuilder::add_link`]: roam_graph::RoadMapBuilder::add_link

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use roam_core::{EdgeId, NodeId};
use roam_graph::RoadMap;

use crate::error::{PlanError, PlanResult};
use crate::route::{PathNode, PlannedRoute};

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable route-planning engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a single instance can serve
/// requests from multiple threads against a shared [`RoadMap`].
pub trait Planner: Send + Sync {
    /// Compute the cheapest route from `from` to `to`.
    ///
    /// `from == to` yields a trivial single-node route rather than an error.
    ///
    /// # Errors
    ///
    /// [`PlanError::NoRoute`] if the frontier is exhausted before the goal
    /// is reached.
    fn plan(&self, map: &RoadMap, from: NodeId, to: NodeId) -> PlanResult<PlannedRoute>;
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

/// A* over the CSR road graph with a binary-heap frontier.
///
/// Expansion relaxes a neighbor only when the candidate cost improves on
/// its best known cost, so no node re-enters the frontier with a stale
/// value; entries made stale by a later improvement are skipped on pop.
pub struct AStarPlanner;

impl Planner for AStarPlanner {
    fn plan(&self, map: &RoadMap, from: NodeId, to: NodeId) -> PlanResult<PlannedRoute> {
        astar(map, from, to)
    }
}

// ── Frontier ──────────────────────────────────────────────────────────────────

/// Heap entry: a discovered node awaiting expansion.
///
/// Ordered by f, then h, then node index — a fully deterministic tie-break,
/// so equal-cost searches reproduce the same route on every run.  `g` rides
/// along to detect entries obsoleted by a later relaxation.
#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    f: f32,
    h: f32,
    g: f32,
    node: NodeId,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.node.cmp(&other.node))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// ── A* internals ──────────────────────────────────────────────────────────────

fn astar(map: &RoadMap, from: NodeId, to: NodeId) -> PlanResult<PlannedRoute> {
    if from == to {
        let node = PathNode { id: from, pos: map.node_pos[from.index()] };
        return Ok(PlannedRoute { nodes: vec![node], distance_m: 0.0 });
    }

    let n = map.node_count();
    let goal_pos = map.node_pos[to.index()];

    // g[v] = best known cost (map units) to reach v; INFINITY = undiscovered.
    let mut g = vec![f32::INFINITY; n];
    // prev_edge[v] = edge that reached v on the best known path.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    g[from.index()] = 0.0;

    // Min-heap on f = g + h. Reverse makes BinaryHeap (max) behave as min.
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    let h0 = map.node_pos[from.index()].distance(goal_pos);
    frontier.push(Reverse(FrontierEntry { f: h0, h: h0, g: 0.0, node: from }));

    let mut expanded = 0usize;

    while let Some(Reverse(entry)) = frontier.pop() {
        let cur = entry.node;

        if cur == to {
            log::debug!("a* reached {to} from {from} after {expanded} expansions");
            return Ok(reconstruct(map, &prev_edge, to));
        }

        // Skip entries obsoleted by a cheaper relaxation.
        if entry.g > g[cur.index()] {
            continue;
        }
        expanded += 1;

        for edge in map.out_edges(cur) {
            let neighbor = map.edge_to[edge.index()];
            let cand = g[cur.index()] + map.edge_len[edge.index()];

            if cand < g[neighbor.index()] {
                g[neighbor.index()] = cand;
                prev_edge[neighbor.index()] = edge;
                let h = map.node_pos[neighbor.index()].distance(goal_pos);
                frontier.push(Reverse(FrontierEntry {
                    f: cand + h,
                    h,
                    g: cand,
                    node: neighbor,
                }));
            }
        }
    }

    log::debug!("a* frontier exhausted after {expanded} expansions: {from} → {to}");
    Err(PlanError::NoRoute { from, to })
}

/// Walk the parent-edge chain from the goal back to the start, accumulating
/// traversed edge lengths, then reverse into start→end order and convert
/// the length to meters with the map's metric scale.
fn reconstruct(map: &RoadMap, prev_edge: &[EdgeId], goal: NodeId) -> PlannedRoute {
    let mut nodes = Vec::new();
    let mut length = 0.0f32;

    let mut cur = goal;
    loop {
        nodes.push(PathNode { id: cur, pos: map.node_pos[cur.index()] });
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        length += map.edge_len[e.index()];
        cur = map.edge_from[e.index()];
    }
    nodes.reverse();

    PlannedRoute {
        nodes,
        distance_m: length * map.metric_scale(),
    }
}
