//! The result of a successful route query.

use roam_core::{MapPoint, NodeId};

/// One step of a planned route: a value copy of the graph node's identity
/// and position, decoupled from the live map.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub id: NodeId,
    pub pos: MapPoint,
}

/// An ordered start→end node sequence plus the traversed distance in meters.
///
/// Created once when a search succeeds; immutable thereafter.  The node
/// list always contains at least one element — exactly one when start and
/// end resolve to the same node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedRoute {
    /// Nodes to visit in order, from start to end inclusive.
    pub nodes: Vec<PathNode>,
    /// Total traversed distance in meters (map-unit length × metric scale).
    pub distance_m: f32,
}

impl PlannedRoute {
    /// Number of nodes on the route (≥ 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if start and end resolved to the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The first node of the route.
    pub fn start(&self) -> PathNode {
        self.nodes[0]
    }

    /// The last node of the route.
    pub fn end(&self) -> PathNode {
        self.nodes[self.nodes.len() - 1]
    }
}
