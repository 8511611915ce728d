//! Planner error type.

use thiserror::Error;

use roam_core::NodeId;

/// Errors produced by `roam-plan`.
///
/// A search that exhausts its frontier is a definitive, distinguishable
/// outcome ([`PlanError::NoRoute`]), never a partial path.  Start resolving
/// to the same node as end is *not* an error — it yields a trivial
/// single-node route.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },

    #[error("map has no nodes to resolve a coordinate against")]
    EmptyMap,

    #[error("coordinate ({x}, {y}) is not finite")]
    InvalidCoordinate { x: f32, y: f32 },
}

pub type PlanResult<T> = Result<T, PlanError>;
