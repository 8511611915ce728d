//! `roam-plan` — A* route planning over a [`roam_graph::RoadMap`].
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`route`]   | `PathNode`, `PlannedRoute`                          |
//! | [`search`]  | `Planner` trait, `AStarPlanner`                     |
//! | [`session`] | `RoutePlanner` (raw-coordinate front end)           |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                        |
//!
//! # Pluggability
//!
//! Callers route via the [`Planner`] trait, so applications can swap in
//! custom implementations (bidirectional search, contraction hierarchies,
//! congestion models) without touching the rest of the stack.  The default
//! [`AStarPlanner`] is the reference engine.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod route;
pub mod search;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use route::{PathNode, PlannedRoute};
pub use search::{AStarPlanner, Planner};
pub use session::RoutePlanner;
