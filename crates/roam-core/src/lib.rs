//! `roam-core` — foundational types for the `roam` route planner.
//!
//! This crate is a dependency of every other `roam-*` crate.  It intentionally
//! has no `roam-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                          |
//! |----------|---------------------------------------------------|
//! | [`ids`]  | `NodeId`, `EdgeId`                                |
//! | [`geo`]  | `MapPoint` (planar map units), `GeoPoint` (WGS-84)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{GeoPoint, MapPoint};
pub use ids::{EdgeId, NodeId};
