//! `roam-graph` — road-network graph and spatial indexing.
//!
//! # Crate layout
//!
//! | Module    | Contents                                           |
//! |-----------|----------------------------------------------------|
//! | [`map`]   | `RoadMap` (CSR + R-tree), `RoadMapBuilder`         |
//! | [`osm`]   | `load_from_pbf` (feature = `"osm"` only)           |
//! | [`error`] | `GraphError`, `GraphResult<T>`                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `osm`   | Enables OSM PBF loading via the `osmpbf` crate.     |
//! | `serde` | Propagates serde derives to `roam-core` types.      |

pub mod error;
pub mod map;

#[cfg(feature = "osm")]
pub mod osm;


pub use error::{GraphError, GraphResult};
pub use map::{RoadMap, RoadMapBuilder};
