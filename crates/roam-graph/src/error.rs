//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `roam-graph`.
///
/// Nearest-node queries signal the empty-map case through `Option` rather
/// than an error; `GraphError` covers map ingestion only.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "osm")]
    #[error("OSM parse error: {0}")]
    Osm(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
