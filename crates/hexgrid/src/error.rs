//! Error types for the planar hex grid.

use thiserror::Error;

/// Result type alias using HexGridError.
pub type HexGridResult<T> = Result<T, HexGridError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexGridError {
    #[error("Region needs at least 3 vertices, got {vertices}")]
    EmptyRegion { vertices: usize },

    #[error("Region vertex {index} is not finite")]
    NonFiniteVertex { index: usize },

    #[error("Region spans {candidates} candidate cells, limit is {limit}")]
    RegionTooLarge { candidates: u64, limit: u64 },

    #[error("Unknown orientation: {0}")]
    UnknownOrientation(String),
}
