//! Error types for geographic grid operations.

use std::error::Error as StdError;

use projection::ProjectionError;
use thiserror::Error;

/// Result type alias using GridError, generic over the engine's error.
pub type GridResult<T, E> = Result<T, GridError<E>>;

/// Failures of the geographic grid façade.
#[derive(Debug, Error)]
pub enum GridError<E: StdError + 'static> {
    /// An explicit parameter disagrees with the supplied engine.
    #[error("Conflicting {field}: requested {requested}, engine has {engine}")]
    ConstructionConflict {
        field: &'static str,
        requested: String,
        engine: String,
    },

    #[error("Missing grid parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid grid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Passed through from the engine unchanged.
    #[error("Engine error: {0}")]
    Engine(#[source] E),
}

impl<E: StdError + 'static> GridError<E> {
    /// True for errors raised while building a grid.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            GridError::ConstructionConflict { .. }
                | GridError::MissingParameter(_)
                | GridError::InvalidParameter(_)
        )
    }
}
