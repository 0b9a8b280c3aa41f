//! Error types for projection failures.

use geo_common::{GeoPoint, PlanarPoint};
use thiserror::Error;

/// Result type alias using ProjectionError.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// A projection could not map its input.
///
/// Raised at mathematically undefined points (poles, the reference
/// meridian of the polar projection) and whenever a computation would
/// otherwise produce a non-finite coordinate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("{projection} forward projection undefined at {point}: {reason}")]
    ForwardDomain {
        projection: &'static str,
        point: GeoPoint,
        reason: &'static str,
    },

    #[error("{projection} inverse projection undefined at {point}: {reason}")]
    InverseDomain {
        projection: &'static str,
        point: PlanarPoint,
        reason: &'static str,
    },

    #[error("Unknown projection: {0}")]
    UnknownProjection(String),
}

impl ProjectionError {
    /// Name of the projection that failed, if the error came from one.
    pub fn projection(&self) -> Option<&'static str> {
        match self {
            ProjectionError::ForwardDomain { projection, .. }
            | ProjectionError::InverseDomain { projection, .. } => Some(projection),
            ProjectionError::UnknownProjection(_) => None,
        }
    }
}

/// Reject non-finite forward results.
pub(crate) fn finite_point(
    projection: &'static str,
    input: GeoPoint,
    point: PlanarPoint,
) -> ProjectionResult<PlanarPoint> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(ProjectionError::ForwardDomain {
            projection,
            point: input,
            reason: "non-finite result",
        })
    }
}

/// Reject non-finite inverse results.
pub(crate) fn finite_geopoint(
    projection: &'static str,
    input: PlanarPoint,
    point: GeoPoint,
) -> ProjectionResult<GeoPoint> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(ProjectionError::InverseDomain {
            projection,
            point: input,
            reason: "non-finite result",
        })
    }
}
