//! Coordinate transformations between geographic and planar space.
//!
//! Implements the spherical map projections used to lay a hexagonal grid
//! over the globe, from scratch without external projection libraries.
//! Every projection is a pure forward/inverse pair; [`Projection`] selects
//! one of them at runtime.

pub mod error;
pub mod geographic;
pub mod mercator;
pub mod polar;
pub mod sinusoidal;
pub mod transform;

pub use error::{ProjectionError, ProjectionResult};
pub use geographic::Identity;
pub use mercator::SphericalMercator;
pub use polar::PolarAzimuthal;
pub use sinusoidal::Sinusoidal;
pub use transform::{Project, Projection};

/// `cos(φ)` at or below this is zero: the pole, give or take a few ulps
/// of rounding in `φ`.
pub(crate) const SINGULAR_EPSILON: f64 = 4.0 * f64::EPSILON;
