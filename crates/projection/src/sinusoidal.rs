//! Sinusoidal projection.
//!
//! An equal-area pseudo-cylindrical projection. Longitude is shifted into
//! `[0°, 360°)` and meridians are compressed by the cosine of latitude, so
//! the x axis starts at the antimeridian rather than at Greenwich.
//!
//! The inverse divides by `cos(φ)` and is undefined at the poles.

use std::f64::consts::PI;

use geo_common::{GeoPoint, PlanarPoint, EARTH_RADIUS};

use crate::error::{finite_geopoint, finite_point};
use crate::transform::Project;
use crate::{ProjectionError, ProjectionResult, SINGULAR_EPSILON};

/// Spherical sinusoidal projection, output in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sinusoidal;

impl Sinusoidal {
    pub const NAME: &'static str = "sinusoidal";
}

impl Project for Sinusoidal {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_point(&self, geopoint: GeoPoint) -> ProjectionResult<PlanarPoint> {
        let to_rad = PI / 180.0;

        let lambda = (geopoint.lon + 180.0) * to_rad;
        let phi = geopoint.lat * to_rad;

        let x = lambda * phi.cos() * EARTH_RADIUS;
        let y = phi * EARTH_RADIUS;

        finite_point(Self::NAME, geopoint, PlanarPoint::new(x, y))
    }

    fn to_geopoint(&self, point: PlanarPoint) -> ProjectionResult<GeoPoint> {
        let to_rad = PI / 180.0;

        let phi = point.y / EARTH_RADIUS;
        let cos_phi = phi.cos();
        if cos_phi.abs() <= SINGULAR_EPSILON {
            return Err(ProjectionError::InverseDomain {
                projection: Self::NAME,
                point,
                reason: "cos(latitude) is zero at the pole",
            });
        }

        let lambda = point.x / (cos_phi * EARTH_RADIUS);
        let lon = lambda / to_rad - 180.0;
        let lat = phi / to_rad;

        finite_geopoint(Self::NAME, point, GeoPoint::new(lon, lat))
    }
}
