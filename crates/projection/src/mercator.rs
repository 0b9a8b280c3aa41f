//! Spherical (Web) Mercator projection.
//!
//! The default projection for geographic hex grids. Longitude maps
//! linearly onto x, latitude is stretched by `ln(tan φ + sec φ)` and
//! diverges as `φ → ±90°`. Nothing is clamped near the poles: a latitude
//! of exactly ±90° is reported as a domain error.

use std::f64::consts::PI;

use geo_common::{GeoPoint, PlanarPoint, EARTH_CIRCUMFERENCE, EARTH_METERS_PER_DEGREE};

use crate::error::{finite_geopoint, finite_point};
use crate::transform::Project;
use crate::{ProjectionError, ProjectionResult, SINGULAR_EPSILON};

/// Spherical Mercator projection, output in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SphericalMercator;

impl SphericalMercator {
    pub const NAME: &'static str = "spherical-mercator";
}

impl Project for SphericalMercator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_point(&self, geopoint: GeoPoint) -> ProjectionResult<PlanarPoint> {
        let lat_r = geopoint.lat * (PI / 180.0);

        let cos_lat = lat_r.cos();
        if cos_lat.abs() <= SINGULAR_EPSILON {
            return Err(ProjectionError::ForwardDomain {
                projection: Self::NAME,
                point: geopoint,
                reason: "cos(latitude) is zero at the pole",
            });
        }

        let stretch = lat_r.tan() + 1.0 / cos_lat;
        if stretch <= 0.0 {
            return Err(ProjectionError::ForwardDomain {
                projection: Self::NAME,
                point: geopoint,
                reason: "logarithm of a non-positive value",
            });
        }

        let x = geopoint.lon * EARTH_METERS_PER_DEGREE;
        let y = stretch.ln() / PI * (EARTH_CIRCUMFERENCE / 2.0);

        finite_point(Self::NAME, geopoint, PlanarPoint::new(x, y))
    }

    fn to_geopoint(&self, point: PlanarPoint) -> ProjectionResult<GeoPoint> {
        let lon = point.x / EARTH_METERS_PER_DEGREE;
        let lat = (point.y / (EARTH_CIRCUMFERENCE / 2.0) * PI).tanh().asin() * (180.0 / PI);

        finite_geopoint(Self::NAME, point, GeoPoint::new(lon, lat))
    }
}
