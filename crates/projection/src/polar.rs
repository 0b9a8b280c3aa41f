//! Azimuthal equidistant projection, polar aspect.
//!
//! The north pole is the projection center. Distance from the center is
//! the angular colatitude `ρ = π/2 − φ` and the azimuth is the longitude,
//! measured so that the prime meridian points along −y.
//!
//! Output is in radians of arc, not meters. Cell sizes tuned for the
//! metric projections are meaningless here.
//!
//! The inverse recovers `ρ` as the distance from the center, which equals
//! `x / sin(θ)` wherever that quotient is defined. Points with `x = 0` and
//! `y ≤ 0` (the prime meridian, including the pole) have `θ = 0` and are
//! rejected.

use std::f64::consts::{FRAC_PI_2, PI};

use geo_common::{GeoPoint, PlanarPoint};

use crate::error::{finite_geopoint, finite_point};
use crate::transform::Project;
use crate::{ProjectionError, ProjectionResult};

/// North-polar azimuthal equidistant projection, output in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolarAzimuthal;

impl PolarAzimuthal {
    pub const NAME: &'static str = "polar-azimuthal";
}

impl Project for PolarAzimuthal {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_point(&self, geopoint: GeoPoint) -> ProjectionResult<PlanarPoint> {
        let to_rad = PI / 180.0;

        let theta = geopoint.lon * to_rad;
        let rho = FRAC_PI_2 - geopoint.lat * to_rad;

        let x = rho * theta.sin();
        let y = -rho * theta.cos();

        finite_point(Self::NAME, geopoint, PlanarPoint::new(x, y))
    }

    fn to_geopoint(&self, point: PlanarPoint) -> ProjectionResult<GeoPoint> {
        let to_rad = PI / 180.0;

        if point.x == 0.0 && point.y <= 0.0 {
            return Err(ProjectionError::InverseDomain {
                projection: Self::NAME,
                point,
                reason: "azimuth is zero on the prime meridian",
            });
        }

        let theta = point.x.atan2(-point.y);
        let rho = point.x.hypot(point.y);
        let lat = (FRAC_PI_2 - rho) / to_rad;
        let lon = theta / to_rad;

        finite_geopoint(Self::NAME, point, GeoPoint::new(lon, lat))
    }
}
