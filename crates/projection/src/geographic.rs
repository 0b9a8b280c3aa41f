//! Identity projection.
//!
//! Degrees are used directly as plane coordinates: longitude becomes `x`,
//! latitude becomes `y`. Useful for grids defined in degree units and for
//! tests.

use geo_common::{GeoPoint, PlanarPoint};

use crate::transform::Project;
use crate::ProjectionResult;

/// Pass-through projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Identity {
    pub const NAME: &'static str = "identity";
}

impl Project for Identity {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn to_point(&self, geopoint: GeoPoint) -> ProjectionResult<PlanarPoint> {
        Ok(PlanarPoint::new(geopoint.lon, geopoint.lat))
    }

    fn to_geopoint(&self, point: PlanarPoint) -> ProjectionResult<GeoPoint> {
        Ok(GeoPoint::new(point.x, point.y))
    }
}
