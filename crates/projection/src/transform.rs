//! Projection selection and batch transformation.
//!
//! [`Project`] is the forward/inverse capability every projection
//! implements. [`Projection`] is the closed set of supported projections,
//! chosen at runtime (configuration, command line) and dispatched with an
//! exhaustive `match`.

use std::fmt;
use std::str::FromStr;

use geo_common::{GeoPoint, PlanarPoint};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    Identity, PolarAzimuthal, ProjectionError, ProjectionResult, Sinusoidal, SphericalMercator,
};

/// A forward/inverse mapping between geographic and planar coordinates.
///
/// Implementations are stateless and must be safe to call from many
/// threads at once.
pub trait Project: Send + Sync {
    /// Short, stable name used in configuration and error messages.
    fn name(&self) -> &'static str;

    /// Forward projection: degrees to plane.
    fn to_point(&self, geopoint: GeoPoint) -> ProjectionResult<PlanarPoint>;

    /// Inverse projection: plane to degrees.
    fn to_geopoint(&self, point: PlanarPoint) -> ProjectionResult<GeoPoint>;

    /// Forward-project a sequence, keeping its order.
    ///
    /// Fails as a whole on the first point that cannot be projected.
    fn to_points(&self, geopoints: &[GeoPoint]) -> ProjectionResult<Vec<PlanarPoint>> {
        geopoints.iter().map(|p| self.to_point(*p)).collect()
    }

    /// Inverse-project a sequence, keeping its order.
    fn to_geopoints(&self, points: &[PlanarPoint]) -> ProjectionResult<Vec<GeoPoint>> {
        points.iter().map(|p| self.to_geopoint(*p)).collect()
    }
}

/// The supported projections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    /// Degrees used directly as plane units
    #[serde(alias = "noop")]
    Identity,
    /// Equal-area sinusoidal, meters
    #[serde(alias = "sin")]
    Sinusoidal,
    /// North-polar azimuthal equidistant, radians
    #[serde(alias = "aep")]
    PolarAzimuthal,
    /// Spherical (Web) Mercator, meters
    #[default]
    #[serde(alias = "sm", alias = "web-mercator")]
    SphericalMercator,
}

impl Projection {
    /// Every supported projection, in declaration order.
    pub const ALL: [Projection; 4] = [
        Projection::Identity,
        Projection::Sinusoidal,
        Projection::PolarAzimuthal,
        Projection::SphericalMercator,
    ];

    /// Parse a projection name as used in configuration files and on the
    /// command line. Matching is case-insensitive.
    ///
    /// Accepts:
    /// - "identity", "noop"
    /// - "sinusoidal", "sin"
    /// - "polar-azimuthal", "aep"
    /// - "spherical-mercator", "sm", "web-mercator"
    pub fn from_name(s: &str) -> ProjectionResult<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");

        match normalized.as_str() {
            "identity" | "noop" => Ok(Projection::Identity),
            "sinusoidal" | "sin" => Ok(Projection::Sinusoidal),
            "polar-azimuthal" | "aep" => Ok(Projection::PolarAzimuthal),
            "spherical-mercator" | "sm" | "web-mercator" => Ok(Projection::SphericalMercator),
            _ => Err(ProjectionError::UnknownProjection(s.to_string())),
        }
    }

    /// Forward-project many points in parallel.
    ///
    /// Output order matches input order. If any point fails, one of the
    /// failures is returned and no partial output is produced.
    pub fn par_to_points(&self, geopoints: &[GeoPoint]) -> ProjectionResult<Vec<PlanarPoint>> {
        geopoints.par_iter().map(|p| self.to_point(*p)).collect()
    }
}

impl Project for Projection {
    fn name(&self) -> &'static str {
        match self {
            Projection::Identity => Identity::NAME,
            Projection::Sinusoidal => Sinusoidal::NAME,
            Projection::PolarAzimuthal => PolarAzimuthal::NAME,
            Projection::SphericalMercator => SphericalMercator::NAME,
        }
    }

    fn to_point(&self, geopoint: GeoPoint) -> ProjectionResult<PlanarPoint> {
        match self {
            Projection::Identity => Identity.to_point(geopoint),
            Projection::Sinusoidal => Sinusoidal.to_point(geopoint),
            Projection::PolarAzimuthal => PolarAzimuthal.to_point(geopoint),
            Projection::SphericalMercator => SphericalMercator.to_point(geopoint),
        }
    }

    fn to_geopoint(&self, point: PlanarPoint) -> ProjectionResult<GeoPoint> {
        match self {
            Projection::Identity => Identity.to_geopoint(point),
            Projection::Sinusoidal => Sinusoidal.to_geopoint(point),
            Projection::PolarAzimuthal => PolarAzimuthal.to_geopoint(point),
            Projection::SphericalMercator => SphericalMercator.to_geopoint(point),
        }
    }
}

impl FromStr for Projection {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Projection::from_name(s)
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
