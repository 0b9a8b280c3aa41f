//! Geographic and planar point types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A geographic position in degrees.
///
/// No range is enforced: longitude and latitude may be any real number.
/// Whatever goes in is handed to the projection unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    /// Create a new geographic point from longitude and latitude (degrees).
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// True if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Largest absolute component difference to another point.
    pub fn max_abs_diff(&self, other: &GeoPoint) -> f64 {
        (self.lon - other.lon).abs().max((self.lat - other.lat).abs())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lon, self.lat)
    }
}

/// Parse a `"lon,lat"` pair.
impl FromStr for GeoPoint {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lon, lat) = parse_pair(s)?;
        Ok(Self { lon, lat })
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self { lon, lat }
    }
}

/// A point on the projection plane.
///
/// Units depend on the projection that produced it: meters for the
/// Sinusoidal and Mercator projections, radians for the polar azimuthal
/// projection and degrees for the identity projection. The same type is
/// used for a hex grid's origin and per-axis cell size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    /// Create a new planar point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The plane origin.
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// True if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Largest absolute component difference to another point.
    pub fn max_abs_diff(&self, other: &PlanarPoint) -> f64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl fmt::Display for PlanarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parse an `"x,y"` pair.
impl FromStr for PlanarPoint {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = parse_pair(s)?;
        Ok(Self { x, y })
    }
}

impl From<(f64, f64)> for PlanarPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

fn parse_pair(s: &str) -> Result<(f64, f64), PointParseError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(PointParseError::InvalidFormat(s.to_string()));
    }

    let first = parts[0]
        .parse()
        .map_err(|_| PointParseError::InvalidNumber(parts[0].to_string()))?;
    let second = parts[1]
        .parse()
        .map_err(|_| PointParseError::InvalidNumber(parts[1].to_string()))?;

    Ok((first, second))
}

#[derive(Debug, thiserror::Error)]
pub enum PointParseError {
    #[error("Invalid point format: {0}. Expected 'a,b'")]
    InvalidFormat(String),

    #[error("Invalid number in point: {0}")]
    InvalidNumber(String),
}
