//! Hexagon orientations.
//!
//! An orientation fixes the 2x2 matrices that convert between axial hex
//! coordinates and unit plane coordinates, and the angle of the first
//! corner.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::HexGridError;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way the hexagons point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Flat top and bottom edges, first corner due east
    Flat,
    /// Pointed top and bottom, first corner at 30°
    Pointy,
}

impl Orientation {
    /// Axial to plane matrix `[f0, f1, f2, f3]`:
    /// `x = f0·q + f1·r`, `y = f2·q + f3·r`.
    pub fn forward(&self) -> [f64; 4] {
        match self {
            Orientation::Flat => [1.5, 0.0, SQRT_3 / 2.0, SQRT_3],
            Orientation::Pointy => [SQRT_3, SQRT_3 / 2.0, 0.0, 1.5],
        }
    }

    /// Plane to axial matrix `[b0, b1, b2, b3]`, the inverse of
    /// [`Orientation::forward`].
    pub fn backward(&self) -> [f64; 4] {
        match self {
            Orientation::Flat => [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
            Orientation::Pointy => [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        }
    }

    /// Angle of corner 0, in sixths of a full turn.
    pub fn start_angle(&self) -> f64 {
        match self {
            Orientation::Flat => 0.0,
            Orientation::Pointy => 0.5,
        }
    }

    /// Unit offset of corner `i` (0..6) from the cell center.
    pub fn corner_offset(&self, i: usize) -> (f64, f64) {
        let angle = 2.0 * PI * (self.start_angle() + i as f64) / 6.0;
        (angle.cos(), angle.sin())
    }
}

impl FromStr for Orientation {
    type Err = HexGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Orientation::Flat),
            "pointy" => Ok(Orientation::Pointy),
            _ => Err(HexGridError::UnknownOrientation(s.to_string())),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::Flat => "flat",
            Orientation::Pointy => "pointy",
        };
        write!(f, "{}", name)
    }
}
