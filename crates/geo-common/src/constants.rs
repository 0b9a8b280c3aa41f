//! Spherical Earth constants.
//!
//! These values are fixed so that projected coordinates match across
//! implementations bit for bit.

use std::f64::consts::PI;

/// Equatorial circumference of the sphere, in meters.
pub const EARTH_CIRCUMFERENCE: f64 = 40075016.685578488;

/// Length of one degree of longitude at the equator, in meters.
pub const EARTH_METERS_PER_DEGREE: f64 = 111319.49079327358;

/// Radius of the sphere, `EARTH_CIRCUMFERENCE / 2π`.
pub const EARTH_RADIUS: f64 = EARTH_CIRCUMFERENCE / 2.0 / PI;
