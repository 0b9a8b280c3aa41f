//! Common types shared by the projection, hex-grid and façade crates.

pub mod bbox;
pub mod constants;
pub mod point;

pub use bbox::BoundingBox;
pub use constants::{EARTH_CIRCUMFERENCE, EARTH_METERS_PER_DEGREE, EARTH_RADIUS};
pub use point::{GeoPoint, PlanarPoint, PointParseError};
