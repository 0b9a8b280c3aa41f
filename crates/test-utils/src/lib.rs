//! Shared test utilities for the hexgrid-geo workspace.
//!
//! Approximate assertions for scalars and points, the reference points with
//! their expected projections, and generators for sweeping the globe.
//!
//! ```ignore
//! use test_utils::{assert_geopoint_approx_eq, points, PRECISION};
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::*;
pub use generators::*;

/// Tolerance used by the reference projection vectors.
pub const PRECISION: f64 = 1e-5;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if !(diff <= epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Approximate equality of `(x, y)` tuples.
#[macro_export]
macro_rules! assert_coords_approx_eq {
    (($x1:expr, $y1:expr), ($x2:expr, $y2:expr), $epsilon:expr) => {{
        $crate::assert_approx_eq!($x1, $x2, $epsilon);
        $crate::assert_approx_eq!($y1, $y2, $epsilon);
    }};
}

/// Approximate equality of two `GeoPoint`s, component by component.
///
/// ```ignore
/// assert_geopoint_approx_eq!(actual, GeoPoint::new(-73.0, 40.0), 1e-5);
/// ```
#[macro_export]
macro_rules! assert_geopoint_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: $crate::GeoPoint = $left;
        let right: $crate::GeoPoint = $right;
        if !(left.max_abs_diff(&right) <= $epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{}`,\n right: `{}`,\n epsilon: `{:?}`",
                left, right, $epsilon
            );
        }
    }};
}

/// Approximate equality of two `PlanarPoint`s, component by component.
#[macro_export]
macro_rules! assert_point_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: $crate::PlanarPoint = $left;
        let right: $crate::PlanarPoint = $right;
        if !(left.max_abs_diff(&right) <= $epsilon) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{}`,\n right: `{}`,\n epsilon: `{:?}`",
                left, right, $epsilon
            );
        }
    }};
}

pub use geo_common::{GeoPoint, PlanarPoint};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, 0.001);
    }

    #[test]
    fn test_assert_coords_approx_eq_passes() {
        assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
    }

    #[test]
    fn test_assert_geopoint_approx_eq_passes() {
        assert_geopoint_approx_eq!(
            GeoPoint::new(-73.000001, 40.0),
            GeoPoint::new(-73.0, 40.000001),
            PRECISION
        );
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_point_approx_eq_fails() {
        assert_point_approx_eq!(PlanarPoint::new(0.0, 0.0), PlanarPoint::new(0.0, 1.0), PRECISION);
    }
}
