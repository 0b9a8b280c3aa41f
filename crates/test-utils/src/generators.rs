//! Generators for geographic test inputs.
//!
//! These produce predictable point sets for sweeping the projections over
//! large parts of the globe.

use geo_common::GeoPoint;

/// Creates a regular lon/lat lattice.
///
/// Longitudes run from `-180 + lon_step / 2` eastwards, latitudes from
/// `-lat_limit` to `lat_limit` inclusive. The half-step offset keeps the
/// lattice off the prime meridian and the antimeridian.
///
/// # Example
///
/// ```
/// use test_utils::geo_lattice;
///
/// let points = geo_lattice(90.0, 30.0, 60.0);
/// assert_eq!(points.len(), 4 * 5);
/// assert_eq!(points[0].lon, -135.0);
/// assert_eq!(points[0].lat, -60.0);
/// ```
pub fn geo_lattice(lon_step: f64, lat_step: f64, lat_limit: f64) -> Vec<GeoPoint> {
    let lon_count = (360.0 / lon_step).floor() as usize;
    let lat_count = (2.0 * lat_limit / lat_step).floor() as usize + 1;

    let mut points = Vec::with_capacity(lon_count * lat_count);
    for j in 0..lat_count {
        let lat = -lat_limit + j as f64 * lat_step;
        for i in 0..lon_count {
            let lon = -180.0 + lon_step / 2.0 + i as f64 * lon_step;
            points.push(GeoPoint::new(lon, lat));
        }
    }
    points
}

/// Creates a closed-form regular polygon around `center`.
///
/// Vertices are `radius` degrees from the center, counter-clockwise,
/// starting due east. The first vertex is not repeated at the end.
pub fn regular_polygon(center: GeoPoint, radius: f64, vertices: usize) -> Vec<GeoPoint> {
    (0..vertices)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / vertices as f64;
            GeoPoint::new(
                center.lon + radius * angle.cos(),
                center.lat + radius * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_avoids_reference_meridians() {
        for p in geo_lattice(10.0, 10.0, 80.0) {
            assert!(p.lon != 0.0 && p.lon.abs() != 180.0, "lon {}", p.lon);
        }
    }

    #[test]
    fn test_lattice_latitude_bounds() {
        let points = geo_lattice(45.0, 20.0, 80.0);
        let min = points.iter().map(|p| p.lat).fold(f64::MAX, f64::min);
        let max = points.iter().map(|p| p.lat).fold(f64::MIN, f64::max);
        assert_eq!(min, -80.0);
        assert_eq!(max, 80.0);
    }

    #[test]
    fn test_regular_polygon() {
        let polygon = regular_polygon(GeoPoint::new(10.0, 20.0), 1.0, 4);
        assert_eq!(polygon.len(), 4);
        assert!((polygon[0].lon - 11.0).abs() < 1e-12);
        assert!((polygon[1].lat - 21.0).abs() < 1e-12);
    }
}
