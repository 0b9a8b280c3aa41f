//! Geometry, neighbor and region tests for the planar hex grid.

use geo_common::PlanarPoint;
use hexgrid::{Hex, HexGrid, HexGridError, Orientation};
use test_utils::{assert_point_approx_eq, PRECISION};

fn grid(orientation: Orientation) -> HexGrid {
    HexGrid::new(orientation, PlanarPoint::origin(), PlanarPoint::new(500.0, 500.0))
}

// ============================================================================
// Corner geometry
// ============================================================================

#[test]
fn test_flat_corner_order() {
    let grid = grid(Orientation::Flat);
    let corners = grid.hex_corners(Hex::new(0, 0));
    let half_height = 500.0 * 3f64.sqrt() / 2.0;
    let expected = [
        PlanarPoint::new(500.0, 0.0),
        PlanarPoint::new(250.0, half_height),
        PlanarPoint::new(-250.0, half_height),
        PlanarPoint::new(-500.0, 0.0),
        PlanarPoint::new(-250.0, -half_height),
        PlanarPoint::new(250.0, -half_height),
    ];
    assert_eq!(corners.len(), 6);
    for (c, e) in corners.iter().zip(expected) {
        assert_point_approx_eq!(*c, e, PRECISION);
    }
}

#[test]
fn test_pointy_first_corner_at_thirty_degrees() {
    let grid = grid(Orientation::Pointy);
    let corner = grid.hex_corners(Hex::new(0, 0))[0];
    assert_point_approx_eq!(
        corner,
        PlanarPoint::new(500.0 * 3f64.sqrt() / 2.0, 250.0),
        PRECISION
    );
}

#[test]
fn test_corners_counter_clockwise() {
    for orientation in [Orientation::Flat, Orientation::Pointy] {
        let corners = grid(orientation).hex_corners(Hex::new(4, -9));
        // Shoelace formula: positive signed area means counter-clockwise.
        let mut area = 0.0;
        for i in 0..corners.len() {
            let a = corners[i];
            let b = corners[(i + 1) % corners.len()];
            area += a.x * b.y - b.x * a.y;
        }
        assert!(area > 0.0, "{} corners are clockwise", orientation);
    }
}

// ============================================================================
// Neighbors
// ============================================================================

#[test]
fn test_first_ring_touches_cell() {
    let grid = grid(Orientation::Flat);
    let center = Hex::new(2, 3);
    let center_point = grid.hex_center(center);
    for neighbor in grid.hex_neighbors(center, 1) {
        let p = grid.hex_center(neighbor);
        let d = ((p.x - center_point.x).powi(2) + (p.y - center_point.y).powi(2)).sqrt();
        assert!((d - 500.0 * 3f64.sqrt()).abs() < 1e-6, "distance {}", d);
    }
}

#[test]
fn test_neighbors_are_unique() {
    let mut neighbors = Hex::new(0, 0).neighbors(4);
    let total = neighbors.len();
    neighbors.sort();
    neighbors.dedup();
    assert_eq!(neighbors.len(), total);
    assert_eq!(total, 3 * 4 * 5);
}

// ============================================================================
// Codes
// ============================================================================

#[test]
fn test_codes_are_distinct_around_cell() {
    let grid = grid(Orientation::Flat);
    let mut codes: Vec<u64> = Hex::new(-10835, 11036)
        .neighbors(2)
        .into_iter()
        .map(|h| grid.hex_to_code(h))
        .collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 18);
}

// ============================================================================
// Regions
// ============================================================================

#[test]
fn test_region_cell_count_matches_area() {
    let grid = grid(Orientation::Flat);
    let side = 20_000.0;
    let geometry = vec![
        PlanarPoint::new(0.0, 0.0),
        PlanarPoint::new(side, 0.0),
        PlanarPoint::new(side, side),
        PlanarPoint::new(0.0, side),
    ];
    let region = grid.make_region(geometry).unwrap();

    let hex_area = 1.5 * 3f64.sqrt() * 500.0 * 500.0;
    let expected = side * side / hex_area;
    let count = region.len() as f64;
    assert!(
        (count - expected).abs() / expected < 0.1,
        "expected about {} cells, got {}",
        expected,
        count
    );
}

#[test]
fn test_region_contains_cell_of_interior_point() {
    let grid = grid(Orientation::Pointy);
    let geometry = vec![
        PlanarPoint::new(-5000.0, -5000.0),
        PlanarPoint::new(5000.0, -5000.0),
        PlanarPoint::new(0.0, 5000.0),
    ];
    let region = grid.make_region(geometry.clone()).unwrap();
    assert_eq!(region.geometry(), geometry.as_slice());
    assert!(region.contains(&grid.hex_at(PlanarPoint::new(0.0, 0.0))));
    assert!(!region.contains(&grid.hex_at(PlanarPoint::new(0.0, 9000.0))));
}

#[test]
fn test_region_empty_geometry() {
    let grid = grid(Orientation::Flat);
    let err = grid.make_region(Vec::new()).unwrap_err();
    assert_eq!(err, HexGridError::EmptyRegion { vertices: 0 });
}
