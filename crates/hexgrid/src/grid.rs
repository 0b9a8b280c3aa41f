//! The hex grid: conversions between plane points and cells.

use geo_common::PlanarPoint;
use serde::{Deserialize, Serialize};

use crate::{morton, FractionalHex, Hex, HexGridResult, Orientation, Region};

/// A hexagonal tiling of the plane.
///
/// `size` is the per-axis distance from a cell center to its corners, so
/// non-square sizes give stretched hexagons. Both components must be
/// non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexGrid {
    pub orientation: Orientation,
    pub origin: PlanarPoint,
    pub size: PlanarPoint,
}

impl HexGrid {
    /// Create a new grid.
    pub fn new(orientation: Orientation, origin: PlanarPoint, size: PlanarPoint) -> Self {
        Self {
            orientation,
            origin,
            size,
        }
    }

    /// The cell containing `point`.
    pub fn hex_at(&self, point: PlanarPoint) -> Hex {
        let b = self.orientation.backward();
        let x = (point.x - self.origin.x) / self.size.x;
        let y = (point.y - self.origin.y) / self.size.y;
        let q = b[0] * x + b[1] * y;
        let r = b[2] * x + b[3] * y;
        FractionalHex::new(q, r).round()
    }

    /// The center of `hex`.
    pub fn hex_center(&self, hex: Hex) -> PlanarPoint {
        let f = self.orientation.forward();
        let q = hex.q as f64;
        let r = hex.r as f64;
        let x = (f[0] * q + f[1] * r) * self.size.x + self.origin.x;
        let y = (f[2] * q + f[3] * r) * self.size.y + self.origin.y;
        PlanarPoint::new(x, y)
    }

    /// The six corners of `hex`, counter-clockwise from the orientation's
    /// start angle.
    pub fn hex_corners(&self, hex: Hex) -> Vec<PlanarPoint> {
        let center = self.hex_center(hex);
        (0..6)
            .map(|i| {
                let (dx, dy) = self.orientation.corner_offset(i);
                PlanarPoint::new(center.x + self.size.x * dx, center.y + self.size.y * dy)
            })
            .collect()
    }

    /// All cells within `layers` steps of `hex`, excluding `hex` itself.
    pub fn hex_neighbors(&self, hex: Hex, layers: u32) -> Vec<Hex> {
        hex.neighbors(layers)
    }

    pub fn hex_to_code(&self, hex: Hex) -> u64 {
        morton::encode(hex)
    }

    pub fn hex_from_code(&self, code: u64) -> Hex {
        morton::decode(code)
    }

    /// Build the region covered by a polygon.
    pub fn make_region(&self, geometry: Vec<PlanarPoint>) -> HexGridResult<Region> {
        Region::new(self, geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_grid() -> HexGrid {
        HexGrid::new(
            Orientation::Flat,
            PlanarPoint::origin(),
            PlanarPoint::new(10.0, 10.0),
        )
    }

    #[test]
    fn test_center_round_trip() {
        for orientation in [Orientation::Flat, Orientation::Pointy] {
            let grid = HexGrid::new(
                orientation,
                PlanarPoint::new(3.0, -7.0),
                PlanarPoint::new(2.0, 5.0),
            );
            for q in -5..5 {
                for r in -5..5 {
                    let hex = Hex::new(q, r);
                    assert_eq!(grid.hex_at(grid.hex_center(hex)), hex);
                }
            }
        }
    }

    #[test]
    fn test_flat_center_spacing() {
        let grid = flat_grid();
        let center = grid.hex_center(Hex::new(1, 0));
        assert!((center.x - 15.0).abs() < 1e-12);
        assert!((center.y - 10.0 * 3f64.sqrt() / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_corners_are_shared_by_neighbors() {
        let grid = flat_grid();
        let a = grid.hex_corners(Hex::new(0, 0));
        let b = grid.hex_corners(Hex::new(1, 0));
        let shared = a
            .iter()
            .filter(|p| b.iter().any(|q| p.max_abs_diff(q) < 1e-9))
            .count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn test_points_near_center_map_to_cell() {
        let grid = flat_grid();
        let hex = Hex::new(-3, 7);
        let center = grid.hex_center(hex);
        for corner in grid.hex_corners(hex) {
            // Halfway to each corner is still inside.
            let p = PlanarPoint::new((center.x + corner.x) / 2.0, (center.y + corner.y) / 2.0);
            assert_eq!(grid.hex_at(p), hex);
        }
    }

    #[test]
    fn test_code_round_trip() {
        let grid = flat_grid();
        for hex in [Hex::new(0, 0), Hex::new(-16253, 8129), Hex::new(7, -7)] {
            assert_eq!(grid.hex_from_code(grid.hex_to_code(hex)), hex);
        }
    }
}
