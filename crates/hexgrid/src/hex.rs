//! Axial hex coordinates.
//!
//! A cell is addressed by `(q, r)`; the implied third cube coordinate is
//! `s = -q - r`. Distances are computed in `i64`; offsets wrap at the edge
//! of the `i32` range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Axial offsets of the six neighbors, counter-clockwise from `+q`.
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    Hex::new(0, 1),
];

/// A hexagonal cell in axial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implied cube coordinate.
    pub fn s(&self) -> i64 {
        -(self.q as i64) - self.r as i64
    }

    /// Component-wise sum, wrapping at the `i32` range.
    pub fn offset(&self, other: Hex) -> Hex {
        Hex::new(self.q.wrapping_add(other.q), self.r.wrapping_add(other.r))
    }

    /// Component-wise scaling by `k`, wrapping at the `i32` range.
    pub fn scale(&self, k: i32) -> Hex {
        Hex::new(self.q.wrapping_mul(k), self.r.wrapping_mul(k))
    }

    /// The adjacent cell in direction `direction % 6`.
    pub fn neighbor(&self, direction: usize) -> Hex {
        self.offset(DIRECTIONS[direction % 6])
    }

    /// Number of steps between two cells.
    pub fn distance(&self, other: &Hex) -> u64 {
        let dq = (self.q as i64 - other.q as i64).unsigned_abs();
        let dr = (self.r as i64 - other.r as i64).unsigned_abs();
        let ds = (self.s() - other.s()).unsigned_abs();
        dq.max(dr).max(ds)
    }

    /// Cells exactly `radius` steps away, counter-clockwise starting from
    /// the cell `radius` steps in direction 4.
    pub fn ring(&self, radius: u32) -> Vec<Hex> {
        if radius == 0 {
            return vec![*self];
        }

        let radius_i = radius as i32;
        let mut results = Vec::with_capacity(6 * radius as usize);
        let mut hex = self.offset(DIRECTIONS[4].scale(radius_i));
        for direction in 0..6 {
            for _ in 0..radius {
                results.push(hex);
                hex = hex.neighbor(direction);
            }
        }
        results
    }

    /// Cells at distance `1..=layers`, ring by ring. The center is excluded.
    ///
    /// The result holds [`neighbor_count`] cells, which grows quadratically;
    /// callers taking `layers` from user input should bound it.
    pub fn neighbors(&self, layers: u32) -> Vec<Hex> {
        (1..=layers).flat_map(|radius| self.ring(radius)).collect()
    }
}

/// Number of cells within `layers` rings of a cell, center excluded:
/// `3 · layers · (layers + 1)`, saturating at `u64::MAX`.
pub fn neighbor_count(layers: u32) -> u64 {
    let layers = u64::from(layers);
    layers.saturating_mul(layers + 1).saturating_mul(3)
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// A position in axial space that has not been snapped to a cell yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
}

impl FractionalHex {
    pub fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    pub fn s(&self) -> f64 {
        -self.q - self.r
    }

    /// Snap to the containing cell.
    ///
    /// Rounds all three cube coordinates and recomputes the one with the
    /// largest rounding error, so that `q + r + s = 0` holds. Ties on an
    /// edge resolve deterministically. Coordinates beyond the `i32` range
    /// saturate.
    pub fn round(&self) -> Hex {
        let s = self.s();
        let mut q = self.q.round();
        let mut r = self.r.round();
        let rs = s.round();

        let dq = (q - self.q).abs();
        let dr = (r - self.r).abs();
        let ds = (rs - s).abs();

        if dq > dr && dq > ds {
            q = -r - rs;
        } else if dr > ds {
            r = -q - rs;
        }

        Hex::new(q as i32, r as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_exact_center() {
        assert_eq!(FractionalHex::new(3.0, -2.0).round(), Hex::new(3, -2));
    }

    #[test]
    fn test_round_fixes_largest_error() {
        // q rounds up by 0.4, r and s by less: q is recomputed.
        let hex = FractionalHex::new(0.6, 0.3).round();
        assert_eq!(hex, Hex::new(1, 0));
    }

    #[test]
    fn test_distance() {
        let origin = Hex::new(0, 0);
        assert_eq!(origin.distance(&Hex::new(3, -1)), 3);
        assert_eq!(origin.distance(&Hex::new(-2, -2)), 4);
    }

    #[test]
    fn test_ring_sizes() {
        let center = Hex::new(5, 5);
        assert_eq!(center.ring(0), vec![center]);
        for radius in 1..5 {
            let ring = center.ring(radius);
            assert_eq!(ring.len(), 6 * radius as usize);
            assert!(ring.iter().all(|h| h.distance(&center) == radius as u64));
        }
    }

    #[test]
    fn test_neighbors_layers() {
        let center = Hex::new(0, 0);
        assert!(center.neighbors(0).is_empty());
        assert_eq!(center.neighbors(1).len(), 6);
        assert_eq!(center.neighbors(2).len(), 18);
        assert!(!center.neighbors(3).contains(&center));
        for layers in 0..4 {
            assert_eq!(center.neighbors(layers).len() as u64, neighbor_count(layers));
        }
    }

    #[test]
    fn test_neighbor_count_saturates() {
        assert_eq!(neighbor_count(1000), 3_003_000);
        assert_eq!(neighbor_count(u32::MAX), u64::MAX);
    }
}
