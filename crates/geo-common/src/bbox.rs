//! Axis-aligned bounding boxes on the projection plane.

use serde::{Deserialize, Serialize};

use crate::PlanarPoint;

/// A planar bounding box, in the same units as the points it was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty slice.
    pub fn from_points(points: &[PlanarPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = Self::new(first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Grow the box by `dx` horizontally and `dy` vertically on every side.
    pub fn expand(&self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x - dx,
            min_y: self.min_y - dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    /// Corners in counter-clockwise order starting at `(min_x, min_y)`.
    pub fn corners(&self) -> [PlanarPoint; 4] {
        [
            PlanarPoint::new(self.min_x, self.min_y),
            PlanarPoint::new(self.max_x, self.min_y),
            PlanarPoint::new(self.max_x, self.max_y),
            PlanarPoint::new(self.min_x, self.max_y),
        ]
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, p: &PlanarPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
