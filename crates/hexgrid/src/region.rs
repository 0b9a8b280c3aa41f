//! Polygonal regions on the hex grid.
//!
//! A region is a simple polygon on the plane together with the cells whose
//! centers fall inside it.

use geo_common::{BoundingBox, PlanarPoint};
use rayon::prelude::*;

use crate::{Hex, HexGrid, HexGridError, HexGridResult};

/// Most cells a region's bounding box may span before it is scanned.
pub const MAX_REGION_CANDIDATES: u64 = 1 << 26;

/// A polygon and the cells it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    geometry: Vec<PlanarPoint>,
    /// Sorted, no duplicates.
    hexes: Vec<Hex>,
}

impl Region {
    /// Build the region for `geometry` on `grid`.
    ///
    /// The polygon is implicitly closed; repeating the first vertex at the
    /// end is allowed. Cells are selected by the even-odd rule applied to
    /// their centers. Polygons whose bounding box spans more than
    /// [`MAX_REGION_CANDIDATES`] cells are rejected before scanning.
    pub fn new(grid: &HexGrid, geometry: Vec<PlanarPoint>) -> HexGridResult<Self> {
        if geometry.len() < 3 {
            return Err(HexGridError::EmptyRegion {
                vertices: geometry.len(),
            });
        }
        if let Some(index) = geometry.iter().position(|p| !p.is_finite()) {
            return Err(HexGridError::NonFiniteVertex { index });
        }

        let bbox = match BoundingBox::from_points(&geometry) {
            Some(bbox) => bbox,
            None => return Err(HexGridError::EmptyRegion { vertices: 0 }),
        };

        // q and r are linear in x and y, so their extremes over the box
        // are reached at its corners.
        let corners = bbox.expand(grid.size.x.abs(), grid.size.y.abs()).corners();
        let mut q_min = i32::MAX;
        let mut q_max = i32::MIN;
        let mut r_min = i32::MAX;
        let mut r_max = i32::MIN;
        for corner in corners {
            let hex = grid.hex_at(corner);
            q_min = q_min.min(hex.q);
            q_max = q_max.max(hex.q);
            r_min = r_min.min(hex.r);
            r_max = r_max.max(hex.r);
        }

        let q_span = (i64::from(q_max) - i64::from(q_min) + 1) as u64;
        let r_span = (i64::from(r_max) - i64::from(r_min) + 1) as u64;
        let candidates = q_span.saturating_mul(r_span);
        if candidates > MAX_REGION_CANDIDATES {
            return Err(HexGridError::RegionTooLarge {
                candidates,
                limit: MAX_REGION_CANDIDATES,
            });
        }

        let hexes: Vec<Hex> = (q_min..=q_max)
            .into_par_iter()
            .flat_map_iter(|q| {
                let geometry = &geometry;
                (r_min..=r_max).filter_map(move |r| {
                    let hex = Hex::new(q, r);
                    let center = grid.hex_center(hex);
                    if bbox.contains_point(&center) && contains_point(geometry, &center) {
                        Some(hex)
                    } else {
                        None
                    }
                })
            })
            .collect();

        Ok(Self { geometry, hexes })
    }

    /// The polygon vertices, as given.
    pub fn geometry(&self) -> &[PlanarPoint] {
        &self.geometry
    }

    /// Covered cells, ordered by `(q, r)`.
    pub fn hexes(&self) -> &[Hex] {
        &self.hexes
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Whether the cell belongs to the region.
    pub fn contains(&self, hex: &Hex) -> bool {
        self.hexes.binary_search(hex).is_ok()
    }
}

/// Even-odd point in polygon test.
pub fn contains_point(polygon: &[PlanarPoint], p: &PlanarPoint) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
