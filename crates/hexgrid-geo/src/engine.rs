//! The contract a planar hex-grid engine offers to [`crate::Grid`].
//!
//! Cells and regions are associated types: the façade forwards them
//! without looking inside.

use std::error::Error;
use std::fmt::{Debug, Display};

use geo_common::PlanarPoint;
use hexgrid::{Hex, HexGrid, HexGridError, Orientation, Region};

/// Read-only cell queries on the plane.
///
/// Implementations used from several threads at once must be `Sync`;
/// none of these methods may mutate the engine.
pub trait PlanarEngine {
    /// Opaque cell handle.
    type Cell: Clone + Debug;
    /// Opaque region representation.
    type Region;
    /// Orientation tag, compared when wrapping an existing engine.
    type Orientation: Copy + PartialEq + Debug + Display;
    /// Failures surfaced unchanged through the façade.
    type Error: Error + Send + Sync + 'static;

    fn orientation(&self) -> Self::Orientation;
    fn origin(&self) -> PlanarPoint;
    fn size(&self) -> PlanarPoint;

    /// The cell containing `point`. Every point belongs to exactly one cell.
    fn cell_at(&self, point: PlanarPoint) -> Self::Cell;
    fn cell_center(&self, cell: &Self::Cell) -> PlanarPoint;
    /// Corners in the engine's winding order.
    fn cell_corners(&self, cell: &Self::Cell) -> Vec<PlanarPoint>;
    fn cell_neighbors(&self, cell: &Self::Cell, ring_count: u32) -> Vec<Self::Cell>;

    fn cell_to_id(&self, cell: &Self::Cell) -> u64;
    fn cell_from_id(&self, code: u64) -> Result<Self::Cell, Self::Error>;

    fn make_region(&self, geometry: Vec<PlanarPoint>) -> Result<Self::Region, Self::Error>;
}

/// Engines that can be created from scratch.
pub trait BuildEngine: PlanarEngine + Sized {
    fn build(orientation: Self::Orientation, origin: PlanarPoint, size: PlanarPoint) -> Self;
}

impl PlanarEngine for HexGrid {
    type Cell = Hex;
    type Region = Region;
    type Orientation = Orientation;
    type Error = HexGridError;

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn origin(&self) -> PlanarPoint {
        self.origin
    }

    fn size(&self) -> PlanarPoint {
        self.size
    }

    fn cell_at(&self, point: PlanarPoint) -> Hex {
        self.hex_at(point)
    }

    fn cell_center(&self, cell: &Hex) -> PlanarPoint {
        self.hex_center(*cell)
    }

    fn cell_corners(&self, cell: &Hex) -> Vec<PlanarPoint> {
        self.hex_corners(*cell)
    }

    fn cell_neighbors(&self, cell: &Hex, ring_count: u32) -> Vec<Hex> {
        self.hex_neighbors(*cell, ring_count)
    }

    fn cell_to_id(&self, cell: &Hex) -> u64 {
        self.hex_to_code(*cell)
    }

    fn cell_from_id(&self, code: u64) -> Result<Hex, HexGridError> {
        Ok(self.hex_from_code(code))
    }

    fn make_region(&self, geometry: Vec<PlanarPoint>) -> Result<Region, HexGridError> {
        HexGrid::make_region(self, geometry)
    }
}

impl BuildEngine for HexGrid {
    fn build(orientation: Orientation, origin: PlanarPoint, size: PlanarPoint) -> Self {
        HexGrid::new(orientation, origin, size)
    }
}
