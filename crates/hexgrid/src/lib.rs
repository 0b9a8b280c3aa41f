//! Planar hexagonal grid.
//!
//! Tiles the plane with hexagons of a given orientation and per-axis size
//! around an origin. Cells are addressed with axial `(q, r)` coordinates
//! and can be packed into a single integer code.
//!
//! The grid knows nothing about geography; see `hexgrid-geo` for the
//! projection layer on top of it.

pub mod error;
pub mod grid;
pub mod hex;
pub mod morton;
pub mod orientation;
pub mod region;

pub use error::{HexGridError, HexGridResult};
pub use grid::HexGrid;
pub use hex::{neighbor_count, FractionalHex, Hex};
pub use orientation::Orientation;
pub use region::{Region, MAX_REGION_CANDIDATES};
