//! Hexagonal grids addressed in geographic coordinates.
//!
//! A [`Grid`] pairs a planar hex-grid engine with a [`Projection`]. Every
//! query takes or returns longitude/latitude in degrees; the grid projects
//! onto the engine's plane, asks the engine, and projects the answer back.
//!
//! ```no_run
//! use hexgrid_geo::{GeoPoint, Grid, HexGrid, Orientation, PlanarPoint, Projection};
//!
//! let grid: Grid<HexGrid> = Grid::new(
//!     Orientation::Flat,
//!     PlanarPoint::new(500.0, 500.0),
//!     Projection::SphericalMercator,
//! )?;
//! let cell = grid.cell_at(GeoPoint::new(-73.0, 40.0))?;
//! let corners = grid.cell_corners(&cell)?;
//! assert_eq!(corners.len(), 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;

pub use config::{ConfigError, GridConfig};
pub use engine::{BuildEngine, PlanarEngine};
pub use error::{GridError, GridResult};
pub use grid::{Grid, GridBuilder};

pub use geo_common::{GeoPoint, PlanarPoint, EARTH_CIRCUMFERENCE, EARTH_METERS_PER_DEGREE};
pub use hexgrid::{neighbor_count, Hex, HexGrid, HexGridError, Orientation, Region};
pub use projection::{Project, Projection, ProjectionError};
