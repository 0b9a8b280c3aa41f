//! The geographic grid façade.

use geo_common::{GeoPoint, PlanarPoint};
use projection::{Project, Projection};
use tracing::{debug, trace, warn};

use crate::engine::{BuildEngine, PlanarEngine};
use crate::{GridError, GridResult};

/// A planar hex-grid engine seen through a projection.
///
/// Configuration is fixed at construction. All queries take `&self` and
/// neither the grid nor the engine is mutated afterwards, so a grid can be
/// shared between threads whenever the engine is `Sync`.
#[derive(Debug, Clone)]
pub struct Grid<E> {
    engine: E,
    projection: Projection,
}

impl<E: BuildEngine> Grid<E> {
    /// Build a grid around a fresh engine at the plane origin.
    pub fn new(
        orientation: E::Orientation,
        size: PlanarPoint,
        projection: Projection,
    ) -> GridResult<Self, E::Error> {
        GridBuilder::new()
            .orientation(orientation)
            .size(size)
            .projection(projection)
            .build()
    }
}

impl<E: PlanarEngine> Grid<E> {
    /// Wrap an existing engine. Orientation and size come from the engine.
    pub fn from_engine(engine: E, projection: Projection) -> Self {
        debug!(
            orientation = %engine.orientation(),
            size = %engine.size(),
            projection = %projection,
            "Wrapping existing grid engine"
        );
        Self { engine, projection }
    }

    pub fn builder() -> GridBuilder<E> {
        GridBuilder::new()
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn orientation(&self) -> E::Orientation {
        self.engine.orientation()
    }

    pub fn size(&self) -> PlanarPoint {
        self.engine.size()
    }

    /// Integer code of a cell.
    pub fn cell_id_of(&self, cell: &E::Cell) -> u64 {
        self.engine.cell_to_id(cell)
    }

    /// Cell for an integer code.
    pub fn cell_from_id(&self, code: u64) -> GridResult<E::Cell, E::Error> {
        self.engine.cell_from_id(code).map_err(GridError::Engine)
    }

    /// The cell containing a geographic point.
    pub fn cell_at(&self, geopoint: GeoPoint) -> GridResult<E::Cell, E::Error> {
        let point = self.projection.to_point(geopoint)?;
        trace!(%geopoint, %point, "Locating cell");
        Ok(self.engine.cell_at(point))
    }

    /// Geographic center of a cell.
    pub fn cell_center(&self, cell: &E::Cell) -> GridResult<GeoPoint, E::Error> {
        let center = self.engine.cell_center(cell);
        Ok(self.projection.to_geopoint(center)?)
    }

    /// Geographic corners of a cell, in the engine's order.
    ///
    /// Each corner is inverse-projected on its own; if any of them fails
    /// the whole call fails.
    pub fn cell_corners(&self, cell: &E::Cell) -> GridResult<Vec<GeoPoint>, E::Error> {
        let corners = self.engine.cell_corners(cell);
        Ok(self.projection.to_geopoints(&corners)?)
    }

    /// Cells within `ring_count` steps of `cell`.
    ///
    /// Adjacency is purely planar, so no projection is involved.
    pub fn cell_neighbors(&self, cell: &E::Cell, ring_count: u32) -> Vec<E::Cell> {
        self.engine.cell_neighbors(cell, ring_count)
    }

    /// Build a region from a polygon given in geographic coordinates.
    ///
    /// Vertices are forward-projected in order before the engine sees them.
    pub fn make_region(&self, geometry: &[GeoPoint]) -> GridResult<E::Region, E::Error> {
        let points = self.projection.to_points(geometry)?;
        trace!(vertices = points.len(), "Building region");
        self.engine.make_region(points).map_err(GridError::Engine)
    }
}

/// Validated construction of a [`Grid`].
///
/// Either supply an engine, or an orientation and a size (and optionally an
/// origin) to build a fresh one. When an engine is supplied together with
/// explicit parameters, they must match the engine exactly.
#[derive(Debug)]
pub struct GridBuilder<E: PlanarEngine> {
    engine: Option<E>,
    orientation: Option<E::Orientation>,
    origin: Option<PlanarPoint>,
    size: Option<PlanarPoint>,
    projection: Projection,
}

impl<E: PlanarEngine> Default for GridBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PlanarEngine> GridBuilder<E> {
    pub fn new() -> Self {
        Self {
            engine: None,
            orientation: None,
            origin: None,
            size: None,
            projection: Projection::default(),
        }
    }

    pub fn engine(mut self, engine: E) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn orientation(mut self, orientation: E::Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn origin(mut self, origin: PlanarPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn size(mut self, size: PlanarPoint) -> Self {
        self.size = Some(size);
        self
    }

    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }
}

impl<E: PlanarEngine> GridBuilder<E> {
    /// Wrap the supplied engine, checking any explicit parameters against it.
    ///
    /// Use [`GridBuilder::build`] when the engine may also be created.
    pub fn build_wrapped(self) -> GridResult<Grid<E>, E::Error> {
        let engine = self.engine.ok_or(GridError::MissingParameter("engine"))?;

        if let Some(orientation) = self.orientation {
            if orientation != engine.orientation() {
                return Err(conflict("orientation", orientation, engine.orientation()));
            }
        }
        if let Some(origin) = self.origin {
            if origin != engine.origin() {
                return Err(conflict("origin", origin, engine.origin()));
            }
        }
        if let Some(size) = self.size {
            if size != engine.size() {
                return Err(conflict("size", size, engine.size()));
            }
        }

        Ok(Grid::from_engine(engine, self.projection))
    }
}

impl<E: BuildEngine> GridBuilder<E> {
    /// Validate the parameters and build the grid.
    pub fn build(self) -> GridResult<Grid<E>, E::Error> {
        if self.engine.is_some() {
            return self.build_wrapped();
        }

        let orientation = self
            .orientation
            .ok_or(GridError::MissingParameter("orientation"))?;
        let size = self.size.ok_or(GridError::MissingParameter("size"))?;
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(GridError::InvalidParameter(format!(
                "cell size must be finite and positive, got {}",
                size
            )));
        }
        let origin = self.origin.unwrap_or_else(PlanarPoint::origin);
        if !origin.is_finite() {
            return Err(GridError::InvalidParameter(format!(
                "origin must be finite, got {}",
                origin
            )));
        }

        debug!(
            %orientation,
            %origin,
            %size,
            projection = %self.projection,
            "Building grid engine"
        );
        Ok(Grid {
            engine: E::build(orientation, origin, size),
            projection: self.projection,
        })
    }
}

fn conflict<T: std::fmt::Display, EngineError: std::error::Error + 'static>(
    field: &'static str,
    requested: T,
    engine: T,
) -> GridError<EngineError> {
    warn!(field, %requested, %engine, "Rejecting grid parameters that conflict with engine");
    GridError::ConstructionConflict {
        field,
        requested: requested.to_string(),
        engine: engine.to_string(),
    }
}
