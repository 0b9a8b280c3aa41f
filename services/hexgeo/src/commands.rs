//! Command implementations.
//!
//! Each command returns a serializable report; printing is left to
//! [`crate::output`].

use std::fmt;
use std::io::BufRead;

use anyhow::{anyhow, bail, Context, Result};
use geo_common::{GeoPoint, PlanarPoint};
use hexgrid_geo::{neighbor_count, Grid, HexGrid, Project, Projection, ProjectionError};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Largest `--rings` accepted by [`neighbors`] (3,003,000 cells).
pub const MAX_RINGS: u32 = 1000;

/// A point in both coordinate systems.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectedPoint {
    pub projection: Projection,
    pub geo: GeoPoint,
    pub planar: PlanarPoint,
}

impl fmt::Display for ProjectedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: lon={:.8} lat={:.8} -> x={:.5} y={:.5}",
            self.projection, self.geo.lon, self.geo.lat, self.planar.x, self.planar.y
        )
    }
}

/// Everything known about one cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellReport {
    pub code: u64,
    pub q: i32,
    pub r: i32,
    pub center: GeoPoint,
    pub corners: Vec<GeoPoint>,
}

impl fmt::Display for CellReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cell {} (q={}, r={})", self.code, self.q, self.r)?;
        write!(f, "  center {:.5},{:.5}", self.center.lon, self.center.lat)?;
        for (i, corner) in self.corners.iter().enumerate() {
            write!(f, "\n  corner {} {:.5},{:.5}", i, corner.lon, corner.lat)?;
        }
        Ok(())
    }
}

/// One located input line of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    pub line: usize,
    pub geo: GeoPoint,
    pub planar: PlanarPoint,
    pub code: u64,
}

impl fmt::Display for BatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{:.5},{:.5}",
            self.line, self.geo.lon, self.geo.lat, self.planar.x, self.planar.y
        )?;
        write!(f, ",{}", self.code)
    }
}

/// Forward-project a single point.
pub fn project(projection: Projection, geo: GeoPoint) -> Result<ProjectedPoint> {
    let planar = projection
        .to_point(geo)
        .with_context(|| format!("Cannot project {}", geo))?;
    Ok(ProjectedPoint {
        projection,
        geo,
        planar,
    })
}

/// Inverse-project a single point.
pub fn unproject(projection: Projection, planar: PlanarPoint) -> Result<ProjectedPoint> {
    let geo = projection
        .to_geopoint(planar)
        .with_context(|| format!("Cannot unproject {}", planar))?;
    Ok(ProjectedPoint {
        projection,
        geo,
        planar,
    })
}

/// Locate the cell containing `geo` and describe it.
pub fn cell(grid: &Grid<HexGrid>, geo: GeoPoint) -> Result<CellReport> {
    let hex = grid.cell_at(geo)?;
    describe_cell(grid, grid.cell_id_of(&hex))
}

/// Describe the cell with the given code.
pub fn describe_cell(grid: &Grid<HexGrid>, code: u64) -> Result<CellReport> {
    let hex = grid.cell_from_id(code)?;
    let center = grid.cell_center(&hex)?;
    let corners = grid.cell_corners(&hex)?;
    Ok(CellReport {
        code,
        q: hex.q,
        r: hex.r,
        center,
        corners,
    })
}

/// Codes of the cells within `rings` steps of the cell `code`.
pub fn neighbors(grid: &Grid<HexGrid>, code: u64, rings: u32) -> Result<Vec<u64>> {
    if rings > MAX_RINGS {
        bail!(
            "--rings {} exceeds the limit of {} ({} cells requested)",
            rings,
            MAX_RINGS,
            neighbor_count(rings)
        );
    }
    let hex = grid.cell_from_id(code)?;
    let codes: Vec<u64> = grid
        .cell_neighbors(&hex, rings)
        .iter()
        .map(|h| grid.cell_id_of(h))
        .collect();
    debug!(code, rings, count = codes.len(), "Computed neighbors");
    Ok(codes)
}

/// Codes of the cells covered by a polygon.
pub fn region(grid: &Grid<HexGrid>, polygon: &[GeoPoint]) -> Result<Vec<u64>> {
    let region = grid.make_region(polygon)?;
    let codes: Vec<u64> = region.hexes().iter().map(|h| grid.cell_id_of(h)).collect();
    info!(vertices = polygon.len(), cells = codes.len(), "Built region");
    Ok(codes)
}

/// Read `lon,lat` lines. Blank lines and `#` comments are skipped.
///
/// Returns the 1-based line number with each point.
pub fn read_batch<R: BufRead>(reader: R) -> Result<Vec<(usize, GeoPoint)>> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read batch input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let point: GeoPoint = trimmed
            .parse()
            .with_context(|| format!("Line {}: invalid point", index + 1))?;
        points.push((index + 1, point));
    }
    if points.is_empty() {
        bail!("Batch input contains no points");
    }
    Ok(points)
}

/// Project and locate every point in parallel, preserving input order.
///
/// Fails as a whole if any point cannot be projected.
pub fn locate_batch(
    grid: &Grid<HexGrid>,
    points: &[(usize, GeoPoint)],
) -> Result<Vec<BatchRecord>> {
    let geopoints: Vec<GeoPoint> = points.iter().map(|(_, geo)| *geo).collect();
    let planar = grid
        .projection()
        .par_to_points(&geopoints)
        .map_err(|err| match failing_line(points, &err) {
            Some(line) => anyhow!(err).context(format!("Line {}: cannot project", line)),
            None => anyhow!(err).context("Batch projection failed"),
        })?;

    Ok(points
        .par_iter()
        .zip(planar.par_iter())
        .map(|((line, geo), planar)| BatchRecord {
            line: *line,
            geo: *geo,
            planar: *planar,
            code: grid.cell_id_of(&grid.engine().hex_at(*planar)),
        })
        .collect())
}

fn failing_line(points: &[(usize, GeoPoint)], err: &ProjectionError) -> Option<usize> {
    match err {
        ProjectionError::ForwardDomain { point, .. } => points
            .iter()
            .find(|(_, geo)| geo == point)
            .map(|(line, _)| *line),
        _ => None,
    }
}
