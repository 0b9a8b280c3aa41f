//! Tests for the hexgeo commands and binary.

use std::io::Write;
use std::process::Command;

use geo_common::GeoPoint;
use hexgeo::commands;
use hexgeo::output::{render, Format};
use hexgeo::settings::{self, GridOverrides};
use hexgrid_geo::{Grid, HexGrid, Projection};
use test_utils::{
    assert_geopoint_approx_eq, assert_point_approx_eq, cells, points, projected, PRECISION,
};

fn default_grid() -> Grid<HexGrid> {
    settings::default_config().build().unwrap()
}

// ============================================================================
// Projection commands
// ============================================================================

#[test]
fn test_project_reference_point() {
    let report = commands::project(Projection::Sinusoidal, points::NEW_YORK).unwrap();
    assert_point_approx_eq!(report.planar, projected::SINUSOIDAL, PRECISION);
}

#[test]
fn test_unproject_reference_point() {
    let report =
        commands::unproject(Projection::SphericalMercator, projected::SPHERICAL_MERCATOR).unwrap();
    assert_geopoint_approx_eq!(report.geo, points::NEW_YORK, PRECISION);
}

#[test]
fn test_project_pole_reports_point() {
    let err = commands::project(Projection::SphericalMercator, points::NORTH_POLE).unwrap_err();
    assert!(err.to_string().contains("Cannot project (0, 90)"));
}

// ============================================================================
// Cell commands
// ============================================================================

#[test]
fn test_cell_report_matches_reference_corners() {
    let report = commands::cell(&default_grid(), points::NEW_YORK).unwrap();
    assert_eq!(report.corners.len(), 6);
    for (corner, expected) in report.corners.iter().zip(cells::NEW_YORK_CORNERS) {
        assert_geopoint_approx_eq!(*corner, expected, PRECISION);
    }
}

#[test]
fn test_describe_by_code_matches_cell() {
    let grid = default_grid();
    let by_point = commands::cell(&grid, points::NEW_YORK).unwrap();
    let by_code = commands::describe_cell(&grid, by_point.code).unwrap();
    assert_eq!((by_code.q, by_code.r), (by_point.q, by_point.r));
    assert_eq!(by_code.center, by_point.center);
}

#[test]
fn test_neighbors_of_code() {
    let grid = default_grid();
    let code = commands::cell(&grid, points::NEW_YORK).unwrap().code;
    let first = commands::neighbors(&grid, code, 1).unwrap();
    assert_eq!(first.len(), 6);
    assert!(!first.contains(&code));
    assert_eq!(commands::neighbors(&grid, code, 2).unwrap().len(), 18);
}

#[test]
fn test_neighbors_rejects_excessive_rings() {
    let grid = default_grid();
    let code = commands::cell(&grid, points::NEW_YORK).unwrap().code;
    let err = commands::neighbors(&grid, code, u32::MAX).unwrap_err();
    assert!(err.to_string().contains("--rings"), "{}", err);
    assert_eq!(
        commands::neighbors(&grid, code, commands::MAX_RINGS).unwrap().len(),
        3_003_000
    );
}

#[test]
fn test_region_contains_its_center_cell() {
    let grid = default_grid();
    let polygon = test_utils::regular_polygon(points::NEW_YORK, 0.02, 8);
    let codes = commands::region(&grid, &polygon).unwrap();
    let center = commands::cell(&grid, points::NEW_YORK).unwrap().code;
    assert!(codes.contains(&center));
}

// ============================================================================
// Batch mode
// ============================================================================

#[test]
fn test_batch_preserves_order() {
    let grid = default_grid();
    let input: String = points::CITIES
        .iter()
        .map(|p| format!("{},{}\n", p.lon, p.lat))
        .collect();
    let parsed = commands::read_batch(input.as_bytes()).unwrap();
    let records = commands::locate_batch(&grid, &parsed).unwrap();

    assert_eq!(records.len(), points::CITIES.len());
    for (i, (record, city)) in records.iter().zip(points::CITIES).enumerate() {
        assert_eq!(record.line, i + 1);
        assert_eq!(record.geo, city);
        assert_eq!(record.code, grid.cell_id_of(&grid.cell_at(city).unwrap()));
    }
}

#[test]
fn test_batch_fails_as_a_whole() {
    let grid = default_grid();
    let parsed = vec![(1, points::NEW_YORK), (2, points::NORTH_POLE)];
    let err = commands::locate_batch(&grid, &parsed).unwrap_err();
    assert!(err.to_string().contains("Line 2"));
}

// ============================================================================
// Settings and output
// ============================================================================

#[test]
fn test_config_file_with_overrides() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{"orientation": "pointy", "size": {{"x": 100, "y": 100}}, "projection": "identity"}}"#
    )
    .unwrap();

    let overrides = GridOverrides {
        projection: Some(Projection::Sinusoidal),
        ..Default::default()
    };
    let config = settings::resolve(Some(file.path()), &overrides).unwrap();
    assert_eq!(config.size.x, 100.0);
    assert_eq!(config.projection, Projection::Sinusoidal);
}

#[test]
fn test_json_cell_report() {
    let report = commands::cell(&default_grid(), points::NEW_YORK).unwrap();
    let json = render(Format::Json, &report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["code"].as_u64(), Some(report.code));
    assert_eq!(value["corners"].as_array().map(|c| c.len()), Some(6));
}

// ============================================================================
// Binary
// ============================================================================

#[test]
fn test_binary_project() {
    let output = Command::new(env!("CARGO_BIN_EXE_hexgeo"))
        .args(["--projection", "identity", "--format", "json", "project", "-73,40"])
        .env_remove("HEXGEO_CONFIG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["planar"]["x"].as_f64(), Some(-73.0));
    assert_eq!(value["planar"]["y"].as_f64(), Some(40.0));
}

#[test]
fn test_binary_fails_on_singular_input() {
    let output = Command::new(env!("CARGO_BIN_EXE_hexgeo"))
        .args(["cell", "0,90"])
        .env_remove("HEXGEO_CONFIG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("spherical-mercator"), "{}", stderr);
}

#[test]
fn test_binary_batch_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# lon,lat").unwrap();
    writeln!(file, "-73,40").unwrap();
    writeln!(file, "139.6917,35.6895").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hexgeo"))
        .arg("batch")
        .arg(file.path())
        .env_remove("HEXGEO_CONFIG")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("2,-73,40,"));
    assert!(lines[1].starts_with("3,139.6917,35.6895,"));
}

#[test]
fn test_point_argument_syntax() {
    let p: GeoPoint = " -73 , 40 ".parse().unwrap();
    assert_eq!(p, points::NEW_YORK);
}
