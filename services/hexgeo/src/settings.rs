//! Grid settings resolution.
//!
//! The grid used by a command comes from, in increasing priority:
//! built-in defaults, a config file, then individual command-line flags.

use std::path::Path;

use anyhow::{Context, Result};
use hexgrid_geo::{GridConfig, Orientation, PlanarPoint, Projection};
use tracing::{debug, info};

/// Default cell size in projected units (meters for the metric projections).
pub const DEFAULT_CELL_SIZE: f64 = 500.0;

/// Per-flag overrides collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct GridOverrides {
    pub orientation: Option<Orientation>,
    pub size_x: Option<f64>,
    pub size_y: Option<f64>,
    pub projection: Option<Projection>,
}

/// Built-in grid: flat 500 x 500 cells under spherical Mercator.
pub fn default_config() -> GridConfig {
    GridConfig::new(
        Orientation::Flat,
        PlanarPoint::new(DEFAULT_CELL_SIZE, DEFAULT_CELL_SIZE),
        Projection::default(),
    )
}

/// Merge the config file (if any) and the overrides into one config.
pub fn resolve(config_path: Option<&Path>, overrides: &GridOverrides) -> Result<GridConfig> {
    let mut config = match config_path {
        Some(path) => {
            info!(path = %path.display(), "Loading grid config");
            GridConfig::load(path)
                .with_context(|| format!("Failed to load grid config {}", path.display()))?
        }
        None => default_config(),
    };

    if let Some(orientation) = overrides.orientation {
        config.orientation = orientation;
    }
    if let Some(x) = overrides.size_x {
        config.size.x = x;
    }
    if let Some(y) = overrides.size_y {
        config.size.y = y;
    }
    if let Some(projection) = overrides.projection {
        config.projection = projection;
    }

    debug!(?config, "Resolved grid settings");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let config = resolve(None, &GridOverrides::default()).unwrap();
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_overrides_apply_per_field() {
        let overrides = GridOverrides {
            size_y: Some(250.0),
            projection: Some(Projection::Sinusoidal),
            ..Default::default()
        };
        let config = resolve(None, &overrides).unwrap();
        assert_eq!(config.size, PlanarPoint::new(500.0, 250.0));
        assert_eq!(config.projection, Projection::Sinusoidal);
        assert_eq!(config.orientation, Orientation::Flat);
    }

    #[test]
    fn test_missing_config_file_has_context() {
        let err = resolve(Some(Path::new("/nonexistent/grid.yaml")), &GridOverrides::default())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load grid config"));
    }
}
