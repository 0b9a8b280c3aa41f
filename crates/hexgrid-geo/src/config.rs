//! Grid configuration files.
//!
//! A grid is described by its orientation, cell size, optional origin and
//! projection. YAML and JSON are both accepted:
//!
//! ```yaml
//! orientation: flat
//! size: { x: 500.0, y: 500.0 }
//! projection: spherical-mercator
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use geo_common::PlanarPoint;
use hexgrid::{HexGrid, HexGridError, Orientation};
use projection::Projection;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{Grid, GridResult};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML grid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid JSON grid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Serializable description of a geographic hex grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    pub orientation: Orientation,
    pub size: PlanarPoint,
    #[serde(default = "PlanarPoint::origin")]
    pub origin: PlanarPoint,
    #[serde(default)]
    pub projection: Projection,
}

impl GridConfig {
    pub fn new(orientation: Orientation, size: PlanarPoint, projection: Projection) -> Self {
        Self {
            orientation,
            size,
            origin: PlanarPoint::origin(),
            projection,
        }
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        debug!(path = %path.display(), ?config, "Loaded grid config");
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build the grid this configuration describes.
    pub fn build(&self) -> GridResult<Grid<HexGrid>, HexGridError> {
        Grid::builder()
            .orientation(self.orientation)
            .origin(self.origin)
            .size(self.size)
            .projection(self.projection)
            .build()
    }
}
