//! Text and JSON rendering of command results.

use std::fmt::Display;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document
    Json,
}

/// Render a single result.
pub fn render<T: Serialize + Display>(format: Format, value: &T) -> Result<String> {
    match format {
        Format::Text => Ok(value.to_string()),
        Format::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Render a list, one item per line in text mode or a JSON array.
pub fn render_list<T: Serialize + Display>(format: Format, values: &[T]) -> Result<String> {
    match format {
        Format::Text => Ok(values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => Ok(serde_json::to_string_pretty(values)?),
    }
}
