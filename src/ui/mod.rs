//! Output presentation layer
//!
//! This module handles:
//! - Rendering command results as JSON or YAML via serde
//! - Aligned table rendering for terminals (via the formatter module)
//!
//! Commands build a value, pick a table formatter for it, and let
//! [`render`] choose based on the global `--format` flag.

pub mod formatter;

use serde::Serialize;

use crate::cli::OutputFormat;
use ollama_params::error::Result;

/// Render `value` in the requested format, using `table` for table output.
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Table => Ok(table(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?.trim_end().to_string()),
    }
}
