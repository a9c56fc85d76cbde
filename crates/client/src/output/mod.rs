//! Output formatting for command results.

pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a value as JSON, compact for `Json` and indented otherwise.
pub fn format_output<T: Serialize>(value: &T, format: OutputFormat) -> String {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    };
    rendered.unwrap_or_default()
}
