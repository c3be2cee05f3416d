//! Output formatters for run summaries.
//!
//! Summaries are serializable structs rendered as JSON, as flat
//! `key: value` lines, or as colored sections for terminals.

use anyhow::Result;
use colored::Colorize;
use neogen_core::cli::OutputFormat;
use serde::Serialize;

/// Formats `data` according to `format`.
///
/// # Errors
///
/// Returns an error if `data` cannot be serialized.
///
/// # Examples
///
/// ```
/// use neogen_cli::formatters::format_output;
/// use neogen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     kind: String,
///     file_count: usize,
/// }
///
/// let summary = Summary { kind: "iterator".to_string(), file_count: 8 };
///
/// let output = format_output(&summary, OutputFormat::Json)?;
/// assert!(output.contains("\"file_count\": 8"));
///
/// let output = format_output(&summary, OutputFormat::Text)?;
/// assert_eq!(output, "kind: iterator\nfile_count: 8");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Formats data as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize};
    use serde_json::Value;

    /// Formats data as one `key: value` line per leaf.
    ///
    /// Nested keys are joined with `.`, array items repeat their key. No
    /// colors, suitable for `grep` and `cut`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        flatten("", &value, &mut lines);
        Ok(lines.join("\n"))
    }

    fn flatten(key: &str, value: &Value, lines: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (child, v) in map {
                    let path = if key.is_empty() {
                        child.clone()
                    } else {
                        format!("{key}.{child}")
                    };
                    flatten(&path, v, lines);
                }
            }
            Value::Array(items) => {
                for item in items {
                    flatten(key, item, lines);
                }
            }
            Value::String(s) => lines.push(format!("{key}: {s}")),
            Value::Null => lines.push(format!("{key}: -")),
            other => lines.push(format!("{key}: {other}")),
        }
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Formats data as colored, indented sections.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut lines = Vec::new();
        render(&value, 0, &mut lines);
        Ok(lines.join("\n"))
    }

    fn render(value: &Value, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);

        match value {
            Value::Object(map) => {
                for (key, v) in map {
                    let label = key.replace('_', " ");
                    match v {
                        Value::Object(_) => {
                            lines.push(format!("{indent}{}", label.blue().bold()));
                            render(v, depth + 1, lines);
                        }
                        Value::Array(items) if items.is_empty() => {
                            lines.push(format!("{indent}{}: {}", label.blue(), "none".dimmed()));
                        }
                        Value::Array(_) => {
                            lines.push(format!("{indent}{}:", label.blue()));
                            render(v, depth + 1, lines);
                        }
                        scalar => {
                            lines.push(format!("{indent}{}: {}", label.blue(), scalar_text(scalar)));
                        }
                    }
                }
            }
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::Object(_) | Value::Array(_) => render(item, depth, lines),
                        scalar => lines.push(format!("{indent}- {}", scalar_text(scalar))),
                    }
                }
            }
            scalar => lines.push(format!("{indent}{}", scalar_text(scalar))),
        }
    }

    fn scalar_text(value: &Value) -> String {
        match value {
            Value::String(s) => s.green().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::Null => "-".dimmed().to_string(),
            other => other.to_string(),
        }
    }
}
