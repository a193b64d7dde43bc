//! Output Rendering
//!
//! Renders book records for the terminal or for scripts.

use crate::domain::entities::BookRecord;
use crate::infrastructure::events::record_json;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per record
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render one record
pub fn render_record(record: &BookRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => record_json(record).to_string(),
        OutputFormat::Text => {
            format!("{}  {}  [{}]", record.id(), record.book(), record.state())
        }
    }
}

/// Render a listing, one record per line
///
/// JSON output is a single array so it can be piped into `jq`.
pub fn render_records(records: &[BookRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::Value::Array(records.iter().map(record_json).collect()).to_string()
        }
        OutputFormat::Text if records.is_empty() => "no books in the collection".to_string(),
        OutputFormat::Text => records
            .iter()
            .map(|record| render_record(record, OutputFormat::Text))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
