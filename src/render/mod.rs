//! Response-to-view transforms
//!
//! Turns API payloads into the values the dashboard and headless mode display.

pub mod autocomplete;
pub mod mapping;
pub mod table;
pub mod text;

pub use autocomplete::{CodeSystem, Suggestion, normalize_autocomplete};
pub use mapping::{EvidenceLink, MappingView, evidence_label};
pub use table::{Table, infer_table};
pub use text::render_outcome_text;

use serde_json::Value;
use thiserror::Error;

/// A payload whose top-level shape cannot be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Unexpected autocomplete response format: expected a list or an object, got {0}")]
    Autocomplete(&'static str),

    #[error("Unexpected audit response format: expected a list or an object, got {0}")]
    Audit(&'static str),
}

/// What an action produced, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// A raw JSON body, pretty printed with its original key order.
    Json(String),
    Suggestions(Vec<Suggestion>),
    /// An empty result set, with the message to show instead of a blank table.
    NoResults(String),
    Mapping(MappingView),
    Table(Table),
    Error(String),
}

impl ActionOutcome {
    pub fn json(body: &Value) -> Self {
        ActionOutcome::Json(serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ActionOutcome::Error(_))
    }

    /// One-line description for the activity log.
    pub fn summary(&self) -> String {
        match self {
            ActionOutcome::Json(_) => "Response received".to_string(),
            ActionOutcome::Suggestions(items) => format!("{} suggestion(s)", items.len()),
            ActionOutcome::NoResults(msg) => msg.clone(),
            ActionOutcome::Mapping(view) => format!(
                "{} mapping(s) for '{}'",
                view.table.rows.len(),
                view.source_text
            ),
            ActionOutcome::Table(table) => format!("{} record(s)", table.rows.len()),
            ActionOutcome::Error(msg) => msg.clone(),
        }
    }
}

/// Name of a JSON value's type, for format errors.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Text of a JSON value as shown in a cell or field: strings verbatim,
/// `null` empty, anything else as compact JSON.
pub(crate) fn value_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
