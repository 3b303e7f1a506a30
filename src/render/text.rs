//! Plain-text rendering for headless mode

use super::{ActionOutcome, MappingView, Suggestion, Table};
use std::fmt::Write;

pub fn render_outcome_text(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Json(json) => json.clone(),
        ActionOutcome::Suggestions(items) => render_suggestions(items),
        ActionOutcome::NoResults(msg) => msg.clone(),
        ActionOutcome::Mapping(view) => render_mapping(view),
        ActionOutcome::Table(table) => render_table(table),
        ActionOutcome::Error(msg) => msg.clone(),
    }
}

fn render_suggestions(items: &[Suggestion]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_mapping(view: &MappingView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Source Text: {}", view.source_text);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", render_table(&view.table));
    let _ = writeln!(out);
    let _ = write!(out, "Evidence URLs:");
    for link in &view.evidence {
        let _ = write!(out, "\n- {} <{}>", link.label, link.url);
    }
    out
}

/// Left-aligned columns separated by two spaces, with a dashed rule under the
/// header row.
pub fn render_table(table: &Table) -> String {
    let widths = table.column_widths();
    let format_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(table.headers.as_slice())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(table.rows.iter().map(|row| format_row(row.as_slice())));
    lines.join("\n")
}
