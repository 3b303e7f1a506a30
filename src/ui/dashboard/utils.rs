//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::actions::Action;
use crate::events::EventType;
use ratatui::prelude::Color;

/// Get a ratatui color for an action's log lines
pub fn get_action_color(action: &Action) -> Color {
    match action {
        Action::Ingest => Color::LightBlue,
        Action::Sync => Color::Magenta,
        Action::Autocomplete => Color::Cyan,
        Action::Mapping => Color::LightGreen,
        Action::Audit => Color::Yellow,
    }
}

pub fn event_icon(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Request => "→",
        EventType::Success => "✅",
        EventType::Warning => "⚠",
        EventType::Error => "❌",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    timestamp.to_string()
}

/// Clean network error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out - the API may be waking up, try again".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("connect") {
        return "Could not connect to the API".to_string();
    }
    msg.to_string()
}

/// Frames of the in-flight spinner.
pub fn spinner(tick: usize) -> &'static str {
    const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
    FRAMES[tick % FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact_timestamp() {
        assert_eq!(format_compact_timestamp("2026-10-16 09:41:07"), "10-16 09:41");
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn test_clean_http_error_message_keeps_http_errors() {
        assert_eq!(
            clean_http_error_message("Error 404: not found"),
            "Error 404: not found"
        );
        assert_eq!(
            clean_http_error_message("Reqwest error: error sending request: operation timed out"),
            "Request timed out - the API may be waking up, try again"
        );
    }
}
