//! Event System
//!
//! Activity-log events recorded as dashboard actions run

use crate::actions::Action;
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Request,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub action: Action,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(action: Action, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            action,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn request(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Request, LogLevel::Debug)
    }

    pub fn success(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Success, LogLevel::Info)
    }

    pub fn warning(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Warning, LogLevel::Warn)
    }

    pub fn error(action: Action, msg: String) -> Self {
        Self::new(action, msg, EventType::Error, LogLevel::Error)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.action, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_errors_are_always_displayed() {
        assert!(Event::success(Action::Sync, "done".to_string()).should_display());
        assert!(Event::error(Action::Audit, "Error 500: boom".to_string()).should_display());
        assert!(Event::warning(Action::Autocomplete, "No matches".to_string()).should_display());
    }

    #[test]
    fn test_display_includes_action_and_message() {
        let event = Event::error(Action::Mapping, "Error 404: not found".to_string());
        let text = event.to_string();
        assert!(text.starts_with("Error ["));
        assert!(text.ends_with("Semantic Mapping: Error 404: not found"));
    }
}
