//! Dashboard state management
//!
//! Per-session UI state: the selected action, input box contents, the last
//! result of each action and the activity log.

use crate::actions::{Action, ActionReport};
use crate::consts::cli_consts::{MAX_ACTIVITY_LOGS, MAX_INPUT_LEN};
use crate::environment::Environment;
use crate::events::Event;
use crate::render::ActionOutcome;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;

#[derive(Debug)]
pub struct DashboardState {
    /// The API deployment being used.
    pub environment: Environment,
    /// The action whose panel is shown.
    pub selected: Action,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,
    /// Lines scrolled in the result panel
    pub scroll: u16,

    /// Input box contents, indexed like `Action::ALL`.
    inputs: [String; 5],
    /// Last outcome of each action, indexed like `Action::ALL`.
    outcomes: [Option<ActionOutcome>; 5],
    /// Action whose request is in flight, if any.
    pending: Option<Action>,
}

impl DashboardState {
    pub fn new(environment: Environment, ui_config: UIConfig) -> Self {
        Self {
            environment,
            selected: Action::Ingest,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            scroll: 0,
            inputs: Default::default(),
            outcomes: Default::default(),
            pending: None,
        }
    }

    pub fn input(&self, action: Action) -> &str {
        &self.inputs[action.index()]
    }

    pub fn outcome(&self, action: Action) -> Option<&ActionOutcome> {
        self.outcomes[action.index()].as_ref()
    }

    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
        self.scroll = 0;
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.previous();
        self.scroll = 0;
    }

    /// Appends to the selected action's input. Ignored for actions without input.
    pub fn push_char(&mut self, c: char) {
        if self.selected.input_label().is_none() {
            return;
        }
        let input = &mut self.inputs[self.selected.index()];
        if input.chars().count() < MAX_INPUT_LEN {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.inputs[self.selected.index()].pop();
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Marks `action` as in flight.
    pub fn begin_request(&mut self, action: Action) {
        self.pending = Some(action);
    }

    /// Stores the result of a finished action and logs its events.
    pub fn apply_report(&mut self, report: ActionReport) {
        self.pending = None;
        self.scroll = 0;
        for event in report.events {
            self.add_to_activity_log(event);
        }
        self.outcomes[report.action.index()] = Some(report.outcome);
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub fn update(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> DashboardState {
        DashboardState::new(Environment::Production, UIConfig::new(false))
    }

    #[test]
    fn test_inputs_are_kept_per_action() {
        let mut state = state();
        state.selected = Action::Autocomplete;
        "fever".chars().for_each(|c| state.push_char(c));
        state.select_next();
        "NAM001".chars().for_each(|c| state.push_char(c));
        state.pop_char();

        assert_eq!(state.input(Action::Autocomplete), "fever");
        assert_eq!(state.input(Action::Mapping), "NAM00");
    }

    #[test]
    fn test_actions_without_input_ignore_typing() {
        let mut state = state();
        state.selected = Action::Sync;
        state.push_char('x');
        assert_eq!(state.input(Action::Sync), "");
    }

    #[test]
    fn test_apply_report_stores_outcome_and_clears_pending() {
        let mut state = state();
        state.begin_request(Action::Audit);
        assert_eq!(state.pending(), Some(Action::Audit));

        state.apply_report(ActionReport {
            action: Action::Audit,
            outcome: ActionOutcome::Error("Error 500: boom".to_string()),
            events: vec![Event::error(Action::Audit, "Error 500: boom".to_string())],
        });

        assert_eq!(state.pending(), None);
        assert!(state.outcome(Action::Audit).unwrap().is_error());
        assert!(state.outcome(Action::Sync).is_none());
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let mut state = state();
        for i in 0..(MAX_ACTIVITY_LOGS + 5) {
            state.add_to_activity_log(Event::success(Action::Sync, i.to_string()));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "5");
    }
}
