//! Dashboard key handling

use super::state::DashboardState;
use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Lines moved by PageUp/PageDown in the result panel.
const PAGE_LINES: u16 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep running; the state may have changed.
    Continue,
    /// Run the action with its current input.
    Run(Action),
    Quit,
}

/// Applies a key press to the dashboard state.
pub fn handle_key(state: &mut DashboardState, key: KeyEvent) -> KeyOutcome {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyOutcome::Quit,
            _ => KeyOutcome::Continue,
        };
    }

    match key.code {
        KeyCode::Esc => KeyOutcome::Quit,
        // `q` is only a shortcut where there is no input box to type it into.
        KeyCode::Char('q') if state.selected.input_label().is_none() => KeyOutcome::Quit,
        KeyCode::Enter => KeyOutcome::Run(state.selected),
        KeyCode::Tab | KeyCode::Down => {
            state.select_next();
            KeyOutcome::Continue
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.select_previous();
            KeyOutcome::Continue
        }
        KeyCode::PageDown => {
            state.scroll_down(PAGE_LINES);
            KeyOutcome::Continue
        }
        KeyCode::PageUp => {
            state.scroll_up(PAGE_LINES);
            KeyOutcome::Continue
        }
        KeyCode::Backspace => {
            state.pop_char();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) => {
            state.push_char(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}
