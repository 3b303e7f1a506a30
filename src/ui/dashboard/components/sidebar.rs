//! Dashboard action list

use super::super::state::DashboardState;
use crate::actions::Action;
use crate::render::ActionOutcome;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn status_marker(outcome: Option<&ActionOutcome>) -> (&'static str, Color) {
    match outcome {
        None => (" ", Color::DarkGray),
        Some(ActionOutcome::Error(_)) => ("✗", Color::Red),
        Some(ActionOutcome::NoResults(_)) => ("·", Color::Yellow),
        Some(_) => ("✓", Color::Green),
    }
}

pub fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines: Vec<Line> = Action::ALL
        .iter()
        .map(|action| {
            let selected = *action == state.selected;
            let (marker, marker_color) = status_marker(state.outcome(*action));
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(marker_color)),
                Span::styled(
                    format!("{} {}", if selected { "▶" } else { " " }, action),
                    style,
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .title("ACTIONS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
