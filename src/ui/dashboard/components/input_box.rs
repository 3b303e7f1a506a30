//! Input box for the selected action

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_input_box(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let action = state.selected;
    let (title, line) = match action.input_label() {
        Some(label) => (
            label.to_string(),
            Line::from(vec![
                Span::styled(
                    state.input(action).to_string(),
                    Style::default().fg(Color::White),
                ),
                Span::styled("█", Style::default().fg(Color::Cyan)),
            ]),
        ),
        None => (
            action.to_string(),
            Line::from(Span::styled(
                format!("Press Enter to {}", action.button_label()),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightBlue));

    f.render_widget(Paragraph::new(line).block(block), area);
}
