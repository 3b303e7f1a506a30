//! Dashboard header component
//!
//! Renders the title and the API being used

use super::super::state::DashboardState;
use super::super::utils::spinner;
use crate::environment::Environment;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "NAMASTE ↔ ICD-11 INTEGRATION v{}",
        env!("CARGO_PKG_VERSION")
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let env_color = match state.environment {
        Environment::Production => Color::Green,
        Environment::Custom { .. } => Color::Yellow,
    };
    let mut spans = vec![
        Span::styled(
            format!("{}: ", state.environment),
            Style::default().fg(env_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.environment.api_url(),
            Style::default().fg(Color::Gray),
        ),
    ];
    if let Some(action) = state.pending() {
        spans.push(Span::styled(
            format!("   {} {}", spinner(state.tick), action),
            Style::default().fg(Color::LightYellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}
