//! Result panel for the selected action

use super::super::state::DashboardState;
use super::super::utils::{clean_http_error_message, spinner};
use crate::render::{ActionOutcome, MappingView, Suggestion, Table};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Row, Wrap};

/// Widest a table column is allowed to start out.
const MAX_COLUMN_WIDTH: usize = 40;

pub fn render_results_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let action = state.selected;
    let block = Block::default()
        .title(format!("{} RESULTS", action.to_string().to_uppercase()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if state.pending() == Some(action) {
        let waiting = Paragraph::new(format!("{} Requesting…", spinner(state.tick)))
            .style(Style::default().fg(Color::LightYellow));
        f.render_widget(waiting, inner);
        return;
    }

    match state.outcome(action) {
        None => {
            let hint = Paragraph::new(format!("Press Enter to {}.", action.button_label()))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, inner);
        }
        Some(ActionOutcome::Json(json)) => {
            let body = Paragraph::new(json.as_str())
                .style(Style::default().fg(Color::LightGreen))
                .scroll((state.scroll, 0));
            f.render_widget(body, inner);
        }
        Some(ActionOutcome::Suggestions(items)) => {
            render_suggestions(f, inner, items, state.scroll);
        }
        Some(ActionOutcome::NoResults(msg)) => {
            let warning = Paragraph::new(format!("⚠ {}", msg))
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
            f.render_widget(warning, inner);
        }
        Some(ActionOutcome::Mapping(view)) => {
            render_mapping(f, inner, view, state.scroll);
        }
        Some(ActionOutcome::Table(table)) => {
            f.render_widget(table_widget(table, state.scroll as usize), inner);
        }
        Some(ActionOutcome::Error(msg)) => {
            let error = Paragraph::new(format!("❌ {}", clean_http_error_message(msg)))
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: false })
                .scroll((state.scroll, 0));
            f.render_widget(error, inner);
        }
    }
}

fn render_suggestions(f: &mut Frame, area: Rect, items: &[Suggestion], scroll: u16) {
    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            let mut spans = vec![Span::raw("• ")];
            if let Some(system) = item.system {
                spans.push(Span::styled(
                    format!("[{}] ", system),
                    Style::default().fg(Color::Magenta),
                ));
            }
            spans.push(Span::styled(
                item.code.clone(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(": {}", item.term)));
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

/// Rows for the evidence list: one per link plus its title, capped at a third of the panel.
fn evidence_height(links: usize, panel_height: u16) -> u16 {
    u16::try_from(links)
        .unwrap_or(u16::MAX)
        .saturating_add(1)
        .min(panel_height / 3)
        .max(2)
}

fn render_mapping(f: &mut Frame, area: Rect, view: &MappingView, scroll: u16) {
    let evidence_height = evidence_height(view.evidence.len(), area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(evidence_height),
        ])
        .split(area);

    let source = Paragraph::new(Line::from(vec![
        Span::styled(
            "Source Text: ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(view.source_text.clone()),
    ]))
    .wrap(Wrap { trim: true });
    f.render_widget(source, chunks[0]);

    f.render_widget(table_widget(&view.table, scroll as usize), chunks[1]);

    let mut evidence_lines = vec![Line::from(Span::styled(
        "Evidence URLs:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    evidence_lines.extend(view.evidence.iter().map(|link| {
        Line::from(vec![
            Span::raw("- "),
            Span::styled(
                link.label.clone(),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(format!("  {}", link.url), Style::default().fg(Color::DarkGray)),
        ])
    }));
    f.render_widget(Paragraph::new(evidence_lines), chunks[2]);
}

fn table_widget(table: &Table, skip_rows: usize) -> ratatui::widgets::Table<'_> {
    let column_count = table.headers.len();
    let widths: Vec<Constraint> = table
        .column_widths()
        .into_iter()
        .enumerate()
        .map(|(i, width)| {
            if i + 1 == column_count {
                Constraint::Fill(1)
            } else {
                let width = width.min(MAX_COLUMN_WIDTH);
                Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX))
            }
        })
        .collect();

    let header = Row::new(table.headers.iter().map(String::as_str)).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = table
        .rows
        .iter()
        .skip(skip_rows)
        .map(|row| Row::new(row.iter().map(String::as_str)));

    ratatui::widgets::Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
}
