//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// How the value inside a field box is presented
pub enum FieldDisplay<'a> {
    /// Free text input with a cursor when active
    Input(&'a str),
    /// Selector showing the current choice between arrows when active
    Choice(&'a str),
    /// Placeholder shown in place of the value, e.g. while loading
    Placeholder(&'a str),
}

/// Draw a labelled field with its inline error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: FieldDisplay,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = match display {
        FieldDisplay::Input(value) => {
            let cursor = if is_active { "▌" } else { "" };
            Line::from(vec![
                Span::styled(value, value_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
        FieldDisplay::Choice(value) => {
            let shown = if value.is_empty() { "-- Select --" } else { value };
            if is_active {
                Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                    Span::styled(shown, value_style),
                    Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(Span::styled(shown, value_style))
            }
        }
        FieldDisplay::Placeholder(text) => Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let block = Block::default()
        .title(format!(" {label}: "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(message) = error {
        let error_line = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)));
        frame.render_widget(error_line, chunks[1]);
    }
}
