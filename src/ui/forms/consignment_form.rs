//! Consignment form rendering

use super::field_renderer::{draw_field, FieldDisplay, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{CatalogStatus, FieldName};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form with the location choices panel on the right
pub fn draw_consignment_form(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(26), // Location choices
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_location_panel(frame, main_chunks[1], app);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Source, destination
            Constraint::Length(FIELD_HEIGHT),  // Weight, unit
            Constraint::Length(FIELD_HEIGHT),  // Height, depth, width
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let layout_rows: [&[FieldName]; 3] = [
        &[FieldName::Source, FieldName::Destination],
        &[FieldName::Weight, FieldName::Unit],
        &[FieldName::Height, FieldName::Depth, FieldName::Width],
    ];

    for (row, names) in rows.iter().zip(layout_rows) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, names.len() as u32); names.len()])
            .split(*row);
        for (cell, &name) in cells.iter().zip(names) {
            draw_form_field(frame, *cell, app, name);
        }
    }

    let button_area = Rect {
        width: rows[3].width.min(20),
        ..rows[3]
    };
    let label = if app.state.submitting {
        "Submitting…"
    } else {
        "Submit"
    };
    render_button(
        frame,
        button_area,
        label,
        app.state.is_submit_focused(),
        app.state.can_submit(),
    );
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, name: FieldName) {
    let value = app.state.display_value(name);
    let display = if name.is_location() {
        match app.state.catalog {
            CatalogStatus::Ready(_) => FieldDisplay::Choice(&value),
            CatalogStatus::Loading => FieldDisplay::Placeholder("Loading locations…"),
            CatalogStatus::Failed => FieldDisplay::Placeholder("No locations available"),
        }
    } else if name == FieldName::Unit {
        FieldDisplay::Choice(&value)
    } else {
        FieldDisplay::Input(&value)
    };

    let label = match app.state.registry.get_value(FieldName::Unit).as_unit() {
        Some(unit) if name.is_dimension() => format!("{} ({})", name.label(), unit.symbol()),
        _ => name.label().to_string(),
    };

    draw_field(
        frame,
        area,
        &label,
        display,
        app.state.active_field_name() == Some(name),
        app.state.registry.error(name),
    );
}

/// List the choices of the focused location field, sibling's pick disabled
fn draw_location_panel(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.state.active_field_name().filter(FieldName::is_location);
    let title = match active {
        Some(name) => format!(" {} choices ", name.label()),
        None => " Locations ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if active.is_some() {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    let dim = Style::default().fg(Color::DarkGray);
    let lines: Vec<Line> = match (&app.state.catalog, active) {
        (CatalogStatus::Loading, _) => vec![Line::from(Span::styled("Loading…", dim))],
        (CatalogStatus::Failed, _) => vec![Line::from(Span::styled("No locations", dim))],
        (CatalogStatus::Ready(catalog), _) if catalog.is_empty() => {
            vec![Line::from(Span::styled("No locations", dim))]
        }
        (CatalogStatus::Ready(_), None) => vec![Line::from(Span::styled(
            "Focus SOURCE or DESTINATION",
            dim,
        ))],
        (CatalogStatus::Ready(catalog), Some(name)) => catalog
            .options_for(name, app.state.registry.form())
            .into_iter()
            .map(|option| {
                let (marker, style) = if option.disabled {
                    ("  ", dim.add_modifier(Modifier::CROSSED_OUT))
                } else if option.selected {
                    (
                        "▸ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("  ", Style::default())
                };
                Line::from(vec![Span::raw(marker), Span::styled(option.label, style)])
            })
            .collect(),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
