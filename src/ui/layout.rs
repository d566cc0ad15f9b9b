//! Layout components (header, banner slot, status bar)

use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, RELOAD_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::CatalogStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of the main layout
pub struct MainLayout {
    pub header: Rect,
    pub banner: Rect,
    pub main: Rect,
    pub status: Rect,
}

/// Create the main layout; a zero banner height collapses the slot
pub fn create_layout(area: Rect, banner_height: u16) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(banner_height), // Banner
            Constraint::Min(0),                // Form
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        banner: chunks[1],
        main: chunks[2],
        status: chunks[3],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " Consignment Form",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Location catalog status
    let catalog_status = match app.state.catalog {
        CatalogStatus::Ready(_) => Span::styled(" ● ", Style::default().fg(Color::Green)),
        CatalogStatus::Loading => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        CatalogStatus::Failed => Span::styled(" ○ ", Style::default().fg(Color::Red)),
    };
    spans.push(catalog_status);

    spans.push(Span::styled(
        view_hints(),
        Style::default().fg(Color::Gray),
    ));

    let pending = app.state.registry.validation_state().iter().count();
    if pending > 0 {
        spans.push(Span::raw(" | "));
        let noun = if pending == 1 { "field" } else { "fields" };
        spans.push(Span::styled(
            format!("{pending} {noun} to complete"),
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.state.submitting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Submitting…",
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the form
fn view_hints() -> String {
    format!(
        "Tab:next  ←/→:choose  {SUBMIT_SHORTCUT}:submit  {RELOAD_SHORTCUT}:reload locations  {QUIT_SHORTCUT}:quit"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_banner() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), 0);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.banner.height, 0);
        assert_eq!(layout.status.y, 23);
        assert_eq!(layout.main.height, 22);
    }

    #[test]
    fn test_layout_with_banner() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), 5);
        assert_eq!(layout.banner.height, 5);
        assert_eq!(layout.main.height, 17);
    }

    #[test]
    fn test_hints_mention_shortcuts() {
        let hints = view_hints();
        assert!(hints.contains(SUBMIT_SHORTCUT));
        assert!(hints.contains(RELOAD_SHORTCUT));
    }
}
