//! Form-level banner for boundary errors and success messages

use crate::state::Banner;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the banner inside `area`, wrapped to its width
pub fn render_banner(frame: &mut Frame, area: Rect, banner: &Banner) {
    let color = if banner.is_error() {
        Color::Red
    } else {
        Color::Green
    };

    let lines: Vec<Line> = wrap_text(banner.message(), text_width(area.width))
        .into_iter()
        .map(Line::from)
        .collect();

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(paragraph, area);
}

/// Rows needed to show the whole message at `width`, borders included
pub fn banner_height(banner: &Banner, width: u16) -> u16 {
    let lines = wrap_text(banner.message(), text_width(width)).len();
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

fn text_width(width: u16) -> usize {
    width.saturating_sub(4) as usize
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if current_line.len() + word.len() + 1 > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}
