//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let banner_height = app
        .state
        .banner
        .as_ref()
        .map_or(0, |banner| components::banner_height(banner, area.width));
    let areas = layout::create_layout(area, banner_height);

    layout::draw_header(frame, areas.header);

    if let Some(banner) = &app.state.banner {
        components::render_banner(frame, areas.banner, banner);
    }

    forms::draw_consignment_form(frame, areas.main, app);

    layout::draw_status_bar(frame, areas.status, app);
}
