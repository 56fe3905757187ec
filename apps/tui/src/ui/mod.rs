// UI module for career-ladder
// Rendering plus the screen geometry shared with mouse handling

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::main::render_main(app, f);
}

/// Title, content, status and shortcut rows of the whole frame.
pub fn main_layout(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(5), // title + tabs
        Constraint::Min(10),   // content
        Constraint::Length(3), // status
        Constraint::Length(1), // shortcuts
    ])
    .areas(area.inner(Margin::new(1, 0)))
}

/// Left tab panel and right radar panel of the content row.
pub fn content_columns(content: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(content)
}

/// Canvas and legend inside the bordered radar panel.
pub fn radar_panel_areas(panel: Rect) -> [Rect; 2] {
    Layout::vertical([Constraint::Min(4), Constraint::Length(2)])
        .areas(panel.inner(Margin::new(1, 1)))
}

/// Where the radar canvas lands for a frame of size `area`.
pub fn radar_canvas_area(area: Rect) -> Rect {
    let [_, content, _, _] = main_layout(area);
    let [_, panel] = content_columns(content);
    let [canvas, _] = radar_panel_areas(panel);
    widgets::radar::square_canvas(canvas)
}
