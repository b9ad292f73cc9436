use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::help;
use crate::input;
use crate::notification;
use crate::stats;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [input_area, stats_area, help_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(stats::GRID_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        input::input_render::render_field(self, frame, input_area);
        stats::render_grid(self, frame, stats_area);
        help::help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            help::help_popup_render::render_popup(self, frame);
        }

        // Notifications go last so they sit on top of the popup
        notification::render_notification(frame, &mut self.notification);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
