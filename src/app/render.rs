use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::input::input_render;
use crate::timeline::timeline_render;

const HELP_TEXT: &str = " Tab accept · Enter save · ↑/↓ scroll timeline · Esc quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Timeline (top), title input, one-line key help (bottom)
        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        timeline_render::render_pane(&mut self.timeline, frame, layout[0]);
        input_render::render_field(self, frame, layout[1]);
        render_help_line(frame, layout[2]);
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(line), area);
}
