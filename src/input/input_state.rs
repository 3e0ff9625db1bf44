use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use crate::suggest::OverlayHost;

/// Single-line task title editor plus the ghost text drawn after it
pub struct InputState {
    pub textarea: TextArea<'static>,
    pub scroll_offset: usize,
    ghost_text: String,
    ghost_offset: u16,
    /// Text columns available at the last draw, None before the first one
    viewport_width: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());

        Self {
            textarea,
            scroll_offset: 0,
            ghost_text: String::new(),
            ghost_offset: 0,
            viewport_width: None,
        }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn ghost_text(&self) -> &str {
        &self.ghost_text
    }

    /// Cells from the start of the text where the ghost text begins
    pub fn ghost_offset(&self) -> u16 {
        self.ghost_offset
    }

    /// Column inside the visible part of the field where the ghost text starts
    ///
    /// None when there is no ghost text or it starts past the right edge, in
    /// which case nothing of it is on screen.
    pub fn ghost_column(&self) -> Option<u16> {
        if self.ghost_text.is_empty() {
            return None;
        }

        let scrolled: String = self.query().chars().take(self.scroll_offset).collect();
        let column = self.ghost_offset.saturating_sub(scrolled.width() as u16);
        match self.viewport_width {
            Some(width) if column as usize >= width => None,
            _ => Some(column),
        }
    }

    pub fn cursor_col(&self) -> usize {
        self.textarea.cursor().1
    }

    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        self.viewport_width = Some(viewport_width);
        if viewport_width == 0 {
            return;
        }

        let cursor_col = self.cursor_col();
        let text_length = self.query().chars().count();

        let mut new_scroll = self.scroll_offset;

        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayHost for InputState {
    fn read_query(&self) -> String {
        self.query().to_string()
    }

    fn write_query(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    fn write_remainder(&mut self, text: &str) {
        self.ghost_text = text.to_string();
    }

    fn set_overlay_offset(&mut self, cells: u16) {
        self.ghost_offset = cells;
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
