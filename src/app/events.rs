use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::App;

const SCROLL_PAGE: u16 = 10;

impl App {
    /// Wait up to `timeout` for a terminal event and handle it
    pub fn handle_events(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => {
                self.handle_paste_event(text);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,

            // Accept key: never falls through to the editor, and only takes
            // ghost text that is actually on screen
            KeyCode::Tab => {
                if self.input.ghost_column().is_some() {
                    self.ghost.on_accept(&mut self.input);
                }
            }

            KeyCode::Enter => self.submit(),

            KeyCode::Up => self.timeline.scroll_up(1),
            KeyCode::Down => self.timeline.scroll_down(1, u16::MAX),
            KeyCode::PageUp => self.timeline.scroll_up(SCROLL_PAGE),
            KeyCode::PageDown => self.timeline.scroll_down(SCROLL_PAGE, u16::MAX),

            // Newline shortcuts would break the single-line title
            KeyCode::Char('m') | KeyCode::Char('j') if ctrl => {}

            _ => {
                let before = self.query().to_string();
                self.input.textarea.input(key);
                if self.query() != before {
                    self.on_text_changed();
                }
            }
        }
    }

    /// Insert pasted text as a single line
    pub fn handle_paste_event(&mut self, text: String) {
        let line: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        if line.is_empty() {
            return;
        }

        self.input.textarea.insert_str(&line);
        self.on_text_changed();
    }

    fn submit(&mut self) {
        let title = self.query().trim();
        if title.is_empty() {
            return;
        }
        self.submitted = Some(title.to_string());
        self.should_quit = true;
    }
}
