//! Input field rendering
//!
//! Draws the task title with the ghost text placed at the offset the
//! completion state measured, and puts the terminal cursor at the caret.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Render the input field (bottom)
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let viewport_width = area.width.saturating_sub(2) as usize;
    app.input.calculate_scroll_offset(viewport_width);

    let mut title_spans = vec![Span::raw(" Task title ")];
    if app.ghost.in_flight_request_id().is_some() {
        title_spans.push(Span::styled("… ", Style::default().fg(Color::DarkGray)));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(Color::Cyan));

    if app.input.ghost_column().is_some() {
        block = block.title_top(
            Line::from(Span::styled(
                " Tab to accept ",
                Style::default().fg(Color::Magenta),
            ))
            .alignment(Alignment::Right),
        );
    }

    let inner = block.inner(area);
    let scroll_offset = app.input.scroll_offset;
    let visible: String = app.input.query().chars().skip(scroll_offset).collect();

    frame.render_widget(Paragraph::new(Line::from(visible)).block(block), area);

    if let Some(ghost_area) = ghost_area(app, inner) {
        let ghost = Paragraph::new(Span::styled(
            app.input.ghost_text().to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(ghost, ghost_area);
    }

    let before_cursor: String = app
        .input
        .query()
        .chars()
        .skip(scroll_offset)
        .take(app.input.cursor_col().saturating_sub(scroll_offset))
        .collect();
    let cursor_x = inner
        .x
        .saturating_add(before_cursor.width() as u16)
        .min(inner.right().saturating_sub(1));
    frame.set_cursor_position((cursor_x, inner.y));
}

/// Where the ghost text goes, clipped to the inner area
///
/// Follows the text when it is scrolled horizontally.
fn ghost_area(app: &App, inner: Rect) -> Option<Rect> {
    if inner.height == 0 {
        return None;
    }

    let column = app.input.ghost_column()?;
    if column >= inner.width {
        return None;
    }

    Some(Rect {
        x: inner.x + column,
        y: inner.y,
        width: inner.width - column,
        height: 1,
    })
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
