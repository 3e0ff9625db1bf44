//! Timeline pane rendering
//!
//! Draws each task on its side of a vertical rule, title on the rule's
//! marker, description, deadline and link below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::layout::{Side, Timeline, TimelineEntry};

const MARKER: &str = "●";
const RULE: &str = "│";
// Space, glyph, space between the two halves
const RULE_WIDTH: usize = 3;

/// Render the timeline pane (top)
pub fn render_pane(timeline: &mut Timeline, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Timeline ")
        .border_style(Style::default().fg(Color::DarkGray));

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2);
    let lines = if timeline.is_empty() {
        vec![Line::from(Span::styled(
            "No tasks loaded (pass --tasks <file>)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        timeline_lines(timeline, inner_width)
    };

    // Keep scroll within the content after a resize
    let max_scroll = (lines.len() as u16).saturating_sub(inner_height);
    if timeline.scroll() > max_scroll {
        timeline.scroll_up(timeline.scroll() - max_scroll);
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((timeline.scroll(), 0));
    frame.render_widget(paragraph, area);
}

/// Lay out every entry for a pane `width` cells wide
pub fn timeline_lines(timeline: &Timeline, width: usize) -> Vec<Line<'static>> {
    let half = width.saturating_sub(RULE_WIDTH) / 2;
    let mut lines = Vec::new();

    for entry in timeline.entries() {
        for (index, (text, style)) in entry_rows(entry).into_iter().enumerate() {
            let glyph = if index == 0 { MARKER } else { RULE };
            lines.push(side_line(entry.side, text, style, glyph, half));
        }
        lines.push(side_line(Side::Left, String::new(), Style::default(), RULE, half));
    }
    lines.pop();

    lines
}

fn entry_rows(entry: &TimelineEntry) -> Vec<(String, Style)> {
    let mut rows = vec![(
        entry.task.title.clone(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if !entry.task.description.is_empty() {
        rows.push((entry.task.description.clone(), Style::default()));
    }
    let deadline_style = if entry.due.is_some() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    rows.push((entry.task.deadline.clone(), deadline_style));
    if let Some(url) = entry.task.url.as_ref().filter(|url| !url.is_empty()) {
        rows.push((
            url.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }
    rows
}

fn side_line(side: Side, text: String, style: Style, glyph: &str, half: usize) -> Line<'static> {
    let text = truncate_to_width(&text, half);
    let rule = Span::styled(format!(" {} ", glyph), Style::default().fg(Color::DarkGray));

    match side {
        Side::Left => {
            let pad = half.saturating_sub(text.width());
            Line::from(vec![
                Span::raw(" ".repeat(pad)),
                Span::styled(text, style),
                rule,
            ])
        }
        Side::Right => Line::from(vec![
            Span::raw(" ".repeat(half)),
            rule,
            Span::styled(text, style),
        ]),
    }
}

/// Cut `text` so it fits in `max` cells, marking the cut with an ellipsis
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
#[path = "timeline_render_tests.rs"]
mod timeline_render_tests;
