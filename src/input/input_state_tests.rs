//! Tests for the task title input state

use super::*;

fn input_with(text: &str) -> InputState {
    let mut input = InputState::new();
    input.textarea.insert_str(text);
    input
}

#[test]
fn test_new_input_is_empty() {
    let input = InputState::new();
    assert_eq!(input.query(), "");
    assert_eq!(input.ghost_text(), "");
    assert_eq!(input.ghost_offset(), 0);
}

#[test]
fn test_write_query_replaces_text_and_moves_cursor_to_end() {
    let mut input = input_with("draft");
    input.textarea.move_cursor(CursorMove::Head);

    input.write_query("report");

    assert_eq!(input.query(), "report");
    assert_eq!(input.read_query(), "report");
    assert_eq!(input.cursor_col(), 6);
}

#[test]
fn test_write_query_to_empty() {
    let mut input = input_with("draft");
    input.write_query("");
    assert_eq!(input.query(), "");
    assert_eq!(input.cursor_col(), 0);
}

#[test]
fn test_overlay_writes_are_stored() {
    let mut input = input_with("re");
    input.write_remainder("port");
    input.set_overlay_offset(2);
    assert_eq!(input.ghost_text(), "port");
    assert_eq!(input.ghost_offset(), 2);
}

#[test]
fn test_scroll_follows_cursor_past_viewport() {
    let mut input = input_with("abcdefghij");
    input.calculate_scroll_offset(5);
    assert_eq!(input.scroll_offset, 6);

    input.textarea.move_cursor(CursorMove::Head);
    input.calculate_scroll_offset(5);
    assert_eq!(input.scroll_offset, 0);
}

#[test]
fn test_short_text_never_scrolls() {
    let mut input = input_with("abc");
    input.calculate_scroll_offset(20);
    assert_eq!(input.scroll_offset, 0);
}

#[test]
fn test_zero_width_viewport_leaves_scroll_alone() {
    let mut input = input_with("abc");
    input.calculate_scroll_offset(0);
    assert_eq!(input.scroll_offset, 0);
}

#[test]
fn test_ghost_column_tracks_scroll_and_viewport() {
    let mut input = input_with("fix login ");
    assert_eq!(input.ghost_column(), None);

    input.write_remainder("page");
    input.set_overlay_offset(10);
    // Before the first draw the field width is unknown
    assert_eq!(input.ghost_column(), Some(10));

    input.calculate_scroll_offset(10);
    assert_eq!(input.scroll_offset, 1);
    assert_eq!(input.ghost_column(), Some(9));

    input.textarea.move_cursor(CursorMove::Head);
    input.calculate_scroll_offset(10);
    assert_eq!(input.scroll_offset, 0);
    assert_eq!(input.ghost_column(), None);
}
