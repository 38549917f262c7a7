use super::*;

fn viewport(width: usize, height: usize) -> ViewportState {
    ViewportState {
        width,
        height,
        ..Default::default()
    }
}

#[test]
fn display_x_expands_tabs_and_wide_chars() {
    let buffer = TextBuffer::from_text("\tab\n中文x\n");
    assert_eq!(display_x(&buffer, 0, 1, 4), 4);
    assert_eq!(display_x(&buffer, 0, 3, 4), 6);
    assert_eq!(display_x(&buffer, 1, 2, 4), 4);
    assert_eq!(display_x(&buffer, 1, 3, 4), 5);
}

#[test]
fn follow_cursor_scrolls_down_and_back_up() {
    let text: String = (0..50).map(|i| format!("line {i}\n")).collect();
    let mut buffer = TextBuffer::from_text(&text);
    let mut vp = viewport(20, 10);

    buffer.set_cursor(30, 0);
    follow_cursor(&mut vp, &buffer, 4);
    assert_eq!(vp.line_offset, 21);

    buffer.set_cursor(5, 0);
    follow_cursor(&mut vp, &buffer, 4);
    assert_eq!(vp.line_offset, 5);
}

#[test]
fn follow_cursor_scrolls_horizontally() {
    let mut buffer = TextBuffer::from_text(&"x".repeat(100));
    let mut vp = viewport(10, 5);

    buffer.set_cursor(0, 40);
    follow_cursor(&mut vp, &buffer, 4);
    assert_eq!(vp.horiz_offset, 31);

    buffer.set_cursor(0, 0);
    follow_cursor(&mut vp, &buffer, 4);
    assert_eq!(vp.horiz_offset, 0);
}

#[test]
fn screen_to_pos_clamps_to_line_end_and_last_line() {
    let buffer = TextBuffer::from_text("hello\nab");
    let vp = viewport(20, 10);

    assert_eq!(screen_to_pos(&vp, &buffer, 4, 2, 0), Some((0, 2)));
    assert_eq!(screen_to_pos(&vp, &buffer, 4, 15, 0), Some((0, 5)));
    assert_eq!(screen_to_pos(&vp, &buffer, 4, 15, 7), Some((1, 2)));
    assert_eq!(screen_to_pos(&vp, &buffer, 4, 25, 0), None);
}

#[test]
fn scroll_lines_is_bounded() {
    let text: String = (0..20).map(|i| format!("{i}\n")).collect();
    let buffer = TextBuffer::from_text(&text);
    let mut vp = viewport(10, 5);

    assert!(!vp.scroll_lines(-3, &buffer));
    assert!(vp.scroll_lines(100, &buffer));
    assert_eq!(vp.line_offset, buffer.len_lines() - 5);
}
