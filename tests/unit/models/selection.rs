use super::*;
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

fn graphemes(s: &str) -> Vec<String> {
    s.graphemes(true).map(str::to_string).collect()
}

#[test]
fn test_char_selection_range_is_ordered() {
    let rope = Rope::from_str("hello");
    let mut sel = Selection::new((0, 4), Granularity::Char);
    sel.update_cursor((0, 1), &rope);

    assert_eq!(sel.range(), ((0, 1), (0, 4)));
    assert!(sel.contains((0, 2)));
    assert!(!sel.contains((0, 4)));
    assert!(!sel.is_empty());
}

#[test]
fn test_word_bounds_groups_same_class() {
    let line = graphemes("foo_bar  baz!");
    assert_eq!(Selection::word_bounds(&line, 0), (0, 7));
    assert_eq!(Selection::word_bounds(&line, 7), (7, 9));
    assert_eq!(Selection::word_bounds(&line, 12), (12, 13));
    assert_eq!(Selection::word_bounds(&line, 40), (13, 13));
}

#[test]
fn test_word_granularity_selects_word_on_create() {
    let rope = Rope::from_str("say hello now");
    let sel = Selection::from_pos((0, 5), Granularity::Word, &rope);
    assert_eq!(sel.range(), ((0, 4), (0, 9)));
}

#[test]
fn test_line_granularity_excludes_newline() {
    let rope = Rope::from_str("first\nsecond\n");
    let sel = Selection::from_pos((0, 2), Granularity::Line, &rope);
    assert_eq!(sel.range(), ((0, 0), (0, 5)));
}

#[test]
fn test_word_drag_snaps_to_word_end() {
    let rope = Rope::from_str("one two three");
    let mut sel = Selection::from_pos((0, 0), Granularity::Word, &rope);
    sel.update_cursor((0, 9), &rope);
    assert_eq!(sel.cursor(), (0, 13));
}
