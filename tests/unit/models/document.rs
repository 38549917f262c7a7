use super::*;
use crate::models::style_tags::{FontSlant, FontWeight};

fn doc_with(text: &str) -> Document {
    let mut doc = Document::new(BaseFont::new("Arial", 12));
    doc.load(PathBuf::from("/tmp/doc.txt"), text);
    doc
}

#[test]
fn test_window_title_formats() {
    assert_eq!(window_title(None), "Untitled - TextEditor");
    assert_eq!(
        window_title(Some(Path::new("/tmp/a.txt"))),
        "/tmp/a.txt - TextEditor"
    );
}

#[test]
fn test_new_document_resets_everything() {
    let mut doc = doc_with("foo\nbar");
    doc.select_chars(0, 3);
    doc.toggle_bold().unwrap();

    doc.new_document();

    assert!(doc.buffer().is_empty());
    assert!(doc.path().is_none());
    assert!(doc.tags().is_empty());
    assert_eq!(doc.title(), "Untitled - TextEditor");
}

#[test]
fn test_load_sets_path_and_content() {
    let doc = doc_with("foo\nbar");
    assert_eq!(doc.contents(), "foo\nbar");
    assert_eq!(doc.path(), Some(Path::new("/tmp/doc.txt")));
    assert_eq!(doc.title(), "/tmp/doc.txt - TextEditor");
}

#[test]
fn test_toggle_bold_twice_restores_tag_set() {
    let mut doc = doc_with("foo\nbar");
    doc.select_chars(0, 3);

    assert_eq!(doc.toggle_bold(), Ok(ToggleOutcome::Added));
    assert_eq!(doc.tags().ranges(TagName::Bold), &[0..3]);
    assert_eq!(doc.tags().style(TagName::Bold).weight, Some(FontWeight::Bold));

    assert_eq!(doc.toggle_bold(), Ok(ToggleOutcome::Removed));
    assert!(doc.tags().ranges(TagName::Bold).is_empty());
}

#[test]
fn test_toggle_decided_by_first_selected_char() {
    let mut doc = doc_with("abcdef");
    doc.select_chars(3, 6);
    doc.toggle_italic().unwrap();

    // First char untagged: whole selection gets italic, including the tagged tail.
    doc.select_chars(0, 5);
    assert_eq!(doc.toggle_italic(), Ok(ToggleOutcome::Added));
    assert_eq!(doc.tags().ranges(TagName::Italic), &[0..6]);

    // First char tagged: whole selection loses italic.
    doc.select_chars(4, 6);
    assert_eq!(doc.toggle_italic(), Ok(ToggleOutcome::Removed));
    assert_eq!(doc.tags().ranges(TagName::Italic), &[0..4]);
    assert_eq!(doc.tags().style(TagName::Italic).slant, Some(FontSlant::Italic));
}

#[test]
fn test_style_commands_require_selection() {
    let mut doc = doc_with("abc");
    assert_eq!(doc.toggle_bold(), Err(StyleError::NoSelection));
    assert_eq!(doc.toggle_italic(), Err(StyleError::NoSelection));
    assert_eq!(
        doc.highlight(HexColor::new(255, 255, 0)),
        Err(StyleError::NoSelection)
    );
    assert!(doc.tags().is_empty());
}

#[test]
fn test_highlight_recolors_every_highlighted_range() {
    let mut doc = doc_with("one two");
    doc.select_chars(0, 3);
    doc.highlight(HexColor::new(255, 0, 0)).unwrap();
    doc.select_chars(4, 7);
    doc.highlight(HexColor::new(0, 0, 255)).unwrap();

    assert_eq!(doc.tags().ranges(TagName::Highlight), &[0..3, 4..7]);
    assert_eq!(
        doc.tags().style(TagName::Highlight).background,
        Some(HexColor::new(0, 0, 255))
    );
}

#[test]
fn test_change_font_keeps_tag_styles() {
    let mut doc = doc_with("abc");
    doc.select_chars(0, 3);
    doc.toggle_bold().unwrap();

    doc.change_font("Courier New");

    assert_eq!(doc.font(), &BaseFont::new("Courier New", 12));
    let resolved = doc.tags().resolve(doc.tags().tags_at(0), doc.font());
    assert_eq!(resolved.family, "Courier New");
    assert_eq!(resolved.weight, FontWeight::Bold);
}

#[test]
fn test_typing_replaces_selection_and_shifts_tags() {
    let mut doc = doc_with("hello world");
    doc.select_chars(6, 11);
    doc.toggle_bold().unwrap();

    doc.select_chars(0, 5);
    doc.insert_str("hi");

    assert_eq!(doc.contents(), "hi world");
    assert_eq!(doc.tags().ranges(TagName::Bold), &[3..8]);
}

#[test]
fn test_backspace_inside_tagged_range_shrinks_it() {
    let mut doc = doc_with("abcdef");
    doc.select_chars(1, 5);
    doc.toggle_bold().unwrap();

    doc.set_cursor((0, 3));
    assert!(doc.delete_backward());
    assert_eq!(doc.contents(), "abdef");
    assert_eq!(doc.tags().ranges(TagName::Bold), &[1..4]);
}

#[test]
fn test_typed_text_then_saved_contents_are_exact() {
    let mut doc = Document::new(BaseFont::new("Arial", 12));
    for c in "hello".chars() {
        doc.insert_char(c);
    }
    assert_eq!(doc.contents(), "hello");

    doc.mark_saved(PathBuf::from("/tmp/a.txt"));
    assert_eq!(doc.title(), "/tmp/a.txt - TextEditor");
}

#[test]
fn test_change_font_pins_size_to_twelve() {
    let mut doc = Document::new(BaseFont::new("Arial", 14));

    doc.change_font("Times");

    assert_eq!(doc.font(), &BaseFont::new("Times", FONT_SIZE));
    assert_eq!(doc.font().size, 12);
}
