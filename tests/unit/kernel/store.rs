use super::*;
use crate::kernel::services::ports::{DirEntry, EditorConfig};
use crate::kernel::state::StatusLevel;
use crate::kernel::FocusTarget;
use crate::models::{HexColor, TagName};
use std::path::{Path, PathBuf};

fn families() -> Vec<String> {
    vec!["Arial".into(), "Courier New".into(), "Times".into()]
}

fn new_store() -> Store {
    Store::new(AppState::new(
        PathBuf::from("/work"),
        EditorConfig::default(),
        families(),
    ))
}

fn run(store: &mut Store, command: Command) -> DispatchResult {
    store.dispatch(Action::RunCommand(command))
}

fn type_text(store: &mut Store, text: &str) {
    for ch in text.chars() {
        let cmd = if ch == '\n' {
            Command::InsertNewline
        } else {
            Command::InsertChar(ch)
        };
        run(store, cmd);
    }
}

fn load(store: &mut Store, path: &str, content: &str) {
    store.dispatch(Action::FileLoaded {
        path: PathBuf::from(path),
        content: content.to_string(),
    });
}

fn type_into_file_dialog(store: &mut Store, text: &str) {
    for ch in text.chars() {
        store.dispatch(Action::FileDialogAppend(ch));
    }
}

#[test]
fn initial_state_is_untitled() {
    let store = new_store();
    assert_eq!(store.state().title(), "Untitled - TextEditor");
    assert!(store.state().document.contents().is_empty());
    assert_eq!(store.state().focus(), FocusTarget::Editor);
}

#[test]
fn new_clears_text_path_and_tags() {
    let mut store = new_store();
    load(&mut store, "/tmp/notes.txt", "foo bar");
    store.state.document.select_chars(0, 3);
    run(&mut store, Command::ToggleBold);

    let result = run(&mut store, Command::New);

    assert_eq!(
        result.effects,
        vec![Effect::SetTitle("Untitled - TextEditor".to_string())]
    );
    assert!(store.state().document.contents().is_empty());
    assert!(store.state().document.path().is_none());
    assert!(store.state().document.tags().is_empty());
}

#[test]
fn open_cancel_leaves_document_untouched() {
    let mut store = new_store();
    type_text(&mut store, "keep me");

    let result = run(&mut store, Command::Open);
    assert_eq!(result.effects, vec![Effect::ListDir(PathBuf::from("/work"))]);
    assert_eq!(store.state().focus(), FocusTarget::FileDialog);

    let result = store.dispatch(Action::FileDialogCancel);
    assert!(result.effects.is_empty());
    assert!(!store.state().file_dialog.visible);
    assert_eq!(store.state().document.contents(), "keep me");
    assert!(store.state().document.path().is_none());
}

#[test]
fn open_confirm_reads_then_loads_file() {
    let mut store = new_store();
    run(&mut store, Command::Open);
    store.dispatch(Action::DirListed {
        dir: PathBuf::from("/work"),
        entries: vec![DirEntry::new(PathBuf::from("/work/foo.txt"), false)],
    });
    type_into_file_dialog(&mut store, "foo");

    let result = store.dispatch(Action::FileDialogAccept);
    assert_eq!(
        result.effects,
        vec![Effect::ReadFile(PathBuf::from("/work/foo.txt"))]
    );

    load(&mut store, "/work/foo.txt", "foo\nbar");
    assert_eq!(store.state().document.contents(), "foo\nbar");
    assert_eq!(store.state().title(), "/work/foo.txt - TextEditor");
}

#[test]
fn failed_open_keeps_document_and_reports() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    store.dispatch(Action::FileFailed {
        path: PathBuf::from("/work/missing.txt"),
        op: FileOp::Read,
        error: "not found".to_string(),
    });

    assert_eq!(store.state().document.contents(), "draft");
    let status = store.state().status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Error);
    assert!(status.text.contains("missing.txt"));
}

#[test]
fn save_with_path_writes_directly() {
    let mut store = new_store();
    load(&mut store, "/tmp/notes.txt", "abc");
    type_text(&mut store, "X");

    let result = run(&mut store, Command::Save);
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/tmp/notes.txt"),
            content: "Xabc".to_string(),
        }]
    );
    assert!(!store.state().file_dialog.visible);
}

#[test]
fn save_without_path_cancelled_writes_nothing() {
    let mut store = new_store();
    type_text(&mut store, "hello");

    let result = run(&mut store, Command::Save);
    assert_eq!(result.effects, vec![Effect::ListDir(PathBuf::from("/work"))]);
    assert_eq!(store.state().file_dialog.mode, FileDialogMode::SaveAs);

    let result = store.dispatch(Action::FileDialogCancel);
    assert!(result.effects.is_empty());
    assert!(store.state().document.path().is_none());
    assert_eq!(store.state().title(), "Untitled - TextEditor");
}

#[test]
fn type_hello_and_save_as() {
    let mut store = new_store();
    type_text(&mut store, "hello");
    run(&mut store, Command::Save);
    type_into_file_dialog(&mut store, "/tmp/a.txt");

    let result = store.dispatch(Action::FileDialogAccept);
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/tmp/a.txt"),
            content: "hello".to_string(),
        }]
    );
    // Path is only adopted once the write succeeded.
    assert!(store.state().document.path().is_none());

    let result = store.dispatch(Action::FileSaved {
        path: PathBuf::from("/tmp/a.txt"),
    });
    assert_eq!(
        result.effects,
        vec![Effect::SetTitle("/tmp/a.txt - TextEditor".to_string())]
    );
    assert_eq!(store.state().document.path(), Some(Path::new("/tmp/a.txt")));
}

#[test]
fn save_as_appends_default_extension() {
    let mut store = new_store();
    run(&mut store, Command::Save);
    type_into_file_dialog(&mut store, "letter");

    let result = store.dispatch(Action::FileDialogAccept);
    assert_eq!(
        result.effects,
        vec![Effect::WriteFile {
            path: PathBuf::from("/work/letter.txt"),
            content: String::new(),
        }]
    );
}

#[test]
fn failed_save_keeps_untitled() {
    let mut store = new_store();
    run(&mut store, Command::Save);
    type_into_file_dialog(&mut store, "/root/x.txt");
    store.dispatch(Action::FileDialogAccept);

    store.dispatch(Action::FileFailed {
        path: PathBuf::from("/root/x.txt"),
        op: FileOp::Write,
        error: "permission denied".to_string(),
    });

    assert!(store.state().document.path().is_none());
    assert!(store.state().status.as_ref().unwrap().text.contains("save"));
}

#[test]
fn file_dialog_navigates_into_directories() {
    let mut store = new_store();
    run(&mut store, Command::Open);
    store.dispatch(Action::DirListed {
        dir: PathBuf::from("/work"),
        entries: vec![DirEntry::new(PathBuf::from("/work/sub"), true)],
    });
    type_into_file_dialog(&mut store, "sub");

    let result = store.dispatch(Action::FileDialogAccept);
    assert_eq!(result.effects, vec![Effect::ListDir(PathBuf::from("/work/sub"))]);
    assert!(store.state().file_dialog.visible);
    assert!(store.state().file_dialog.input.value.is_empty());
}

#[test]
fn bold_twice_restores_range() {
    let mut store = new_store();
    load(&mut store, "/tmp/foo.txt", "foo\nbar");
    store.state.document.select_chars(0, 3);

    run(&mut store, Command::ToggleBold);
    assert!(store.state().document.tags().has_tag_at(TagName::Bold, 0));

    run(&mut store, Command::ToggleBold);
    assert!(store.state().document.tags().ranges(TagName::Bold).is_empty());
    assert!(store.state().status.is_none());
}

#[test]
fn style_without_selection_sets_warning() {
    let mut store = new_store();
    type_text(&mut store, "abc");

    let result = run(&mut store, Command::ToggleItalic);
    assert!(result.effects.is_empty());
    let status = store.state().status.as_ref().unwrap();
    assert_eq!(status.level, StatusLevel::Warning);
    assert_eq!(status.text, "No text selected");

    run(&mut store, Command::Highlight);
    assert!(!store.state().color_dialog.visible);
}

#[test]
fn highlight_applies_chosen_color() {
    let mut store = new_store();
    type_text(&mut store, "hello world");
    store.state.document.select_chars(0, 5);

    run(&mut store, Command::Highlight);
    assert_eq!(store.state().focus(), FocusTarget::ColorDialog);

    store.dispatch(Action::ColorDialogPick(2));
    store.dispatch(Action::ColorDialogAccept);

    let doc = &store.state().document;
    assert!(!store.state().color_dialog.visible);
    assert_eq!(doc.tags().ranges(TagName::Highlight), &[0..5]);
    assert_eq!(
        doc.tags().style(TagName::Highlight).background,
        Some(HexColor::new(0xff, 0x00, 0x00))
    );
}

#[test]
fn highlight_cancel_changes_nothing() {
    let mut store = new_store();
    type_text(&mut store, "hello");
    store.state.document.select_chars(0, 5);

    run(&mut store, Command::Highlight);
    store.dispatch(Action::ColorDialogCancel);

    assert!(store.state().document.tags().is_empty());
}

#[test]
fn invalid_hex_keeps_color_dialog_open() {
    let mut store = new_store();
    type_text(&mut store, "hello");
    store.state.document.select_chars(0, 5);
    run(&mut store, Command::Highlight);

    for _ in 0..7 {
        store.dispatch(Action::ColorDialogBackspace);
    }
    for ch in "#zz".chars() {
        store.dispatch(Action::ColorDialogAppend(ch));
    }
    store.dispatch(Action::ColorDialogAccept);

    assert!(store.state().color_dialog.visible);
    assert!(store.state().color_dialog.error.is_some());
    assert!(store.state().document.tags().is_empty());
}

#[test]
fn change_font_from_menu_keeps_styles() {
    let mut store = new_store();
    type_text(&mut store, "abc");
    store.state.document.select_chars(0, 3);
    run(&mut store, Command::ToggleBold);

    store.dispatch(Action::MenuOpen(crate::kernel::menu::MENU_FONT));
    store.dispatch(Action::MenuMoveSelection(2));
    store.dispatch(Action::MenuActivate);

    assert!(!store.state().menu.is_open());
    assert_eq!(store.state().document.font().family, "Times");
    assert_eq!(store.state().document.font().size, 12);
    assert!(store.state().document.tags().has_tag_at(TagName::Bold, 1));
}

#[test]
fn menu_activate_runs_file_commands() {
    let mut store = new_store();
    store.dispatch(Action::MenuOpen(crate::kernel::menu::MENU_FILE));
    store.dispatch(Action::MenuMoveSelection(-1));

    let result = store.dispatch(Action::MenuActivate);
    assert_eq!(result.effects, vec![Effect::Quit]);
    assert!(store.state().should_quit);
}

#[test]
fn menu_open_toggles_same_menu() {
    let mut store = new_store();
    run(&mut store, Command::OpenMenu(2));
    assert_eq!(store.state().menu.open_menu(), Some(2));
    run(&mut store, Command::OpenMenu(2));
    assert!(!store.state().menu.is_open());
}

#[test]
fn typing_replaces_selection_and_shifts_tags() {
    let mut store = new_store();
    type_text(&mut store, "abc def");
    store.state.document.select_chars(4, 7);
    run(&mut store, Command::ToggleItalic);
    store.state.document.select_chars(0, 3);
    type_text(&mut store, "X");

    assert_eq!(store.state().document.contents(), "X def");
    assert_eq!(
        store.state().document.tags().ranges(TagName::Italic),
        &[2..5]
    );
}

#[test]
fn mouse_double_click_selects_word() {
    let mut store = new_store();
    type_text(&mut store, "hello world");

    store.dispatch(Action::EditorMouseDown {
        pos: (0, 8),
        granularity: Granularity::Word,
        extend: false,
    });

    assert_eq!(
        store.state().document.buffer().selection_char_range(),
        Some(6..11)
    );
}

#[test]
fn mouse_drag_extends_selection() {
    let mut store = new_store();
    type_text(&mut store, "hello world");

    store.dispatch(Action::EditorMouseDown {
        pos: (0, 1),
        granularity: Granularity::Char,
        extend: false,
    });
    store.dispatch(Action::EditorMouseDrag { pos: (0, 4) });

    assert_eq!(
        store.state().document.buffer().selection_char_range(),
        Some(1..4)
    );
}

#[test]
fn view_size_keeps_cursor_visible() {
    let mut store = new_store();
    let text: String = (0..40).map(|i| format!("{i}\n")).collect();
    load(&mut store, "/tmp/long.txt", &text);
    store.dispatch(Action::SetEditorViewSize {
        width: 20,
        height: 10,
    });
    run(&mut store, Command::CursorFileEnd);

    assert_eq!(store.state().viewport.line_offset, 31);

    run(&mut store, Command::PageUp);
    assert_eq!(store.state().document.buffer().cursor().0, 30);
}

#[test]
fn exit_requests_quit() {
    let mut store = new_store();
    let result = run(&mut store, Command::Exit);
    assert_eq!(result.effects, vec![Effect::Quit]);
    assert!(store.state().should_quit);
}

#[test]
fn paste_inserts_text_with_normalized_newlines() {
    let mut store = new_store();
    store.dispatch(Action::Paste("a\r\nb".to_string()));
    assert_eq!(store.state().document.contents(), "a\nb");
}

#[test]
fn paste_into_file_dialog_takes_first_line() {
    let mut store = new_store();
    run(&mut store, Command::Open);
    store.dispatch(Action::Paste("/tmp/x.txt\nignored".to_string()));
    assert_eq!(store.state().file_dialog.input.value, "/tmp/x.txt");
    assert!(store.state().document.contents().is_empty());
}

#[test]
fn tab_inserts_literal_tab_character() {
    let mut store = new_store();
    run(&mut store, Command::InsertChar('a'));
    run(&mut store, Command::InsertTab);
    run(&mut store, Command::InsertChar('b'));

    assert_eq!(store.state().document.contents(), "a\tb");
    assert_eq!(store.state().document.buffer().cursor(), (0, 3));
}
