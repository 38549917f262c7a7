use super::*;
use crate::app::theme::UiTheme;
use crate::core::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::core::event::{MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::services::adapters::LocalFileProvider;
use crate::kernel::services::ports::EditorConfig;
use crate::kernel::{FocusTarget, StatusLevel};
use crate::models::{HexColor, TagName};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::Path;
use tempfile::tempdir;

fn new_workbench(dir: &Path) -> Workbench {
    let state = AppState::new(
        dir.to_path_buf(),
        EditorConfig::default(),
        vec!["Arial".to_string(), "Courier New".to_string()],
    );
    Workbench::with_theme(
        state,
        KeybindingService::with_defaults(),
        Box::new(LocalFileProvider::new()),
        UiTheme::default(),
    )
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Key(KeyEvent::new(code, modifiers))
}

fn type_text(workbench: &mut Workbench, text: &str) {
    for ch in text.chars() {
        workbench.handle_input(&key(KeyCode::Char(ch), KeyModifiers::NONE));
    }
}

fn click(workbench: &mut Workbench, column: u16, row: u16) -> EventResult {
    workbench.handle_input(&InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

fn render_rows(workbench: &mut Workbench, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal
        .draw(|frame| {
            let area = frame.area();
            workbench.render(frame, area);
        })
        .expect("draw");

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

#[test]
fn initial_title_is_queued_once() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());

    assert_eq!(
        workbench.take_title().as_deref(),
        Some("Untitled - TextEditor")
    );
    assert_eq!(workbench.take_title(), None);
}

#[test]
fn render_draws_title_menu_bar_text_and_status() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    type_text(&mut workbench, "hello");

    let rows = render_rows(&mut workbench, 60, 10);

    assert!(rows[0].starts_with("Untitled - TextEditor"));
    assert!(rows[1].contains(" File "));
    assert!(rows[1].contains(" Font "));
    assert!(rows[1].contains(" Style "));
    assert!(rows[2].starts_with("hello"));
    assert!(rows[9].contains("Font: Arial 12"));
    assert!(rows[9].contains("Ln 1, Col 6"));
    assert_eq!(workbench.cursor_position(), Some((5, 2)));
}

#[test]
fn bold_without_selection_shows_warning() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    type_text(&mut workbench, "abc");

    workbench.handle_input(&key(KeyCode::Char('b'), KeyModifiers::CONTROL));

    let status = workbench.state().status.clone().expect("status");
    assert_eq!(status.level, StatusLevel::Warning);
    assert_eq!(status.text, "No text selected");
    let rows = render_rows(&mut workbench, 60, 6);
    assert!(rows[5].contains("No text selected"));
    assert!(workbench.state().document.tags().is_empty());
}

#[test]
fn save_untitled_goes_through_save_as_dialog() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    workbench.take_title();
    type_text(&mut workbench, "hello");

    workbench.handle_input(&key(KeyCode::Char('s'), KeyModifiers::CONTROL));
    assert_eq!(workbench.state().focus(), FocusTarget::FileDialog);

    let rows = render_rows(&mut workbench, 80, 24);
    assert!(rows.iter().any(|row| row.contains(" Save As ")));

    type_text(&mut workbench, "notes");
    workbench.handle_input(&key(KeyCode::Enter, KeyModifiers::NONE));

    let expected = dir.path().join("notes.txt");
    assert_eq!(std::fs::read_to_string(&expected).expect("read"), "hello");
    assert_eq!(workbench.state().document.path(), Some(expected.as_path()));
    assert_eq!(
        workbench.take_title(),
        Some(format!("{} - TextEditor", expected.display()))
    );
    assert_eq!(workbench.state().focus(), FocusTarget::Editor);
}

#[test]
fn open_path_loads_file_and_queues_title() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("a.txt");
    std::fs::write(&path, "one\ntwo").expect("write");
    let mut workbench = new_workbench(dir.path());
    workbench.take_title();

    assert!(workbench.open_path(path.clone()));

    assert_eq!(workbench.state().document.contents(), "one\ntwo");
    assert_eq!(
        workbench.take_title(),
        Some(format!("{} - TextEditor", path.display()))
    );
}

#[test]
fn open_missing_file_keeps_document_and_reports_error() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    type_text(&mut workbench, "keep");
    workbench.take_title();

    workbench.open_path(dir.path().join("missing.txt"));

    assert_eq!(workbench.state().document.contents(), "keep");
    let status = workbench.state().status.clone().expect("status");
    assert_eq!(status.level, StatusLevel::Error);
    assert_eq!(workbench.take_title(), None);
}

#[test]
fn clicking_menu_title_and_exit_row_quits() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    render_rows(&mut workbench, 80, 24);

    // " File " spans columns 1..7 on the menu bar row.
    assert_eq!(click(&mut workbench, 2, 1), EventResult::Consumed);
    assert_eq!(workbench.state().menu.open_menu(), Some(0));

    let rows = render_rows(&mut workbench, 80, 24);
    assert!(rows[3].contains("New"));
    assert!(rows[3].contains("Ctrl+N"));
    assert!(rows[6].contains("─"));
    assert!(rows[7].contains("Exit"));

    // Dropdown rows start one below the border at y = 3.
    assert_eq!(click(&mut workbench, 4, 7), EventResult::Quit);
    assert!(workbench.should_quit());
}

#[test]
fn clicking_separator_does_nothing() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    render_rows(&mut workbench, 80, 24);
    click(&mut workbench, 2, 1);

    assert_eq!(click(&mut workbench, 4, 6), EventResult::Ignored);
    assert!(workbench.state().menu.is_open());
    assert!(!workbench.should_quit());
}

#[test]
fn font_menu_marks_current_family_and_changes_it() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    workbench.handle_input(&key(KeyCode::Char('o'), KeyModifiers::ALT));
    assert_eq!(workbench.state().menu.open_menu(), Some(1));

    let rows = render_rows(&mut workbench, 80, 24);
    assert!(rows[3].contains("● Arial"));

    workbench.handle_input(&key(KeyCode::Down, KeyModifiers::NONE));
    workbench.handle_input(&key(KeyCode::Enter, KeyModifiers::NONE));

    assert_eq!(workbench.state().document.font().family, "Courier New");
    assert!(!workbench.state().menu.is_open());
}

#[test]
fn highlight_applies_chosen_swatch_to_selection() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    type_text(&mut workbench, "abc");
    workbench.handle_input(&key(KeyCode::Char('a'), KeyModifiers::CONTROL));

    workbench.handle_input(&key(KeyCode::Char('h'), KeyModifiers::ALT));
    assert_eq!(workbench.state().focus(), FocusTarget::ColorDialog);
    workbench.handle_input(&key(KeyCode::Right, KeyModifiers::NONE));
    workbench.handle_input(&key(KeyCode::Right, KeyModifiers::NONE));
    assert_eq!(workbench.state().color_dialog.input.value, "#ff0000");
    workbench.handle_input(&key(KeyCode::Enter, KeyModifiers::NONE));

    let tags = workbench.state().document.tags();
    assert_eq!(tags.ranges(TagName::Highlight), &[0..3]);
    assert_eq!(
        tags.style(TagName::Highlight).background,
        Some(HexColor::new(0xff, 0x00, 0x00))
    );
    assert_eq!(workbench.state().focus(), FocusTarget::Editor);
}

#[test]
fn double_click_selects_word() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());
    type_text(&mut workbench, "hello world");
    render_rows(&mut workbench, 60, 10);

    click(&mut workbench, 7, 2);
    click(&mut workbench, 7, 2);

    assert_eq!(
        workbench.state().document.buffer().selection_char_range(),
        Some(6..11)
    );
}

#[test]
fn paste_inserts_into_editor() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());

    let result = workbench.handle_input(&InputEvent::Paste("a\r\nb".to_string()));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(workbench.state().document.contents(), "a\nb");
}

#[test]
fn key_release_and_exit_shortcut() {
    let dir = tempdir().expect("tempdir");
    let mut workbench = new_workbench(dir.path());

    let release = InputEvent::Key(KeyEvent {
        code: KeyCode::Char('x'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
    });
    assert_eq!(workbench.handle_input(&release), EventResult::Ignored);
    assert_eq!(workbench.state().document.contents(), "");

    assert_eq!(
        workbench.handle_input(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)),
        EventResult::Quit
    );
}

#[test]
fn style_menu_shows_rebound_shortcut() {
    let dir = tempdir().expect("tempdir");
    let state = AppState::new(
        dir.path().to_path_buf(),
        EditorConfig::default(),
        vec!["Arial".to_string()],
    );
    let rule = |key: &str, command: &str| crate::kernel::services::ports::KeybindingRule {
        key: key.to_string(),
        command: command.to_string(),
        context: None,
    };
    let rules = [rule("ctrl+b", "-"), rule("ctrl+k", "toggleBold")];
    let mut workbench = Workbench::with_theme(
        state,
        KeybindingService::with_rules(&rules),
        Box::new(LocalFileProvider::new()),
        UiTheme::default(),
    );

    workbench.handle_input(&key(KeyCode::Char('s'), KeyModifiers::ALT));
    let rows = render_rows(&mut workbench, 80, 24);

    assert!(rows[3].contains("Bold"));
    assert!(rows[3].contains("Ctrl+K"));
}
