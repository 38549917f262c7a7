use super::*;
use crate::kernel::services::ports::default_file_filters;

fn entry(dir: &Path, name: &str, is_dir: bool) -> DirEntry {
    DirEntry::new(dir.join(name), is_dir)
}

fn dialog(mode: FileDialogMode) -> FileDialogState {
    let dir = PathBuf::from("/home/user/docs");
    let mut state = FileDialogState::default();
    state.open(mode, dir.clone(), "");
    state.set_listing(
        dir.clone(),
        vec![
            entry(&dir, "archive", true),
            entry(&dir, "main.py", false),
            entry(&dir, "notes.txt", false),
            entry(&dir, "readme", false),
            entry(&dir, "todo.txt", false),
        ],
    );
    state
}

#[test]
fn line_input_edits_on_char_boundaries() {
    let mut input = LineInput::default();
    input.insert('a');
    input.insert('é');
    input.insert('b');
    assert!(input.left());
    assert!(input.backspace());
    assert_eq!(input.value, "ab");
    assert_eq!(input.cursor, 1);
    assert!(input.delete());
    assert_eq!(input.value, "a");
    assert!(!input.right());
}

#[test]
fn rows_apply_filter_but_keep_directories() {
    let filters = default_file_filters();
    let mut state = dialog(FileDialogMode::Open);

    let labels: Vec<String> = state.rows(&filters).iter().map(|r| r.label()).collect();
    assert_eq!(
        labels,
        vec!["../", "archive/", "main.py", "notes.txt", "readme", "todo.txt"]
    );

    assert!(state.cycle_filter(&filters));
    let labels: Vec<String> = state.rows(&filters).iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["../", "archive/", "notes.txt", "todo.txt"]);

    state.cycle_filter(&filters);
    state.cycle_filter(&filters);
    assert_eq!(state.filter, 0);
}

#[test]
fn selecting_a_file_fills_the_name() {
    let filters = default_file_filters();
    let mut state = dialog(FileDialogMode::Open);
    state.move_selection(3, &filters);
    assert_eq!(state.input.value, "notes.txt");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Accept(PathBuf::from("/home/user/docs/notes.txt"))
    );
}

#[test]
fn directories_navigate() {
    let filters = default_file_filters();
    let mut state = dialog(FileDialogMode::Open);

    state.input.set("archive");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Navigate(PathBuf::from("/home/user/docs/archive"))
    );

    state.input.set("../");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Navigate(PathBuf::from("/home/user"))
    );

    state.input.clear();
    state.selected = 0;
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Navigate(PathBuf::from("/home/user"))
    );
}

#[test]
fn save_appends_default_extension_only_when_missing() {
    let filters = default_file_filters();
    let mut state = dialog(FileDialogMode::SaveAs);

    state.input.set("letter");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Accept(PathBuf::from("/home/user/docs/letter.txt"))
    );

    state.input.set("script.py");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Accept(PathBuf::from("/home/user/docs/script.py"))
    );

    state.input.set("/tmp/a");
    assert_eq!(
        state.resolve(&filters, "txt"),
        FileDialogOutcome::Accept(PathBuf::from("/tmp/a.txt"))
    );
}

#[test]
fn open_appends_extension_only_when_suffixed_file_exists() {
    let filters = default_file_filters();
    let mut state = dialog(FileDialogMode::Open);

    state.input.set("todo");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Accept(PathBuf::from("/home/user/docs/todo.txt"))
    );

    state.input.set("readme");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Accept(PathBuf::from("/home/user/docs/readme"))
    );
}

#[test]
fn normalize_folds_parent_components() {
    assert_eq!(
        normalize_path(Path::new("/a/b/./c/../d")),
        PathBuf::from("/a/b/d")
    );
    assert_eq!(normalize_path(Path::new("../x")), PathBuf::from("../x"));
}

#[test]
fn color_dialog_moves_through_grid_and_accepts_hex() {
    let mut state = ColorDialogState::default();
    state.open(None);
    assert_eq!(state.input.value, "#ffff00");

    state.move_swatch(-1, 0);
    assert_eq!(state.selected, SWATCH_COLUMNS - 1);
    state.move_swatch(0, 1);
    assert_eq!(state.selected, 2 * SWATCH_COLUMNS - 1);
    assert_eq!(state.input.value, "#ffffff");

    state.input.set("#12ab34");
    assert_eq!(state.accept(), Some(HexColor::new(0x12, 0xab, 0x34)));
}

#[test]
fn color_dialog_keeps_error_for_invalid_input() {
    let mut state = ColorDialogState::default();
    state.open(Some(HexColor::new(0xff, 0x00, 0x00)));
    assert_eq!(state.selected, 2);

    state.input.set("red");
    assert_eq!(state.accept(), None);
    assert!(state.error.is_some());
    assert!(state.visible);
}

#[test]
fn selecting_a_directory_row_navigates_on_enter() {
    let filters = default_file_filters();
    let mut state = dialog(FileDialogMode::SaveAs);
    state.move_selection(1, &filters);
    assert_eq!(state.input.value, "archive/");
    assert_eq!(
        state.resolve(&filters, ".txt"),
        FileDialogOutcome::Navigate(PathBuf::from("/home/user/docs/archive"))
    );
}
