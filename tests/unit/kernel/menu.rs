use super::*;

fn families() -> Vec<String> {
    ["Arial", "Courier", "Georgia", "Helvetica", "Times"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn file_menu_has_separator_before_exit() {
    let menu = MenuBarState::new(families());
    let items = menu.items(MENU_FILE, "Arial");
    let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["New", "Open", "Save", "", "Exit"]);
    assert!(items[3].is_separator());
    assert_eq!(items[4].command, Some(Command::Exit));
}

#[test]
fn font_menu_marks_current_family() {
    let menu = MenuBarState::new(families());
    let items = menu.items(MENU_FONT, "Georgia");
    assert_eq!(items.len(), 5);
    let checked: Vec<&str> = items
        .iter()
        .filter(|i| i.checked == Some(true))
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(checked, vec!["Georgia"]);
    assert_eq!(
        items[2].command,
        Some(Command::ChangeFont("Georgia".to_string()))
    );
}

#[test]
fn opening_font_menu_selects_current_family() {
    let mut menu = MenuBarState::new(families());
    assert!(menu.open(MENU_FONT, "Helvetica"));
    assert_eq!(menu.selected(), 3);
    assert_eq!(
        menu.selected_command("Helvetica"),
        Some(Command::ChangeFont("Helvetica".to_string()))
    );
}

#[test]
fn move_selection_skips_separator_and_wraps() {
    let mut menu = MenuBarState::new(families());
    menu.open(MENU_FILE, "Arial");
    menu.move_selection(2, "Arial");
    assert_eq!(menu.selected(), 2);
    menu.move_selection(1, "Arial");
    assert_eq!(menu.selected(), 4);
    menu.move_selection(1, "Arial");
    assert_eq!(menu.selected(), 0);
    menu.move_selection(-1, "Arial");
    assert_eq!(menu.selected(), 4);
}

#[test]
fn switch_menu_wraps_around() {
    let mut menu = MenuBarState::new(families());
    menu.open(MENU_FILE, "Arial");
    menu.switch_menu(-1, "Arial");
    assert_eq!(menu.open_menu(), Some(MENU_STYLE));
    menu.switch_menu(1, "Arial");
    assert_eq!(menu.open_menu(), Some(MENU_FILE));
}

#[test]
fn long_menu_scrolls_with_selection() {
    let mut menu = MenuBarState::new(families());
    menu.set_max_visible(2);
    menu.open(MENU_FONT, "Arial");
    assert_eq!(menu.visible_range(5), 0..2);

    menu.move_selection(3, "Arial");
    assert_eq!(menu.selected(), 3);
    assert_eq!(menu.visible_range(5), 2..4);

    menu.move_selection(-3, "Arial");
    assert_eq!(menu.visible_range(5), 0..2);
}

#[test]
fn select_ignores_separators() {
    let mut menu = MenuBarState::new(families());
    menu.open(MENU_FILE, "Arial");
    assert!(!menu.select(3, "Arial"));
    assert!(menu.select(4, "Arial"));
    assert!(!menu.select(9, "Arial"));
}

#[test]
fn title_hit_testing() {
    // " File " at 1..7, " Font " at 7..13, " Style " at 13..20
    assert_eq!(title_at(0), None);
    assert_eq!(title_at(1), Some(MENU_FILE));
    assert_eq!(title_at(8), Some(MENU_FONT));
    assert_eq!(title_at(19), Some(MENU_STYLE));
    assert_eq!(title_at(20), None);
}

#[test]
fn close_reports_whether_it_was_open() {
    let mut menu = MenuBarState::new(families());
    assert!(!menu.close());
    menu.open(MENU_STYLE, "Arial");
    assert!(menu.close());
    assert!(!menu.is_open());
}

#[test]
fn command_items_show_configured_shortcuts() {
    let mut menu = MenuBarState::new(families());
    assert_eq!(menu.items(MENU_STYLE, "Arial")[0].shortcut, None);

    let mut shortcuts = FxHashMap::default();
    shortcuts.insert(Command::ToggleBold, "Ctrl+K".to_string());
    menu.set_shortcuts(shortcuts);

    let items = menu.items(MENU_STYLE, "Arial");
    assert_eq!(items[0].shortcut.as_deref(), Some("Ctrl+K"));
    assert_eq!(items[1].shortcut, None);
}
