use super::*;

#[test]
fn ctrl_space_normalizes_from_null() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Null,
        crossterm::event::KeyModifiers::NONE,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char(' '));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
}

#[test]
fn ctrl_uppercase_letter_becomes_lowercase_with_shift() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('B'),
        crossterm::event::KeyModifiers::CONTROL,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('b'));
    assert!(converted.modifiers.contains(KeyModifiers::CONTROL));
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT));
}

#[test]
fn plain_uppercase_is_kept_for_typing() {
    let event = crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('H'),
        crossterm::event::KeyModifiers::SHIFT,
    );
    let converted = into_key_event(event);
    assert_eq!(converted.code, KeyCode::Char('H'));
}

#[test]
fn mouse_drag_keeps_button_and_position() {
    let event = crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Drag(crossterm::event::MouseButton::Left),
        column: 7,
        row: 3,
        modifiers: crossterm::event::KeyModifiers::SHIFT,
    };
    let converted = into_mouse_event(event);
    assert_eq!(converted.kind, MouseEventKind::Drag(MouseButton::Left));
    assert_eq!((converted.column, converted.row), (7, 3));
    assert!(converted.modifiers.contains(KeyModifiers::SHIFT));
}
