//! Input processing for the CLI client.
//!
//! This module owns the crossterm-to-[`InputEvent`] mapping so the handler
//! state machine can remain agnostic about terminal specifics. The console
//! is drawn at the terminal origin, so a mouse cell is also a map tile.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, ModifierKeyCode,
    MouseButton as TermButton, MouseEvent, MouseEventKind,
};
use delve_core::Position;
use delve_frontend::{InputEvent, Key, Modifiers, MouseButton};

/// Converts a raw terminal event. Returns `None` for events the game ignores
/// (key releases, scrolling, resizes, focus changes, pastes).
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        _ => None,
    }
}

fn translate_key(event: &KeyEvent) -> Option<InputEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(event.code, KeyCode::Char('c' | 'C'))
    {
        return Some(InputEvent::Quit);
    }

    let mut modifiers = modifiers(event.modifiers);
    let keypad = event.state.contains(KeyEventState::KEYPAD);

    let key = match event.code {
        KeyCode::Char(ch) if keypad && ch.is_ascii_digit() => Key::Keypad(ch as u8 - b'0'),
        KeyCode::Char(ch) if ch.is_ascii_uppercase() => {
            modifiers |= Modifiers::LSHIFT;
            Key::Char(ch.to_ascii_lowercase())
        }
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter if keypad => Key::KeypadEnter,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::KeypadBegin => Key::Clear,
        KeyCode::Modifier(code) => modifier_key(code),
        _ => Key::Other,
    };

    Some(InputEvent::KeyDown { key, modifiers })
}

// Terminals do not report which side a modifier was held on.
fn modifiers(held: KeyModifiers) -> Modifiers {
    let mut modifiers = Modifiers::empty();
    if held.contains(KeyModifiers::SHIFT) {
        modifiers |= Modifiers::LSHIFT;
    }
    if held.contains(KeyModifiers::CONTROL) {
        modifiers |= Modifiers::LCTRL;
    }
    if held.contains(KeyModifiers::ALT) {
        modifiers |= Modifiers::LALT;
    }
    modifiers
}

fn modifier_key(code: ModifierKeyCode) -> Key {
    match code {
        ModifierKeyCode::LeftShift => Key::LeftShift,
        ModifierKeyCode::RightShift => Key::RightShift,
        ModifierKeyCode::LeftControl => Key::LeftCtrl,
        ModifierKeyCode::RightControl => Key::RightCtrl,
        ModifierKeyCode::LeftAlt => Key::LeftAlt,
        ModifierKeyCode::RightAlt => Key::RightAlt,
        _ => Key::Other,
    }
}

fn translate_mouse(event: &MouseEvent) -> Option<InputEvent> {
    let tile = Position::new(i32::from(event.column), i32::from(event.row));
    match event.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::MouseMotion { tile }),
        MouseEventKind::Down(button) => Some(InputEvent::MouseDown {
            tile,
            button: match button {
                TermButton::Left => MouseButton::Left,
                TermButton::Middle => MouseButton::Middle,
                TermButton::Right => MouseButton::Right,
            },
        }),
        _ => None,
    }
}
