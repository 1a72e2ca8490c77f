//! Fixed key tables shared by every handler.

use crate::input::Key;

/// Direction bound to a movement key: arrows, Home/End/PageUp/PageDown for
/// diagonals, the numeric keypad, and the vi keys `hjklyubn`.
pub fn move_delta(key: Key) -> Option<(i32, i32)> {
    let delta = match key {
        Key::Up | Key::Keypad(8) | Key::Char('k') => (0, -1),
        Key::Down | Key::Keypad(2) | Key::Char('j') => (0, 1),
        Key::Left | Key::Keypad(4) | Key::Char('h') => (-1, 0),
        Key::Right | Key::Keypad(6) | Key::Char('l') => (1, 0),
        Key::Home | Key::Keypad(7) | Key::Char('y') => (-1, -1),
        Key::End | Key::Keypad(1) | Key::Char('b') => (-1, 1),
        Key::PageUp | Key::Keypad(9) | Key::Char('u') => (1, -1),
        Key::PageDown | Key::Keypad(3) | Key::Char('n') => (1, 1),
        _ => return None,
    };
    Some(delta)
}

pub fn is_wait(key: Key) -> bool {
    matches!(key, Key::Char('.') | Key::Keypad(5) | Key::Clear)
}

pub fn is_confirm(key: Key) -> bool {
    matches!(key, Key::Enter | Key::KeypadEnter)
}

/// Scroll step of the message history viewer.
pub fn history_scroll(key: Key) -> Option<i32> {
    match key {
        Key::Up => Some(-1),
        Key::Down => Some(1),
        Key::PageUp => Some(-10),
        Key::PageDown => Some(10),
        _ => None,
    }
}

/// Menu slot selected by a letter key, `a` being slot 0.
pub fn letter_slot(key: Key) -> Option<usize> {
    match key {
        Key::Char(ch @ 'a'..='z') => Some(ch as usize - 'a' as usize),
        _ => None,
    }
}

/// Letter displayed next to a menu slot.
pub fn slot_letter(slot: usize) -> Option<char> {
    u8::try_from(slot)
        .ok()
        .filter(|&slot| slot < 26)
        .map(|slot| char::from(b'a' + slot))
}
