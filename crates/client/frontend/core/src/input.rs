//! Frontend-agnostic input events.
//!
//! Backends translate their raw device events into [`InputEvent`]s; the
//! handler state machine never sees terminal or window-system types.

use bitflags::bitflags;
use delve_core::Position;

/// Symbolic key, independent of keyboard layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Clear,
    Escape,
    Enter,
    KeypadEnter,
    /// Numeric keypad digit `0..=9`.
    Keypad(u8),
    /// Printable character, as typed.
    Char(char),
    LeftShift,
    RightShift,
    LeftCtrl,
    RightCtrl,
    LeftAlt,
    RightAlt,
    /// Anything the game has no use for.
    Other,
}

impl Key {
    /// Returns true for keys that only modify other keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            Key::LeftShift
                | Key::RightShift
                | Key::LeftCtrl
                | Key::RightCtrl
                | Key::LeftAlt
                | Key::RightAlt
        )
    }
}

bitflags! {
    /// Modifier keys held while a key went down.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const LSHIFT = 1 << 0;
        const RSHIFT = 1 << 1;
        const LCTRL = 1 << 2;
        const RCTRL = 1 << 3;
        const LALT = 1 << 4;
        const RALT = 1 << 5;

        const SHIFT = Self::LSHIFT.bits() | Self::RSHIFT.bits();
        const CTRL = Self::LCTRL.bits() | Self::RCTRL.bits();
        const ALT = Self::LALT.bits() | Self::RALT.bits();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// One discrete input event, already mapped to map tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown { key: Key, modifiers: Modifiers },
    MouseMotion { tile: Position },
    MouseDown { tile: Position, button: MouseButton },
    /// The window or terminal asked the game to close.
    Quit,
}

impl InputEvent {
    /// Key press without modifiers.
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn char(ch: char) -> Self {
        Self::key(Key::Char(ch))
    }
}
