use delve_core::Action;

use super::Dispatch;
use crate::input::{InputEvent, Key};

/// Only leaving is possible once the player is dead.
pub(super) fn dispatch(event: &InputEvent) -> Dispatch {
    match *event {
        InputEvent::KeyDown {
            key: Key::Escape, ..
        } => Dispatch::action(Action::Exit),
        _ => Dispatch::none(),
    }
}
