//! Default behavior shared by the handlers that ask the player something.

use super::{Dispatch, EventHandler};
use crate::input::Key;

/// Any key other than a bare modifier cancels back to the main game.
pub(super) fn key_down(key: Key) -> Dispatch {
    if key.is_modifier() {
        Dispatch::none()
    } else {
        exit()
    }
}

/// Any click cancels back to the main game.
pub(super) fn mouse_down() -> Dispatch {
    exit()
}

pub(super) fn exit() -> Dispatch {
    Dispatch::switch(EventHandler::MainGame)
}
