use delve_core::{Action, ActionError, Engine};

use super::{Dispatch, EventHandler, InventoryMode, SelectMode};
use crate::bindings;
use crate::input::{InputEvent, Key};

pub(super) fn dispatch(event: &InputEvent, engine: &mut Engine) -> Result<Dispatch, ActionError> {
    let InputEvent::KeyDown { key, .. } = *event else {
        return Ok(Dispatch::none());
    };
    let player = engine.player_id();

    if let Some((dx, dy)) = bindings::move_delta(key) {
        return Ok(Dispatch::action(Action::bump(player, dx, dy)));
    }
    if bindings::is_wait(key) {
        return Ok(Dispatch::action(Action::wait(player)));
    }

    Ok(match key {
        Key::Escape => Dispatch::action(Action::Exit),
        Key::Char('v') => Dispatch::switch(EventHandler::history(engine)),
        Key::Char('g') => Dispatch::action(Action::pickup(player)),
        Key::Char('i') => Dispatch::switch(EventHandler::Inventory(InventoryMode::Activate)),
        Key::Char('d') => Dispatch::switch(EventHandler::Inventory(InventoryMode::Drop)),
        Key::Char('/') => Dispatch::switch(EventHandler::select(SelectMode::Look, engine)?),
        _ => Dispatch::none(),
    })
}
