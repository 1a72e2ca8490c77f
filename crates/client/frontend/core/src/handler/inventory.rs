use delve_core::{Action, ActionError, Engine, UseRequest, palette};

use super::{Dispatch, EventHandler, SelectMode, ask_user};
use crate::bindings;
use crate::input::InputEvent;

/// What picking an inventory letter does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryMode {
    Activate,
    Drop,
}

impl InventoryMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Activate => "Select an item to use.",
            Self::Drop => "Select an item to drop.",
        }
    }
}

pub(super) fn dispatch(
    mode: InventoryMode,
    event: &InputEvent,
    engine: &mut Engine,
) -> Result<Dispatch, ActionError> {
    match *event {
        InputEvent::KeyDown { key, .. } => match bindings::letter_slot(key) {
            Some(slot) => select_slot(mode, slot, engine),
            None => Ok(ask_user::key_down(key)),
        },
        InputEvent::MouseDown { .. } => Ok(ask_user::mouse_down()),
        InputEvent::MouseMotion { .. } | InputEvent::Quit => Ok(Dispatch::none()),
    }
}

fn select_slot(
    mode: InventoryMode,
    slot: usize,
    engine: &mut Engine,
) -> Result<Dispatch, ActionError> {
    let player = engine.player()?;
    let inventory = player
        .inventory
        .as_ref()
        .ok_or(ActionError::MissingComponent {
            entity: player.id,
            component: "inventory",
        })?;

    let user = player.id;
    let selection = inventory
        .get(slot)
        .map(|item| (item.id, item.consumable));

    let Some((item_id, consumable)) = selection else {
        engine
            .message_log
            .add_message("Invalid entry.", palette::INVALID);
        return Ok(Dispatch::none());
    };
    tracing::trace!(?mode, slot, item = %item_id, "inventory slot selected");

    if mode == InventoryMode::Drop {
        return Ok(ask_user::exit().with_action(Action::drop_item(user, item_id)));
    }

    let target_mode = match consumable.use_request(user, item_id) {
        UseRequest::Immediate(action) => return Ok(ask_user::exit().with_action(action)),
        UseRequest::SelectTarget => SelectMode::SingleTarget { item: item_id },
        UseRequest::SelectArea { radius } => SelectMode::AreaTarget {
            item: item_id,
            radius,
        },
    };

    engine
        .message_log
        .add_message("Select a target location.", palette::NEEDS_TARGET);
    Ok(Dispatch::switch(EventHandler::select(target_mode, engine)?))
}
