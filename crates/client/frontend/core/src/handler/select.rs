use delve_core::{Action, ActionError, EntityId, Engine, GameMap, Position};

use super::{Dispatch, EventHandler, ask_user};
use crate::bindings;
use crate::config::InputConfig;
use crate::input::{InputEvent, MouseButton};

/// What confirming a tile does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectMode {
    /// Just look around.
    Look,
    /// Aim an item at a single tile.
    SingleTarget { item: EntityId },
    /// Aim an item at the center of an area.
    AreaTarget { item: EntityId, radius: i32 },
}

pub(super) fn enter(mode: SelectMode, engine: &mut Engine) -> Result<EventHandler, ActionError> {
    engine.mouse_location = engine.player()?.position;
    Ok(EventHandler::Select(mode))
}

pub(super) fn dispatch(
    mode: SelectMode,
    event: &InputEvent,
    engine: &mut Engine,
    config: &InputConfig,
) -> Dispatch {
    match *event {
        InputEvent::KeyDown { key, modifiers } => {
            if let Some((dx, dy)) = bindings::move_delta(key) {
                let step = config.cursor.multiplier(modifiers);
                let moved = engine.mouse_location.offset(dx * step, dy * step);
                engine.mouse_location = clamp_to_map(moved, &engine.map);
                return Dispatch::none();
            }
            if bindings::is_confirm(key) {
                return selected(mode, engine.mouse_location, engine);
            }
            ask_user::key_down(key)
        }
        InputEvent::MouseDown { tile, button } => {
            if engine.map.in_bounds(tile) && button == MouseButton::Left {
                selected(mode, tile, engine)
            } else {
                ask_user::mouse_down()
            }
        }
        InputEvent::MouseMotion { .. } | InputEvent::Quit => Dispatch::none(),
    }
}

fn selected(mode: SelectMode, tile: Position, engine: &Engine) -> Dispatch {
    let player = engine.player_id();
    match mode {
        SelectMode::Look => ask_user::exit(),
        SelectMode::SingleTarget { item } | SelectMode::AreaTarget { item, .. } => {
            ask_user::exit().with_action(Action::use_item(player, item, Some(tile)))
        }
    }
}

/// Keeps a cursor inside the map.
pub fn clamp_to_map(position: Position, map: &GameMap) -> Position {
    Position::new(
        position.x.clamp(0, (map.width() - 1).max(0)),
        position.y.clamp(0, (map.height() - 1).max(0)),
    )
}
