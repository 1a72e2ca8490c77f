//! Input-handler state machine.
//!
//! Exactly one [`EventHandler`] is active at a time. Handling an event may
//! name a replacement handler in the returned [`Dispatch`]; handlers never
//! stack, and the AskUser family (inventory menus and tile selection) knows
//! how to return to [`EventHandler::MainGame`] on its own.

mod ask_user;
mod game_over;
mod history;
mod inventory;
mod main_game;
mod select;

pub use history::HistoryCursor;
pub use inventory::InventoryMode;
pub use select::SelectMode;

use delve_core::{Action, ActionError, Engine};
use strum::IntoStaticStr;

use crate::config::InputConfig;
use crate::input::InputEvent;

/// The active input-interpretation mode.
#[derive(Clone, Debug, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EventHandler {
    MainGame,
    Inventory(InventoryMode),
    Select(SelectMode),
    HistoryViewer(HistoryCursor),
    GameOver,
}

/// Result of handing one event to the active handler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dispatch {
    /// Handler to install before the action runs.
    pub switch_to: Option<EventHandler>,
    /// Game action to hand to the turn driver.
    pub action: Option<Action>,
}

impl Dispatch {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn action(action: Action) -> Self {
        Self {
            switch_to: None,
            action: Some(action),
        }
    }

    pub fn switch(handler: EventHandler) -> Self {
        Self {
            switch_to: Some(handler),
            action: None,
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl EventHandler {
    /// Opens the message history with the cursor on the newest message.
    pub fn history(engine: &Engine) -> Self {
        Self::HistoryViewer(HistoryCursor::new(engine.message_log.len()))
    }

    /// Enters tile selection with the cursor on the player.
    pub fn select(mode: SelectMode, engine: &mut Engine) -> Result<Self, ActionError> {
        select::enter(mode, engine)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Handlers that drop back to the main game once a turn passes.
    pub fn is_ask_user(&self) -> bool {
        matches!(self, Self::Inventory(_) | Self::Select(_))
    }

    /// Interprets one event.
    ///
    /// Handlers may update the engine's cursor or log directly; game
    /// actions are returned for the turn driver instead of being performed.
    pub fn dispatch(
        &mut self,
        event: &InputEvent,
        engine: &mut Engine,
        config: &InputConfig,
    ) -> Result<Dispatch, ActionError> {
        match *event {
            InputEvent::Quit => return Ok(Dispatch::action(Action::Exit)),
            InputEvent::MouseMotion { tile } => {
                if engine.map.in_bounds(tile) {
                    engine.mouse_location = tile;
                }
                return Ok(Dispatch::none());
            }
            InputEvent::KeyDown { .. } | InputEvent::MouseDown { .. } => {}
        }

        match self {
            Self::MainGame => main_game::dispatch(event, engine),
            Self::Inventory(mode) => inventory::dispatch(*mode, event, engine),
            Self::Select(mode) => Ok(select::dispatch(*mode, event, engine, config)),
            Self::HistoryViewer(cursor) => Ok(history::dispatch(cursor, event)),
            Self::GameOver => Ok(game_over::dispatch(event)),
        }
    }
}
