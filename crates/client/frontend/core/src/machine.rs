//! Owner of the active handler.

use delve_core::{ActionError, Engine, TurnHooks};

use crate::config::InputConfig;
use crate::handler::{Dispatch, EventHandler};
use crate::input::InputEvent;
use crate::render::{self, Console};

/// Routes input events through the active handler and the turn driver.
#[derive(Clone, Debug)]
pub struct ModeMachine {
    handler: EventHandler,
    config: InputConfig,
}

impl ModeMachine {
    /// Starts in [`EventHandler::MainGame`].
    pub fn new(config: InputConfig) -> Self {
        Self {
            handler: EventHandler::MainGame,
            config,
        }
    }

    pub fn handler(&self) -> &EventHandler {
        &self.handler
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Processes one event to completion and reports whether a turn passed.
    ///
    /// Order: dispatch, install the handler the dispatch asked for, run the
    /// action, return an AskUser handler to the main game if the turn
    /// passed, and finally force [`EventHandler::GameOver`] if the player is
    /// dead. [`ActionError::Exit`] and fatal errors propagate.
    pub fn handle_event(
        &mut self,
        event: &InputEvent,
        engine: &mut Engine,
        hooks: &mut dyn TurnHooks,
    ) -> Result<bool, ActionError> {
        tracing::trace!(?event, mode = self.handler.name(), "dispatching input");

        let returns_after_turn = self.handler.is_ask_user();
        let Dispatch { switch_to, action } = self.handler.dispatch(event, engine, &self.config)?;
        if let Some(next) = switch_to {
            self.switch(next);
        }

        let advanced = engine.handle_action(action.as_ref(), hooks)?;
        if advanced && returns_after_turn {
            self.switch(EventHandler::MainGame);
        }
        if engine.is_game_over() && self.handler != EventHandler::GameOver {
            self.switch(EventHandler::GameOver);
        }
        Ok(advanced)
    }

    /// Draws the active handler's view.
    pub fn render(&self, console: &mut dyn Console, engine: &Engine) {
        render::render(console, engine, &self.handler);
    }

    fn switch(&mut self, next: EventHandler) {
        if next != self.handler {
            tracing::debug!(from = self.handler.name(), to = next.name(), "mode transition");
        }
        self.handler = next;
    }
}
