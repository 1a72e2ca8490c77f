//! Turn driver.
//!
//! The [`Engine`] owns the map, the message log and the shared cursor. It
//! executes one [`Action`] at a time and, when the action consumes a turn,
//! hands control to the [`TurnHooks`] for the enemy sweep and the visibility
//! refresh, in that order.

mod death;
mod hook;

pub use hook::TurnHooks;

use crate::action::Action;
use crate::config::GameConfig;
use crate::error::{ActionError, GameError};
use crate::message::MessageLog;
use crate::palette;
use crate::state::{ActorState, EntityId, GameMap, Position};

/// Everything a running game session mutates.
#[derive(Clone, Debug)]
pub struct Engine {
    pub map: GameMap,
    pub message_log: MessageLog,
    /// Tile under the mouse pointer, or the targeting cursor while selecting.
    pub mouse_location: Position,
    player: EntityId,
    game_over: bool,
    config: GameConfig,
}

impl Engine {
    /// Creates a session around an already populated map.
    pub fn new(map: GameMap, player: EntityId, config: GameConfig) -> Result<Self, ActionError> {
        let origin = map
            .actor(player)
            .map(|actor| actor.position)
            .ok_or(ActionError::ActorNotFound(player))?;

        Ok(Self {
            map,
            message_log: MessageLog::new(config.message_log_capacity),
            mouse_location: origin,
            player,
            game_over: false,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn is_player(&self, entity: EntityId) -> bool {
        entity == self.player
    }

    pub fn player(&self) -> Result<&ActorState, ActionError> {
        self.actor(self.player)
    }

    /// Set once the player dies; never cleared.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn actor(&self, entity: EntityId) -> Result<&ActorState, ActionError> {
        self.map
            .actor(entity)
            .ok_or(ActionError::ActorNotFound(entity))
    }

    pub fn actor_mut(&mut self, entity: EntityId) -> Result<&mut ActorState, ActionError> {
        self.map
            .actor_mut(entity)
            .ok_or(ActionError::ActorNotFound(entity))
    }

    /// Runs one action through the turn driver.
    ///
    /// Returns whether a turn passed. [`ActionError::Impossible`] is logged
    /// and swallowed; every other error is returned untouched, without
    /// running the hooks.
    pub fn handle_action(
        &mut self,
        action: Option<&Action>,
        hooks: &mut dyn TurnHooks,
    ) -> Result<bool, ActionError> {
        let Some(action) = action else {
            return Ok(false);
        };

        let advanced = match action.perform(self) {
            Ok(advanced) => advanced,
            Err(ActionError::Impossible(impossible)) => {
                tracing::debug!(?action, reason = impossible.message(), "action impossible");
                self.message_log
                    .add_message(impossible.message(), palette::IMPOSSIBLE);
                return Ok(false);
            }
            Err(ActionError::Exit) => return Err(ActionError::Exit),
            Err(error) => {
                tracing::warn!(
                    ?action,
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    "action failed: {error}"
                );
                return Err(error);
            }
        };

        tracing::debug!(?action, advanced, "action performed");
        if advanced {
            hooks.handle_enemy_turns(self);
            hooks.update_fov(self);
        }
        Ok(advanced)
    }
}
