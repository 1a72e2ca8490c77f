use super::Engine;
use crate::error::ActionError;
use crate::palette;
use crate::state::{Death, EntityId};

impl Engine {
    /// Applies damage to an actor and announces its death if this blow
    /// killed it. Killing the player ends the game.
    pub fn apply_damage(
        &mut self,
        target: EntityId,
        amount: i32,
    ) -> Result<Option<Death>, ActionError> {
        let actor = self.actor_mut(target)?;
        if actor.fighter.is_none() {
            return Err(ActionError::missing(target, "fighter"));
        }

        let death = actor.take_damage(amount);
        if let Some(death) = &death {
            self.announce_death(death);
        }
        Ok(death)
    }

    fn announce_death(&mut self, death: &Death) {
        if self.is_player(death.entity) {
            tracing::info!(player = %death.entity, "player died");
            self.game_over = true;
            self.message_log.add_message("You died!", palette::PLAYER_DIE);
        } else {
            tracing::debug!(entity = %death.entity, name = %death.name, "actor died");
            self.message_log
                .add_message(format!("{} is dead!", death.name), palette::ENEMY_DIE);
        }
    }
}
