use super::{ActionTransition, Heading, MovementAction};
use crate::engine::Engine;
use crate::error::ActionError;
use crate::palette;
use crate::state::EntityId;

/// Attacks the living actor standing at the heading's destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction(pub Heading);

impl MeleeAction {
    fn target(&self, engine: &Engine) -> Result<EntityId, ActionError> {
        let destination = self.0.destination(engine)?;
        engine
            .map
            .actor_at(destination)
            .map(|actor| actor.id)
            .ok_or_else(|| ActionError::impossible("Nothing to attack."))
    }
}

impl ActionTransition for MeleeAction {
    fn validate(&self, engine: &Engine) -> Result<(), ActionError> {
        self.target(engine).map(|_| ())
    }

    fn apply(&self, engine: &mut Engine) -> Result<bool, ActionError> {
        let attacker_id = self.0.entity;
        let target_id = self.target(engine)?;

        let attacker = engine.actor(attacker_id)?;
        let target = engine.actor(target_id)?;
        let power = attacker
            .fighter
            .as_ref()
            .ok_or(ActionError::missing(attacker_id, "fighter"))?
            .power;
        let defense = target
            .fighter
            .as_ref()
            .ok_or(ActionError::missing(target_id, "fighter"))?
            .defense;

        let damage = power - defense;
        let description = format!("{} attacks {}", capitalize(&attacker.name), target.name);
        let color = if engine.is_player(attacker_id) {
            palette::PLAYER_ATK
        } else {
            palette::ENEMY_ATK
        };

        if damage > 0 {
            engine
                .message_log
                .add_message(format!("{description} for {damage} hit points."), color);
            engine.apply_damage(target_id, damage)?;
        } else {
            engine
                .message_log
                .add_message(format!("{description} but does no damage."), color);
        }
        Ok(true)
    }
}

/// Move-or-attack: a living actor at the destination always means melee.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction(pub Heading);

impl BumpAction {
    fn resolve(&self, engine: &Engine) -> Result<Resolved, ActionError> {
        let destination = self.0.destination(engine)?;
        Ok(if engine.map.actor_at(destination).is_some() {
            Resolved::Melee(MeleeAction(self.0))
        } else {
            Resolved::Movement(MovementAction(self.0))
        })
    }
}

enum Resolved {
    Melee(MeleeAction),
    Movement(MovementAction),
}

impl ActionTransition for BumpAction {
    fn apply(&self, engine: &mut Engine) -> Result<bool, ActionError> {
        match self.resolve(engine)? {
            Resolved::Melee(melee) => super::drive_transition(&melee, engine),
            Resolved::Movement(movement) => super::drive_transition(&movement, engine),
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
