use super::{ActionTransition, Heading};
use crate::engine::Engine;
use crate::error::ActionError;

/// Steps one tile. Every rejected destination reports why.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementAction(pub Heading);

impl ActionTransition for MovementAction {
    fn validate(&self, engine: &Engine) -> Result<(), ActionError> {
        let destination = self.0.destination(engine)?;

        if !engine.map.in_bounds(destination) {
            return Err(ActionError::impossible("Destination is out of bounds."));
        }
        if !engine.map.is_walkable(destination) {
            return Err(ActionError::impossible("Destination is blocked by a tile."));
        }
        if engine.map.blocking_entity_at(destination).is_some() {
            return Err(ActionError::impossible(
                "Destination is blocked by an entity.",
            ));
        }
        Ok(())
    }

    fn apply(&self, engine: &mut Engine) -> Result<bool, ActionError> {
        let Heading { entity, dx, dy } = self.0;
        let actor = engine.actor_mut(entity)?;
        actor.position = actor.position.offset(dx, dy);
        Ok(true)
    }
}
