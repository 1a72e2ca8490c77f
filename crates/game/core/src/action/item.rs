use super::{ActionTransition, effect};
use crate::engine::Engine;
use crate::error::ActionError;
use crate::state::{EntityId, Position};

/// Activates a held consumable.
///
/// Attempting the use consumes the turn; a failed activation surfaces as
/// [`ActionError::Impossible`] before any turn passes and leaves the item in
/// the inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAction {
    pub entity: EntityId,
    pub item: EntityId,
    /// Chosen tile; the user's own tile when absent.
    pub target: Option<Position>,
}

impl ItemAction {
    pub fn target_position(&self, engine: &Engine) -> Result<Position, ActionError> {
        match self.target {
            Some(target) => Ok(target),
            None => Ok(engine.actor(self.entity)?.position),
        }
    }
}

impl ActionTransition for ItemAction {
    fn validate(&self, engine: &Engine) -> Result<(), ActionError> {
        effect::held_item(engine, self.entity, self.item).map(|_| ())
    }

    fn apply(&self, engine: &mut Engine) -> Result<bool, ActionError> {
        let target = self.target_position(engine)?;
        effect::activate(engine, self.entity, self.item, target)?;
        Ok(true)
    }
}
