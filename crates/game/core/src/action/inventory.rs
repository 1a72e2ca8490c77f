use super::ActionTransition;
use crate::engine::Engine;
use crate::error::ActionError;
use crate::palette;
use crate::state::EntityId;

/// Picks up the first ground item lying on the actor's tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub entity: EntityId,
}

impl ActionTransition for PickupAction {
    fn apply(&self, engine: &mut Engine) -> Result<bool, ActionError> {
        let actor = engine.actor(self.entity)?;
        let inventory = actor
            .inventory
            .as_ref()
            .ok_or(ActionError::missing(self.entity, "inventory"))?;

        let Some(item_id) = engine.map.items_at(actor.position).next().map(|item| item.id) else {
            return Err(ActionError::impossible("There is nothing here to pick up."));
        };

        if inventory.is_full() {
            if engine.is_player(self.entity) {
                return Err(ActionError::impossible("Your inventory is full."));
            }
            return Ok(false);
        }

        let item = engine
            .map
            .take_item(item_id)
            .ok_or(ActionError::ItemNotFound {
                owner: self.entity,
                item: item_id,
            })?;
        let name = item.name.clone();

        match engine
            .map
            .actor_mut(self.entity)
            .and_then(|actor| actor.inventory.as_mut())
        {
            Some(inventory) => inventory.push(item),
            None => {
                engine.map.place_item(item);
                return Err(ActionError::missing(self.entity, "inventory"));
            }
        }

        if engine.is_player(self.entity) {
            engine
                .message_log
                .add_message(format!("You picked up the {name}!"), palette::WHITE);
        }
        Ok(true)
    }
}

/// Puts a held item on the ground under the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction {
    pub entity: EntityId,
    pub item: EntityId,
}

impl ActionTransition for DropAction {
    fn validate(&self, engine: &Engine) -> Result<(), ActionError> {
        let held = engine
            .actor(self.entity)?
            .inventory
            .as_ref()
            .is_some_and(|inventory| inventory.contains(self.item));
        if held {
            Ok(())
        } else {
            Err(ActionError::ItemNotFound {
                owner: self.entity,
                item: self.item,
            })
        }
    }

    fn apply(&self, engine: &mut Engine) -> Result<bool, ActionError> {
        let actor = engine.actor_mut(self.entity)?;
        let position = actor.position;
        let item = actor
            .inventory
            .as_mut()
            .and_then(|inventory| inventory.remove(self.item))
            .ok_or(ActionError::ItemNotFound {
                owner: self.entity,
                item: self.item,
            })?;

        let name = item.name.clone();
        engine.map.place_item(item.at(position));

        if engine.is_player(self.entity) {
            engine
                .message_log
                .add_message(format!("You dropped the {name}."), palette::WHITE);
        }
        Ok(true)
    }
}
