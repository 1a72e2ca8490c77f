use super::{EntityId, Position};
use crate::palette::Color;

/// An item either lying on the map or held in an inventory.
///
/// Ownership is expressed by containment: the map's ground collection or an
/// [`super::Inventory`] holds the value, never both. `position` is only
/// meaningful while the item lies on the ground and is refreshed whenever the
/// item is dropped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub color: Color,
    pub position: Position,
    pub consumable: Consumable,
}

impl ItemState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        color: Color,
        consumable: Consumable,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
            color,
            position: Position::ORIGIN,
            consumable,
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// One-shot effect carried by an item. Holds parameters only; the effect
/// logic lives in [`crate::action::effect`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Consumable {
    /// Restores up to `amount` hit points to the user.
    Healing { amount: i32 },

    /// Strikes the nearest visible actor within `max_range` tiles.
    LightningDamage { damage: i32, max_range: i32 },

    /// Makes a chosen actor stumble randomly for a number of turns.
    Confusion { turns: u32 },

    /// Damages every actor within `radius` of a chosen tile.
    Fireball { damage: i32, radius: i32 },
}
