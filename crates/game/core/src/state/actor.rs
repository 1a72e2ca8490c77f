use strum::{EnumIter, IntoStaticStr};

use super::{EntityId, Fighter, Inventory, Position};
use crate::palette::{self, Color};

/// Drawing layer; later layers are drawn on top of earlier ones.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

/// Decision-making component of an actor.
///
/// Any variant means the actor is alive. Death clears it for good.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ai {
    /// Driven by player input; never acts during the enemy sweep.
    Controlled,

    /// Chases and attacks the player when it can see them.
    Hostile,

    /// Stumbles randomly, then reverts to `previous`.
    Confused {
        previous: Box<Ai>,
        turns_remaining: u32,
    },
}

/// Record of an actor that has just died.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Death {
    pub entity: EntityId,
    /// Name before the corpse rename.
    pub name: String,
}

/// A positioned entity that may take turns.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub glyph: char,
    pub color: Color,
    pub position: Position,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,

    pub fighter: Option<Fighter>,
    pub inventory: Option<Inventory>,
    pub ai: Option<Ai>,
}

impl ActorState {
    /// Creates a blocking actor with no components.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        glyph: char,
        color: Color,
        position: Position,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            glyph,
            color,
            position,
            blocks_movement: true,
            render_order: RenderOrder::Actor,
            fighter: None,
            inventory: None,
            ai: None,
        }
    }

    pub fn with_fighter(mut self, fighter: Fighter) -> Self {
        self.fighter = Some(fighter);
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_ai(mut self, ai: Ai) -> Self {
        self.ai = Some(ai);
        self
    }

    /// An actor is alive for as long as it has an AI.
    pub fn is_alive(&self) -> bool {
        self.ai.is_some()
    }

    /// Sets hit points through the clamp and reports a death if the actor
    /// just hit zero while still alive.
    ///
    /// Dying clears the AI, so further zero-sets report nothing.
    pub fn set_hp(&mut self, value: i32) -> Option<Death> {
        let hp = self.fighter.as_mut()?.store_hp(value);
        if hp == 0 && self.ai.is_some() {
            Some(self.die())
        } else {
            None
        }
    }

    pub fn take_damage(&mut self, amount: i32) -> Option<Death> {
        let hp = self.fighter.as_ref()?.hp();
        self.set_hp(hp.saturating_sub(amount))
    }

    /// Restores up to `amount` hit points and returns how many were recovered.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let Some(fighter) = self.fighter.as_mut() else {
            return 0;
        };
        if fighter.is_at_full_health() {
            return 0;
        }

        let before = fighter.hp();
        let after = fighter.store_hp(before.saturating_add(amount).min(fighter.max_hp));
        after - before
    }

    fn die(&mut self) -> Death {
        let death = Death {
            entity: self.id,
            name: self.name.clone(),
        };

        self.glyph = '%';
        self.color = palette::CORPSE;
        self.blocks_movement = false;
        self.ai = None;
        self.name = format!("remains of {}", death.name);
        self.render_order = RenderOrder::Corpse;

        death
    }
}
