//! Action domain.
//!
//! An [`Action`] is one discrete intent of one actor: step, attack, pick
//! something up, use an item. Each variant is a small transition type that
//! validates against the engine and then mutates it, reporting whether the
//! game clock should advance.

mod combat;
pub mod effect;
mod inventory;
mod item;
mod movement;

pub use combat::{BumpAction, MeleeAction};
pub use effect::UseRequest;
pub use inventory::{DropAction, PickupAction};
pub use item::ItemAction;
pub use movement::MovementAction;

use crate::engine::Engine;
use crate::error::ActionError;
use crate::state::{EntityId, Position};

/// Describes how a concrete action mutates the engine.
///
/// `validate` must not mutate anything. `apply` may assume validation passed
/// and returns `true` when the action consumed a turn.
pub trait ActionTransition {
    /// Checks pre-conditions against the state **before** mutation.
    fn validate(&self, _engine: &Engine) -> Result<(), ActionError> {
        Ok(())
    }

    /// Mutates the engine and reports whether a turn passed.
    fn apply(&self, engine: &mut Engine) -> Result<bool, ActionError>;
}

/// Runs a transition through validation and application.
#[inline]
fn drive_transition<T>(transition: &T, engine: &mut Engine) -> Result<bool, ActionError>
where
    T: ActionTransition,
{
    transition.validate(engine)?;
    transition.apply(engine)
}

/// An acting entity plus a one-tile direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub entity: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl Heading {
    pub fn new(entity: EntityId, dx: i32, dy: i32) -> Self {
        Self { entity, dx, dy }
    }

    /// Tile the heading points at, relative to the entity's current position.
    pub fn destination(&self, engine: &Engine) -> Result<Position, ActionError> {
        Ok(engine.actor(self.entity)?.position.offset(self.dx, self.dy))
    }
}

/// One game intent, consumed by [`Engine::handle_action`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Leave the game.
    Exit,
    /// Skip a turn.
    Wait(EntityId),
    /// Attack whatever stands in the way, else move.
    Bump(BumpAction),
    Movement(MovementAction),
    Melee(MeleeAction),
    Pickup(PickupAction),
    Drop(DropAction),
    Item(ItemAction),
}

impl Action {
    pub fn wait(entity: EntityId) -> Self {
        Self::Wait(entity)
    }

    pub fn bump(entity: EntityId, dx: i32, dy: i32) -> Self {
        Self::Bump(BumpAction(Heading::new(entity, dx, dy)))
    }

    pub fn movement(entity: EntityId, dx: i32, dy: i32) -> Self {
        Self::Movement(MovementAction(Heading::new(entity, dx, dy)))
    }

    pub fn melee(entity: EntityId, dx: i32, dy: i32) -> Self {
        Self::Melee(MeleeAction(Heading::new(entity, dx, dy)))
    }

    pub fn pickup(entity: EntityId) -> Self {
        Self::Pickup(PickupAction { entity })
    }

    pub fn drop_item(entity: EntityId, item: EntityId) -> Self {
        Self::Drop(DropAction { entity, item })
    }

    /// Uses an item, targeting the user's own tile when `target` is `None`.
    pub fn use_item(entity: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self::Item(ItemAction {
            entity,
            item,
            target,
        })
    }

    /// Executes the action. `Ok(true)` means a turn passed.
    pub fn perform(&self, engine: &mut Engine) -> Result<bool, ActionError> {
        match self {
            Self::Exit => Err(ActionError::Exit),
            Self::Wait(_) => Ok(true),
            Self::Bump(action) => drive_transition(action, engine),
            Self::Movement(action) => drive_transition(action, engine),
            Self::Melee(action) => drive_transition(action, engine),
            Self::Pickup(action) => drive_transition(action, engine),
            Self::Drop(action) => drive_transition(action, engine),
            Self::Item(action) => drive_transition(action, engine),
        }
    }
}
