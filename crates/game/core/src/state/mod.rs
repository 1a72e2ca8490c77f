//! Authoritative game state representation.
//!
//! This module owns the data structures that describe actors, their
//! components, items, and the map they live on. Actions mutate it through
//! [`crate::Engine`].
mod actor;
mod common;
mod fighter;
mod inventory;
mod item;
mod map;

pub use actor::{ActorState, Ai, Death, RenderOrder};
pub use common::{DIRECTIONS, EntityId, Position};
pub use fighter::Fighter;
pub use inventory::Inventory;
pub use item::{Consumable, ItemState};
pub use map::{GameMap, MapError, TerrainKind};
