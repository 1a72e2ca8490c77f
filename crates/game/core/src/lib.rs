//! Turn-based roguelike rules shared across frontends.
//!
//! `delve-core` defines the canonical rules (actions, consumables, death, the
//! turn driver) and the state they act on. It performs no I/O: frontends feed
//! it [`Action`]s through [`Engine::handle_action`] and supply the enemy sweep
//! and field-of-view computation via [`TurnHooks`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod message;
pub mod palette;
pub mod state;

pub use action::{
    Action, ActionTransition, BumpAction, DropAction, Heading, ItemAction, MeleeAction,
    MovementAction, PickupAction, UseRequest,
};
pub use config::GameConfig;
pub use engine::{Engine, TurnHooks};
pub use error::{ActionError, ErrorSeverity, GameError, Impossible};
pub use message::{Message, MessageLog};
pub use palette::Color;
pub use state::{
    ActorState, Ai, Consumable, DIRECTIONS, Death, EntityId, Fighter, GameMap, Inventory,
    ItemState, MapError, Position, RenderOrder, TerrainKind,
};
