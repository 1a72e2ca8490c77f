//! Frontend-agnostic presentation layer.
//!
//! Turns raw [`InputEvent`]s into game actions through the handler state
//! machine and describes each mode's view as draw calls on a [`Console`].
//! Concrete frontends only translate device events and display cells.
pub mod bindings;
pub mod config;
pub mod handler;
pub mod input;
pub mod machine;
pub mod render;

pub use config::{CursorAcceleration, InputConfig, ModifierPolicy, ParsePolicyError};
pub use handler::{Dispatch, EventHandler, HistoryCursor, InventoryMode, SelectMode};
pub use input::{InputEvent, Key, Modifiers, MouseButton};
pub use machine::ModeMachine;
pub use render::{CellBuffer, Console, Frame};
