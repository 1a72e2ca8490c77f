//! Terminal frontend for the delve roguelike.
//!
//! The binary owns everything the rules crate leaves to its collaborators:
//! the crossterm event source, the ratatui surface the console is blitted
//! onto, monster behaviour, field of view and the starting dungeon.

pub mod app;
pub mod config;
pub mod console;
pub mod input;
pub mod logging;
pub mod scenario;
pub mod terminal;
pub mod world;

pub use app::App;
pub use config::CliConfig;
pub use world::WorldHooks;
