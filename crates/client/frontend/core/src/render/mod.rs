//! Render requests issued against an abstract [`Console`].
//!
//! Every handler draws the main game view first and then its own overlay.

mod console;
mod game;
mod overlay;

pub use console::{Cell, CellBuffer, Console, Frame};
pub use game::{
    BAR_WIDTH, MAP_HEIGHT, MAP_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH, render_bar, render_main,
    render_messages, wrap,
};

use delve_core::Engine;

use crate::handler::EventHandler;

/// Draws the full view for the active handler.
pub fn render(console: &mut dyn Console, engine: &Engine, handler: &EventHandler) {
    render_main(console, engine);

    match handler {
        EventHandler::MainGame | EventHandler::GameOver => {}
        EventHandler::Inventory(mode) => overlay::inventory_menu(console, engine, mode.title()),
        EventHandler::Select(mode) => overlay::selection(console, engine, *mode),
        EventHandler::HistoryViewer(cursor) => overlay::history(console, engine, cursor.cursor()),
    }
}
