//! Glue code tying the engine, the handler state machine and the terminal
//! together.
use anyhow::{Context, Result};
use crossterm::event;

use delve_core::{ActionError, Engine, TurnHooks};
use delve_frontend::render::{SCREEN_HEIGHT, SCREEN_WIDTH};
use delve_frontend::{CellBuffer, InputEvent, ModeMachine};

use crate::config::CliConfig;
use crate::console::ConsoleView;
use crate::input;
use crate::scenario;
use crate::terminal::Tui;
use crate::world::WorldHooks;

/// One game session.
pub struct App {
    engine: Engine,
    machine: ModeMachine,
    hooks: WorldHooks,
    console: CellBuffer,
}

impl App {
    /// Starts a session in the built-in dungeon.
    pub fn new(config: &CliConfig) -> Result<Self> {
        let engine = scenario::build(&config.game).context("building the starting dungeon")?;
        Ok(Self::with_engine(engine, config))
    }

    /// Starts a session around an existing engine, computing the opening
    /// field of view.
    pub fn with_engine(mut engine: Engine, config: &CliConfig) -> Self {
        let mut hooks = WorldHooks::new(config.fov_radius, config.seed);
        hooks.update_fov(&mut engine);

        Self {
            engine,
            machine: ModeMachine::new(config.input.clone()),
            hooks,
            console: CellBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn machine(&self) -> &ModeMachine {
        &self.machine
    }

    pub fn console(&self) -> &CellBuffer {
        &self.console
    }

    /// Feeds one input event through the active handler.
    ///
    /// Returns `Ok(false)` once the player asked to leave. Errors other than
    /// the exit request mean the session state is broken and end the game.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<bool> {
        match self
            .machine
            .handle_event(event, &mut self.engine, &mut self.hooks)
        {
            Ok(_) => Ok(true),
            Err(ActionError::Exit) => Ok(false),
            Err(error) => Err(anyhow::Error::new(error).context("game session aborted")),
        }
    }

    /// Redraws the whole console from the current state.
    pub fn redraw(&mut self) {
        self.console.clear();
        self.machine.render(&mut self.console, &self.engine);
    }

    /// Blocks on terminal input until the player quits.
    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        tracing::info!("session started");

        loop {
            self.redraw();
            terminal.draw(|frame| frame.render_widget(ConsoleView::new(&self.console), frame.area()))?;

            let raw = event::read()?;
            let Some(input) = input::translate(&raw) else {
                continue;
            };
            if !self.handle_input(&input)? {
                break;
            }
        }

        tracing::info!(
            mode = self.machine.handler().name(),
            messages = self.engine.message_log.len(),
            "session ended"
        );
        Ok(())
    }
}
