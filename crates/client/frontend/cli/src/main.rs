//! Terminal client entry point.
use anyhow::Result;

use delve_cli::{App, CliConfig, logging, terminal};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _log_guard = logging::init(config.log_dir.as_deref())?;

    let app = App::new(&config)?;

    let mut tui = terminal::init()?;
    let guard = terminal::TerminalGuard;
    let result = app.run(&mut tui);
    drop(guard);

    if let Err(error) = &result {
        tracing::error!("{error:#}");
    }
    result
}
