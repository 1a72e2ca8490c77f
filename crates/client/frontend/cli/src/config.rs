//! CLI-specific configuration, read from the environment.
use std::env;
use std::path::PathBuf;

use delve_core::GameConfig;
use delve_frontend::{CursorAcceleration, InputConfig, ModifierPolicy};

pub const DEFAULT_FOV_RADIUS: i32 = 8;

/// Everything the terminal client can be tuned with.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub game: GameConfig,
    pub input: InputConfig,
    /// Sight radius of the player, in tiles.
    pub fov_radius: i32,
    /// Seed for monster randomness. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Overrides the platform cache directory for log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            input: InputConfig::default(),
            fov_radius: DEFAULT_FOV_RADIUS,
            seed: None,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DELVE_FOV_RADIUS` - Sight radius in tiles (default: 8)
    /// - `DELVE_SEED` - Seed for the monster RNG (default: random)
    /// - `DELVE_CURSOR_POLICY` - `held` or `legacy` cursor acceleration
    /// - `DELVE_INVENTORY_CAPACITY` - Player inventory slots (at most 26)
    /// - `DELVE_MESSAGE_CAPACITY` - Messages kept in the log
    /// - `DELVE_LOG_DIR` - Directory for `delve.log`
    ///
    /// Malformed values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(radius) = parse::<i32>(read("DELVE_FOV_RADIUS")) {
            config.fov_radius = radius.max(1);
        }
        config.seed = parse(read("DELVE_SEED"));

        if let Some(policy) = parse::<ModifierPolicy>(read("DELVE_CURSOR_POLICY")) {
            config.input = InputConfig::new(CursorAcceleration::default().with_policy(policy));
        }
        if let Some(capacity) = parse::<usize>(read("DELVE_INVENTORY_CAPACITY")) {
            config.game = config
                .game
                .with_player_inventory_capacity(capacity.min(GameConfig::MAX_SELECTABLE_SLOTS));
        }
        if let Some(capacity) = parse::<usize>(read("DELVE_MESSAGE_CAPACITY")) {
            config.game = config.game.with_message_log_capacity(capacity);
        }
        config.log_dir = read("DELVE_LOG_DIR").map(PathBuf::from);

        config
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
