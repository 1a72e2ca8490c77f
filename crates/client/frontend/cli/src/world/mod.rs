//! Default collaborators of the turn driver.
pub mod ai;
pub mod visibility;

use delve_core::{Engine, GameError, TurnHooks};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Monster sweep and player field of view for the terminal client.
#[derive(Debug)]
pub struct WorldHooks {
    rng: StdRng,
    fov_radius: i32,
}

impl WorldHooks {
    /// A missing seed draws one from the operating system.
    pub fn new(fov_radius: i32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, fov_radius }
    }
}

impl TurnHooks for WorldHooks {
    fn handle_enemy_turns(&mut self, engine: &mut Engine) {
        ai::take_enemy_turns(engine, &mut self.rng);
    }

    fn update_fov(&mut self, engine: &mut Engine) {
        let origin = match engine.player() {
            Ok(player) => player.position,
            Err(error) => {
                tracing::warn!(code = error.error_code(), "cannot update field of view: {error}");
                return;
            }
        };

        let grid = visibility::compute(&engine.map, origin, self.fov_radius);
        if let Err(error) = engine.map.replace_visibility(grid) {
            tracing::warn!("field of view rejected: {error}");
        }
    }
}
