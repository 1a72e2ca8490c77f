//! Collaborators the turn driver calls after a turn-consuming action.

use super::Engine;

/// World updates that run once per passed turn.
///
/// The driver always calls [`TurnHooks::handle_enemy_turns`] before
/// [`TurnHooks::update_fov`], and neither when no turn passed.
pub trait TurnHooks {
    /// Lets every non-player actor act once.
    fn handle_enemy_turns(&mut self, engine: &mut Engine);

    /// Recomputes the player's field of view.
    fn update_fov(&mut self, engine: &mut Engine);
}

/// Hooks that leave the world untouched.
impl TurnHooks for () {
    fn handle_enemy_turns(&mut self, _engine: &mut Engine) {}

    fn update_fov(&mut self, _engine: &mut Engine) {}
}
