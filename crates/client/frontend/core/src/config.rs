//! Frontend configuration structures.

use std::str::FromStr;

use crate::input::Modifiers;

/// Input tuning shared by every frontend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputConfig {
    pub cursor: CursorAcceleration,
}

impl InputConfig {
    pub const fn new(cursor: CursorAcceleration) -> Self {
        Self { cursor }
    }
}

/// How held modifier keys combine into a cursor speed multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModifierPolicy {
    /// Each held modifier group contributes its own factor.
    #[default]
    HeldOnly,
    /// Any held modifier applies every factor at once.
    AnyAppliesAll,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown modifier policy {0:?} (expected \"held\" or \"legacy\")")]
pub struct ParsePolicyError(String);

impl FromStr for ModifierPolicy {
    type Err = ParsePolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "held" | "held_only" => Ok(Self::HeldOnly),
            "legacy" | "any" | "any_applies_all" => Ok(Self::AnyAppliesAll),
            other => Err(ParsePolicyError(other.to_owned())),
        }
    }
}

/// Cursor step multipliers used while selecting a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorAcceleration {
    pub shift: i32,
    pub ctrl: i32,
    pub alt: i32,
    pub policy: ModifierPolicy,
}

impl Default for CursorAcceleration {
    fn default() -> Self {
        Self {
            shift: 5,
            ctrl: 10,
            alt: 20,
            policy: ModifierPolicy::default(),
        }
    }
}

impl CursorAcceleration {
    pub fn with_policy(mut self, policy: ModifierPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Number of tiles one cursor key press moves.
    pub fn multiplier(&self, modifiers: Modifiers) -> i32 {
        if modifiers.is_empty() {
            return 1;
        }

        match self.policy {
            ModifierPolicy::AnyAppliesAll => self.shift * self.ctrl * self.alt,
            ModifierPolicy::HeldOnly => [
                (Modifiers::SHIFT, self.shift),
                (Modifiers::CTRL, self.ctrl),
                (Modifiers::ALT, self.alt),
            ]
            .into_iter()
            .filter(|(group, _)| modifiers.intersects(*group))
            .map(|(_, factor)| factor)
            .product(),
        }
    }
}
