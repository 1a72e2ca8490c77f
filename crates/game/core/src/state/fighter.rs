/// Combat statistics owned by an actor.
///
/// `hp` is kept in `[0, max_hp]` by construction: the only way to change it
/// is through [`crate::ActorState::set_hp`] and friends, which clamp and then
/// decide whether the owner dies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    hp: i32,
    pub max_hp: i32,
    pub defense: i32,
    pub power: i32,
}

impl Fighter {
    /// Creates a fighter at full health.
    pub fn new(hp: i32, defense: i32, power: i32) -> Self {
        let max_hp = hp.max(0);
        Self {
            hp: max_hp,
            max_hp,
            defense,
            power,
        }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn is_at_full_health(&self) -> bool {
        self.hp == self.max_hp
    }

    /// Stores `value` clamped to `[0, max_hp]` and returns the stored value.
    pub(crate) fn store_hp(&mut self, value: i32) -> i32 {
        self.hp = value.clamp(0, self.max_hp);
        self.hp
    }
}
