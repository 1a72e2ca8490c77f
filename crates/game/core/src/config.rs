/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of items the player can carry.
    pub player_inventory_capacity: usize,

    /// Number of messages kept in the log (oldest are dropped first).
    pub message_log_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Inventory slots addressable from the selection menus (`a` through `z`).
    pub const MAX_SELECTABLE_SLOTS: usize = 26;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_INVENTORY_CAPACITY: usize = Self::MAX_SELECTABLE_SLOTS;
    pub const DEFAULT_MESSAGE_LOG_CAPACITY: usize = 1024;

    pub fn new() -> Self {
        Self {
            player_inventory_capacity: Self::DEFAULT_PLAYER_INVENTORY_CAPACITY,
            message_log_capacity: Self::DEFAULT_MESSAGE_LOG_CAPACITY,
        }
    }

    pub fn with_player_inventory_capacity(mut self, capacity: usize) -> Self {
        self.player_inventory_capacity = capacity;
        self
    }

    pub fn with_message_log_capacity(mut self, capacity: usize) -> Self {
        self.message_log_capacity = capacity.max(1);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
