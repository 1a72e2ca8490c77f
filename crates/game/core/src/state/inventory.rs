//! Inventory component for actors.

use super::{EntityId, ItemState};

/// Ordered item storage owned by one actor.
///
/// Insertion order is display order. `capacity` is checked by the pickup rule,
/// not by the container itself, so setup code may overfill it.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub capacity: usize,
    items: Vec<ItemState>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn items(&self) -> &[ItemState] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Item shown at the given menu slot.
    pub fn get(&self, slot: usize) -> Option<&ItemState> {
        self.items.get(slot)
    }

    pub fn find(&self, item: EntityId) -> Option<&ItemState> {
        self.items.iter().find(|held| held.id == item)
    }

    pub fn contains(&self, item: EntityId) -> bool {
        self.find(item).is_some()
    }

    /// Appends an item at the end of the list.
    pub fn push(&mut self, item: ItemState) {
        self.items.push(item);
    }

    /// Removes and returns an item, keeping the order of the rest.
    pub fn remove(&mut self, item: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|held| held.id == item)?;
        Some(self.items.remove(index))
    }
}
