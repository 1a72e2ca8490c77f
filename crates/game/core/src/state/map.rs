//! Tile grid plus every entity standing on it.

use super::{ActorState, EntityId, ItemState, Position};

/// Canonical terrain classes for map tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    Floor,
    Wall,
}

impl TerrainKind {
    pub fn is_walkable(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }

    pub fn is_transparent(self) -> bool {
        matches!(self, TerrainKind::Floor)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile glyph {glyph:?} at {position}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("visibility grid has {found} cells, expected {expected}")]
    GridSizeMismatch { expected: usize, found: usize },
}

/// The playing field: terrain, what the player can see, and all entities.
///
/// Actors (the player included) and ground items are owned here. Items move
/// into an [`super::Inventory`] by being taken out of this map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMap {
    width: i32,
    height: i32,
    tiles: Vec<TerrainKind>,
    visible: Vec<bool>,
    explored: Vec<bool>,
    actors: Vec<ActorState>,
    items: Vec<ItemState>,
    next_entity_id: u32,
}

impl GameMap {
    /// Creates a map filled with a single terrain.
    pub fn new(width: i32, height: i32, fill: TerrainKind) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = (width * height) as usize;
        Self {
            width,
            height,
            tiles: vec![fill; cells],
            visible: vec![false; cells],
            explored: vec![false; cells],
            actors: Vec::new(),
            items: Vec::new(),
            next_entity_id: 1,
        }
    }

    /// Builds terrain from text rows, `#` for walls and `.` for floor.
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let width = first.as_ref().chars().count();

        let mut map = Self::new(width as i32, rows.len() as i32, TerrainKind::Wall);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                let terrain = match glyph {
                    '#' => TerrainKind::Wall,
                    '.' => TerrainKind::Floor,
                    _ => return Err(MapError::UnknownGlyph { glyph, position }),
                };
                map.set_terrain(position, terrain);
            }
        }

        Ok(map)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.in_bounds(position)
            .then(|| (position.y * self.width + position.x) as usize)
    }

    // ===== terrain =====

    pub fn terrain(&self, position: Position) -> Option<TerrainKind> {
        self.index(position).map(|index| self.tiles[index])
    }

    pub fn set_terrain(&mut self, position: Position, terrain: TerrainKind) {
        if let Some(index) = self.index(position) {
            self.tiles[index] = terrain;
        }
    }

    /// Out-of-bounds tiles are never walkable.
    pub fn is_walkable(&self, position: Position) -> bool {
        self.terrain(position).is_some_and(TerrainKind::is_walkable)
    }

    pub fn is_transparent(&self, position: Position) -> bool {
        self.terrain(position)
            .is_some_and(TerrainKind::is_transparent)
    }

    // ===== visibility =====

    pub fn visible(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.visible[index])
    }

    pub fn explored(&self, position: Position) -> bool {
        self.index(position).is_some_and(|index| self.explored[index])
    }

    /// Marks a tile as (in)visible; visible tiles become explored.
    pub fn set_visible(&mut self, position: Position, visible: bool) {
        if let Some(index) = self.index(position) {
            self.visible[index] = visible;
            self.explored[index] |= visible;
        }
    }

    /// Replaces the whole visibility grid (row-major, `width * height` cells).
    pub fn replace_visibility(&mut self, visible: Vec<bool>) -> Result<(), MapError> {
        if visible.len() != self.tiles.len() {
            return Err(MapError::GridSizeMismatch {
                expected: self.tiles.len(),
                found: visible.len(),
            });
        }

        for (explored, &seen) in self.explored.iter_mut().zip(&visible) {
            *explored |= seen;
        }
        self.visible = visible;
        Ok(())
    }

    // ===== entities =====

    /// Allocates a new unique EntityId. Ids are never reused.
    pub fn allocate_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }

    pub fn spawn_actor(&mut self, actor: ActorState) -> EntityId {
        let id = actor.id;
        self.bump_allocator(id);
        self.actors.push(actor);
        id
    }

    /// Puts an item on the ground at its own position.
    pub fn place_item(&mut self, item: ItemState) -> EntityId {
        let id = item.id;
        self.bump_allocator(id);
        self.items.push(item);
        id
    }

    /// Removes an item from the ground, handing ownership to the caller.
    pub fn take_item(&mut self, item: EntityId) -> Option<ItemState> {
        let index = self.items.iter().position(|ground| ground.id == item)?;
        Some(self.items.remove(index))
    }

    fn bump_allocator(&mut self, id: EntityId) {
        if id.0 >= self.next_entity_id {
            self.next_entity_id = id.0 + 1;
        }
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.actors.iter_mut().find(|actor| actor.id == id)
    }

    /// All actors, dead or alive, in spawn order.
    pub fn actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter()
    }

    /// Living actors in spawn order.
    pub fn living_actors(&self) -> impl Iterator<Item = &ActorState> {
        self.actors.iter().filter(|actor| actor.is_alive())
    }

    /// Ground items in placement order.
    pub fn items(&self) -> impl Iterator<Item = &ItemState> {
        self.items.iter()
    }

    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &ItemState> {
        self.items
            .iter()
            .filter(move |item| item.position == position)
    }

    /// First entity at `position` that blocks movement.
    pub fn blocking_entity_at(&self, position: Position) -> Option<EntityId> {
        self.actors
            .iter()
            .find(|actor| actor.blocks_movement && actor.position == position)
            .map(|actor| actor.id)
    }

    /// First living actor at `position`.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.living_actors().find(|actor| actor.position == position)
    }

    /// Names of every actor and item at `position`, actors first.
    pub fn names_at(&self, position: Position) -> Vec<&str> {
        self.actors
            .iter()
            .filter(|actor| actor.position == position)
            .map(|actor| actor.name.as_str())
            .chain(self.items_at(position).map(|item| item.name.as_str()))
            .collect()
    }
}
