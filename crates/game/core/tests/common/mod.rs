#![allow(dead_code)]

use delve_core::{
    ActorState, Ai, Consumable, Engine, EntityId, Fighter, GameConfig, GameMap, Inventory,
    ItemState, Position, TurnHooks, palette,
};

pub const PLAYER_START: Position = Position::new(3, 3);

/// A 10x8 walled room, everything visible, player at (3, 3).
pub fn world() -> Engine {
    let mut map = GameMap::from_ascii(&[
        "##########",
        "#........#",
        "#........#",
        "#........#",
        "#........#",
        "#........#",
        "#........#",
        "##########",
    ])
    .unwrap();

    let player = map.allocate_id();
    map.spawn_actor(
        ActorState::new(player, "Player", '@', palette::WHITE, PLAYER_START)
            .with_fighter(Fighter::new(30, 2, 5))
            .with_inventory(Inventory::new(GameConfig::DEFAULT_PLAYER_INVENTORY_CAPACITY))
            .with_ai(Ai::Controlled),
    );
    map.replace_visibility(vec![true; (map.width() * map.height()) as usize])
        .unwrap();

    Engine::new(map, player, GameConfig::default()).unwrap()
}

pub fn spawn_orc(engine: &mut Engine, position: Position, hp: i32, defense: i32, power: i32) -> EntityId {
    let id = engine.map.allocate_id();
    engine.map.spawn_actor(
        ActorState::new(id, "Orc", 'o', palette::WHITE, position)
            .with_fighter(Fighter::new(hp, defense, power))
            .with_ai(Ai::Hostile),
    )
}

/// Puts a new item into `owner`'s inventory and returns its id.
pub fn give(engine: &mut Engine, owner: EntityId, name: &str, consumable: Consumable) -> EntityId {
    let id = engine.map.allocate_id();
    let item = ItemState::new(id, name, '!', palette::WHITE, consumable);
    engine
        .actor_mut(owner)
        .unwrap()
        .inventory
        .as_mut()
        .unwrap()
        .push(item);
    id
}

pub fn place(engine: &mut Engine, position: Position, name: &str, consumable: Consumable) -> EntityId {
    let id = engine.map.allocate_id();
    engine
        .map
        .place_item(ItemState::new(id, name, '!', palette::WHITE, consumable).at(position))
}

pub fn hp(engine: &Engine, entity: EntityId) -> i32 {
    engine.actor(entity).unwrap().fighter.as_ref().unwrap().hp()
}

pub fn inventory_ids(engine: &Engine, owner: EntityId) -> Vec<EntityId> {
    engine
        .actor(owner)
        .unwrap()
        .inventory
        .as_ref()
        .unwrap()
        .items()
        .iter()
        .map(|item| item.id)
        .collect()
}

pub fn last_message(engine: &Engine) -> Option<String> {
    engine
        .message_log
        .last()
        .map(|message| message.full_text().into_owned())
}

pub fn potion() -> Consumable {
    Consumable::Healing { amount: 10 }
}

/// Records the order in which the driver calls back.
#[derive(Default)]
pub struct RecordingHooks {
    pub calls: Vec<&'static str>,
}

impl TurnHooks for RecordingHooks {
    fn handle_enemy_turns(&mut self, _engine: &mut Engine) {
        self.calls.push("enemies");
    }

    fn update_fov(&mut self, _engine: &mut Engine) {
        self.calls.push("fov");
    }
}
