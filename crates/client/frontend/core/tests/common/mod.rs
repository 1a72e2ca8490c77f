#![allow(dead_code)]

use delve_core::{
    ActorState, Ai, Consumable, Engine, EntityId, Fighter, GameConfig, GameMap, Inventory,
    ItemState, Position, TurnHooks, palette,
};

pub const PLAYER_START: Position = Position::new(3, 3);

/// 12x8 walled room, all visible, player at (3, 3).
pub fn world() -> Engine {
    let mut map = GameMap::from_ascii(&[
        "############",
        "#..........#",
        "#..........#",
        "#..........#",
        "#..........#",
        "#..........#",
        "#..........#",
        "############",
    ])
    .unwrap();

    let player = map.allocate_id();
    map.spawn_actor(
        ActorState::new(player, "Player", '@', palette::WHITE, PLAYER_START)
            .with_fighter(Fighter::new(30, 2, 5))
            .with_inventory(Inventory::new(26))
            .with_ai(Ai::Controlled),
    );
    map.replace_visibility(vec![true; (map.width() * map.height()) as usize])
        .unwrap();

    Engine::new(map, player, GameConfig::default()).unwrap()
}

pub fn spawn_orc(engine: &mut Engine, position: Position) -> EntityId {
    let id = engine.map.allocate_id();
    engine.map.spawn_actor(
        ActorState::new(id, "Orc", 'o', palette::WHITE, position)
            .with_fighter(Fighter::new(10, 0, 3))
            .with_ai(Ai::Hostile),
    )
}

pub fn give(engine: &mut Engine, name: &str, consumable: Consumable) -> EntityId {
    let id = engine.map.allocate_id();
    let player = engine.player_id();
    engine
        .actor_mut(player)
        .unwrap()
        .inventory
        .as_mut()
        .unwrap()
        .push(ItemState::new(id, name, '!', palette::WHITE, consumable));
    id
}

pub fn held(engine: &Engine) -> usize {
    engine.player().unwrap().inventory.as_ref().unwrap().len()
}

pub fn last_message(engine: &Engine) -> Option<String> {
    engine
        .message_log
        .last()
        .map(|message| message.full_text().into_owned())
}

#[derive(Default)]
pub struct CountingHooks {
    pub turns: usize,
}

impl TurnHooks for CountingHooks {
    fn handle_enemy_turns(&mut self, _engine: &mut Engine) {
        self.turns += 1;
    }

    fn update_fov(&mut self, _engine: &mut Engine) {}
}

/// Enemy sweep that kills the player outright.
pub struct LethalHooks;

impl TurnHooks for LethalHooks {
    fn handle_enemy_turns(&mut self, engine: &mut Engine) {
        let player = engine.player_id();
        engine.apply_damage(player, 1_000).unwrap();
    }

    fn update_fov(&mut self, _engine: &mut Engine) {}
}
