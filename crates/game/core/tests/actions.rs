mod common;

use common::{PLAYER_START, give, hp, inventory_ids, last_message, place, potion, spawn_orc, world};
use delve_core::{Action, ActionError, ActorState, Ai, Fighter, Inventory, Position, palette};

fn reason(result: Result<bool, ActionError>) -> String {
    match result {
        Err(ActionError::Impossible(impossible)) => impossible.message().to_owned(),
        other => panic!("expected an impossible action, got {other:?}"),
    }
}

#[test]
fn movement_steps_onto_free_floor() {
    let mut engine = world();
    let player = engine.player_id();

    assert_eq!(Action::movement(player, 1, 1).perform(&mut engine), Ok(true));
    assert_eq!(engine.player().unwrap().position, Position::new(4, 4));
}

#[test]
fn every_rejected_move_names_its_cause() {
    let mut engine = world();
    let player = engine.player_id();
    spawn_orc(&mut engine, Position::new(4, 3), 10, 0, 3);

    let out_of_bounds = Action::movement(player, -10, 0).perform(&mut engine);
    assert_eq!(reason(out_of_bounds), "Destination is out of bounds.");
    assert_eq!(engine.player().unwrap().position, PLAYER_START);

    engine.actor_mut(player).unwrap().position = Position::new(1, 1);
    let wall = Action::movement(player, -1, 0).perform(&mut engine);
    assert_eq!(reason(wall), "Destination is blocked by a tile.");
    assert_eq!(engine.player().unwrap().position, Position::new(1, 1));

    engine.actor_mut(player).unwrap().position = PLAYER_START;
    let occupied = Action::movement(player, 1, 0).perform(&mut engine);
    assert_eq!(reason(occupied), "Destination is blocked by an entity.");
    assert_eq!(engine.player().unwrap().position, PLAYER_START);
}

#[test]
fn bump_into_actor_always_attacks() {
    let mut engine = world();
    let player = engine.player_id();
    let orc = spawn_orc(&mut engine, Position::new(4, 3), 10, 0, 3);

    assert_eq!(Action::bump(player, 1, 0).perform(&mut engine), Ok(true));
    assert_eq!(engine.player().unwrap().position, PLAYER_START);
    assert_eq!(hp(&engine, orc), 5);
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("Player attacks Orc for 5 hit points.")
    );
}

#[test]
fn bump_into_empty_tile_moves() {
    let mut engine = world();
    let player = engine.player_id();

    assert_eq!(Action::bump(player, 0, -1).perform(&mut engine), Ok(true));
    assert_eq!(engine.player().unwrap().position, Position::new(3, 2));
}

#[test]
fn harmless_melee_still_takes_a_turn() {
    let mut engine = world();
    let player = engine.player_id();
    engine
        .actor_mut(player)
        .unwrap()
        .fighter
        .as_mut()
        .unwrap()
        .power = 10;
    let orc = spawn_orc(&mut engine, Position::new(4, 3), 10, 10, 3);

    assert_eq!(Action::melee(player, 1, 0).perform(&mut engine), Ok(true));
    assert_eq!(hp(&engine, orc), 10);
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("Player attacks Orc but does no damage.")
    );
    assert_eq!(engine.message_log.last().map(|m| m.color), Some(palette::PLAYER_ATK));
}

#[test]
fn melee_damage_is_power_minus_defense() {
    let mut engine = world();
    let player = engine.player_id();
    engine
        .actor_mut(player)
        .unwrap()
        .fighter
        .as_mut()
        .unwrap()
        .power = 15;
    let orc = spawn_orc(&mut engine, Position::new(4, 3), 20, 10, 3);

    Action::melee(player, 1, 0).perform(&mut engine).unwrap();
    assert_eq!(hp(&engine, orc), 15);
}

#[test]
fn melee_without_target_is_impossible() {
    let mut engine = world();
    let player = engine.player_id();
    assert_eq!(
        reason(Action::melee(player, 1, 0).perform(&mut engine)),
        "Nothing to attack."
    );
}

#[test]
fn monster_attacks_use_enemy_color() {
    let mut engine = world();
    let orc = spawn_orc(&mut engine, Position::new(4, 3), 10, 0, 4);

    Action::melee(orc, -1, 0).perform(&mut engine).unwrap();
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("Orc attacks Player for 2 hit points.")
    );
    assert_eq!(engine.message_log.last().map(|m| m.color), Some(palette::ENEMY_ATK));
}

#[test]
fn killed_monster_leaves_walkable_remains() {
    let mut engine = world();
    let player = engine.player_id();
    let orc = spawn_orc(&mut engine, Position::new(4, 3), 5, 0, 3);

    Action::bump(player, 1, 0).perform(&mut engine).unwrap();
    assert_eq!(last_message(&engine).as_deref(), Some("Orc is dead!"));
    assert_eq!(engine.actor(orc).unwrap().name, "remains of Orc");
    assert!(!engine.is_game_over());

    // Remains do not block, so the next bump walks over them.
    Action::bump(player, 1, 0).perform(&mut engine).unwrap();
    assert_eq!(engine.player().unwrap().position, Position::new(4, 3));
}

#[test]
fn pickup_requires_an_item_underfoot() {
    let mut engine = world();
    let player = engine.player_id();
    place(&mut engine, Position::new(5, 5), "Health Potion", potion());

    assert_eq!(
        reason(Action::pickup(player).perform(&mut engine)),
        "There is nothing here to pick up."
    );
}

#[test]
fn pickup_takes_first_item_in_placement_order() {
    let mut engine = world();
    let player = engine.player_id();
    let first = place(&mut engine, PLAYER_START, "Health Potion", potion());
    let second = place(&mut engine, PLAYER_START, "Lightning Scroll", potion());

    assert_eq!(Action::pickup(player).perform(&mut engine), Ok(true));
    assert_eq!(inventory_ids(&engine, player), vec![first]);
    assert_eq!(
        engine.map.items().map(|item| item.id).collect::<Vec<_>>(),
        vec![second]
    );
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("You picked up the Health Potion!")
    );
}

#[test]
fn full_inventory_blocks_player_pickup() {
    let mut engine = world();
    let player = engine.player_id();
    engine.actor_mut(player).unwrap().inventory = Some(Inventory::new(1));
    let held = give(&mut engine, player, "Health Potion", potion());
    let ground = place(&mut engine, PLAYER_START, "Health Potion", potion());

    assert_eq!(
        reason(Action::pickup(player).perform(&mut engine)),
        "Your inventory is full."
    );
    assert_eq!(inventory_ids(&engine, player), vec![held]);
    assert_eq!(engine.map.items().next().map(|item| item.id), Some(ground));
}

#[test]
fn full_inventory_silently_stops_monster_pickup() {
    let mut engine = world();
    let spot = Position::new(6, 6);
    let id = engine.map.allocate_id();
    engine.map.spawn_actor(
        ActorState::new(id, "Goblin", 'g', palette::WHITE, spot)
            .with_fighter(Fighter::new(5, 0, 1))
            .with_inventory(Inventory::new(1))
            .with_ai(Ai::Hostile),
    );
    give(&mut engine, id, "Health Potion", potion());
    place(&mut engine, spot, "Health Potion", potion());
    let logged = engine.message_log.len();

    assert_eq!(Action::pickup(id).perform(&mut engine), Ok(false));
    assert_eq!(engine.message_log.len(), logged);
    assert_eq!(engine.map.items().count(), 1);
}

#[test]
fn monster_pickup_is_silent() {
    let mut engine = world();
    let spot = Position::new(6, 6);
    let id = engine.map.allocate_id();
    engine.map.spawn_actor(
        ActorState::new(id, "Goblin", 'g', palette::WHITE, spot)
            .with_fighter(Fighter::new(5, 0, 1))
            .with_inventory(Inventory::new(2))
            .with_ai(Ai::Hostile),
    );
    let item = place(&mut engine, spot, "Health Potion", potion());

    assert_eq!(Action::pickup(id).perform(&mut engine), Ok(true));
    assert_eq!(inventory_ids(&engine, id), vec![item]);
    assert!(engine.message_log.is_empty());
}

#[test]
fn drop_then_pickup_appends_at_the_end() {
    let mut engine = world();
    let player = engine.player_id();
    let first = give(&mut engine, player, "Health Potion", potion());
    let second = give(&mut engine, player, "Lightning Scroll", potion());

    assert_eq!(Action::drop_item(player, first).perform(&mut engine), Ok(true));
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("You dropped the Health Potion.")
    );
    assert_eq!(inventory_ids(&engine, player), vec![second]);
    assert_eq!(
        engine.map.items_at(PLAYER_START).map(|item| item.id).collect::<Vec<_>>(),
        vec![first]
    );

    Action::pickup(player).perform(&mut engine).unwrap();
    assert_eq!(inventory_ids(&engine, player), vec![second, first]);
    assert_eq!(engine.map.items().count(), 0);
}

#[test]
fn dropping_an_item_not_held_is_a_contract_violation() {
    let mut engine = world();
    let player = engine.player_id();
    let ground = place(&mut engine, PLAYER_START, "Health Potion", potion());

    assert_eq!(
        Action::drop_item(player, ground).perform(&mut engine),
        Err(ActionError::ItemNotFound {
            owner: player,
            item: ground
        })
    );
}

#[test]
fn wait_and_exit() {
    let mut engine = world();
    let player = engine.player_id();

    assert_eq!(Action::wait(player).perform(&mut engine), Ok(true));
    assert_eq!(Action::Exit.perform(&mut engine), Err(ActionError::Exit));
}
