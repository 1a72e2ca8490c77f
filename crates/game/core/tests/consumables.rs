mod common;

use common::{PLAYER_START, give, hp, inventory_ids, last_message, potion, spawn_orc, world};
use delve_core::{Action, ActionError, Ai, Consumable, Position, UseRequest, palette};

fn lightning(max_range: i32) -> Consumable {
    Consumable::LightningDamage {
        damage: 20,
        max_range,
    }
}

fn reason(result: Result<bool, ActionError>) -> String {
    match result {
        Err(ActionError::Impossible(impossible)) => impossible.message().to_owned(),
        other => panic!("expected an impossible action, got {other:?}"),
    }
}

fn wound(engine: &mut delve_core::Engine, amount: i32) {
    let player = engine.player_id();
    engine.apply_damage(player, amount).unwrap();
}

#[test]
fn healing_at_full_health_keeps_the_potion() {
    let mut engine = world();
    let player = engine.player_id();
    let item = give(&mut engine, player, "Health Potion", potion());

    let result = Action::use_item(player, item, None).perform(&mut engine);
    assert_eq!(reason(result), "Your health is already full.");
    assert_eq!(inventory_ids(&engine, player), vec![item]);
}

#[test]
fn healing_recovers_only_what_is_missing() {
    let mut engine = world();
    let player = engine.player_id();
    let item = give(&mut engine, player, "Health Potion", potion());
    wound(&mut engine, 4);

    assert_eq!(Action::use_item(player, item, None).perform(&mut engine), Ok(true));
    assert_eq!(hp(&engine, player), 30);
    assert!(inventory_ids(&engine, player).is_empty());
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("You consume the Health Potion, and recover 4 HP!")
    );
    assert_eq!(
        engine.message_log.last().map(|message| message.color),
        Some(palette::HEALTH_RECOVERED)
    );
}

#[test]
fn lightning_strikes_the_nearest_visible_enemy() {
    let mut engine = world();
    let player = engine.player_id();
    let far = spawn_orc(&mut engine, Position::new(8, 3), 30, 0, 3);
    let near = spawn_orc(&mut engine, Position::new(6, 3), 30, 0, 3);
    let item = give(&mut engine, player, "Lightning Scroll", lightning(6));

    assert_eq!(Action::use_item(player, item, None).perform(&mut engine), Ok(true));
    assert_eq!(hp(&engine, near), 10);
    assert_eq!(hp(&engine, far), 30);
    assert!(inventory_ids(&engine, player).is_empty());
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("A lightning bolt strikes the Orc with a loud thunder, for 20 damage!")
    );
}

#[test]
fn lightning_range_is_inclusive() {
    let mut engine = world();
    let player = engine.player_id();
    let orc = spawn_orc(&mut engine, Position::new(6, 3), 30, 0, 3);
    let item = give(&mut engine, player, "Lightning Scroll", lightning(3));

    Action::use_item(player, item, None).perform(&mut engine).unwrap();
    assert_eq!(hp(&engine, orc), 10);
}

#[test]
fn lightning_without_enemy_in_range_keeps_the_scroll() {
    let mut engine = world();
    let player = engine.player_id();
    spawn_orc(&mut engine, Position::new(6, 3), 30, 0, 3);
    let item = give(&mut engine, player, "Lightning Scroll", lightning(2));

    let result = Action::use_item(player, item, None).perform(&mut engine);
    assert_eq!(reason(result), "No enemy is close enough to strike.");
    assert_eq!(inventory_ids(&engine, player), vec![item]);
}

#[test]
fn lightning_ignores_unseen_enemies() {
    let mut engine = world();
    let player = engine.player_id();
    let hidden = spawn_orc(&mut engine, Position::new(4, 3), 30, 0, 3);
    let seen = spawn_orc(&mut engine, Position::new(6, 3), 30, 0, 3);
    engine.map.set_visible(Position::new(4, 3), false);
    let item = give(&mut engine, player, "Lightning Scroll", lightning(6));

    Action::use_item(player, item, None).perform(&mut engine).unwrap();
    assert_eq!(hp(&engine, hidden), 30);
    assert_eq!(hp(&engine, seen), 10);
}

#[test]
fn lightning_ties_go_to_the_first_actor_found() {
    let mut engine = world();
    let player = engine.player_id();
    let first = spawn_orc(&mut engine, Position::new(3, 6), 30, 0, 3);
    let second = spawn_orc(&mut engine, Position::new(6, 3), 30, 0, 3);
    let item = give(&mut engine, player, "Lightning Scroll", lightning(5));

    Action::use_item(player, item, None).perform(&mut engine).unwrap();
    assert_eq!(hp(&engine, first), 10);
    assert_eq!(hp(&engine, second), 30);
}

#[test]
fn confusion_replaces_the_target_ai() {
    let mut engine = world();
    let player = engine.player_id();
    let target = Position::new(5, 5);
    let orc = spawn_orc(&mut engine, target, 10, 0, 3);
    let item = give(
        &mut engine,
        player,
        "Confusion Scroll",
        Consumable::Confusion { turns: 10 },
    );

    assert_eq!(
        Action::use_item(player, item, Some(target)).perform(&mut engine),
        Ok(true)
    );
    assert_eq!(
        engine.actor(orc).unwrap().ai,
        Some(Ai::Confused {
            previous: Box::new(Ai::Hostile),
            turns_remaining: 10,
        })
    );
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("The eyes of the Orc look vacant, as it starts to stumble around!")
    );
    assert!(inventory_ids(&engine, player).is_empty());
}

#[test]
fn confusion_rejects_bad_targets() {
    let mut engine = world();
    let player = engine.player_id();
    let hidden = Position::new(7, 6);
    engine.map.set_visible(hidden, false);
    let item = give(
        &mut engine,
        player,
        "Confusion Scroll",
        Consumable::Confusion { turns: 10 },
    );

    let cases = [
        (hidden, "You cannot target an area that you cannot see."),
        (Position::new(5, 5), "You must select an enemy to target."),
        (PLAYER_START, "You cannot confuse yourself!"),
    ];
    for (target, expected) in cases {
        let result = Action::use_item(player, item, Some(target)).perform(&mut engine);
        assert_eq!(reason(result), expected);
    }
    assert_eq!(inventory_ids(&engine, player), vec![item]);
}

#[test]
fn fireball_hits_everyone_in_the_radius() {
    let mut engine = world();
    let player = engine.player_id();
    let center = Position::new(6, 5);
    let inside = spawn_orc(&mut engine, Position::new(7, 6), 20, 0, 3);
    let edge = spawn_orc(&mut engine, Position::new(6, 3), 20, 0, 3);
    let outside = spawn_orc(&mut engine, Position::new(8, 1), 20, 0, 3);
    let item = give(
        &mut engine,
        player,
        "Fireball Scroll",
        Consumable::Fireball {
            damage: 12,
            radius: 2,
        },
    );

    assert_eq!(
        Action::use_item(player, item, Some(center)).perform(&mut engine),
        Ok(true)
    );
    assert_eq!(hp(&engine, inside), 8);
    assert_eq!(hp(&engine, edge), 8);
    assert_eq!(hp(&engine, outside), 20);
    assert_eq!(hp(&engine, player), 30);
    assert_eq!(
        last_message(&engine).as_deref(),
        Some("The Orc is engulfed in a fiery explosion, taking 12 damage! (x2)")
    );
}

#[test]
fn fireball_with_nobody_in_range_fails() {
    let mut engine = world();
    let player = engine.player_id();
    let item = give(
        &mut engine,
        player,
        "Fireball Scroll",
        Consumable::Fireball {
            damage: 12,
            radius: 1,
        },
    );

    let result = Action::use_item(player, item, Some(Position::new(7, 6))).perform(&mut engine);
    assert_eq!(reason(result), "There are no targets in the radius.");
    assert_eq!(inventory_ids(&engine, player), vec![item]);
}

#[test]
fn use_request_depends_on_targeting() {
    let player = delve_core::EntityId(1);
    let item = delve_core::EntityId(2);

    assert_eq!(
        potion().use_request(player, item),
        UseRequest::Immediate(Action::use_item(player, item, None))
    );
    assert!(matches!(
        lightning(5).use_request(player, item),
        UseRequest::Immediate(_)
    ));
    assert_eq!(
        Consumable::Confusion { turns: 3 }.use_request(player, item),
        UseRequest::SelectTarget
    );
    assert_eq!(
        Consumable::Fireball {
            damage: 12,
            radius: 3
        }
        .use_request(player, item),
        UseRequest::SelectArea { radius: 3 }
    );
}

#[test]
fn using_an_item_not_held_is_fatal() {
    let mut engine = world();
    let player = engine.player_id();
    let stray = delve_core::EntityId(99);

    assert_eq!(
        Action::use_item(player, stray, None).perform(&mut engine),
        Err(ActionError::ItemNotFound {
            owner: player,
            item: stray
        })
    );
}
