//! Monster behaviour run during the enemy sweep.
use delve_core::{
    Action, ActionError, Ai, DIRECTIONS, Engine, EntityId, GameError, Position, palette,
};
use rand::Rng;

/// Lets every living non-player actor act once, in map order.
///
/// Impossible moves cost the monster its turn and nothing else; any other
/// failure is logged and the sweep carries on with the next monster.
pub fn take_enemy_turns<R: Rng + ?Sized>(engine: &mut Engine, rng: &mut R) {
    let monsters: Vec<EntityId> = engine
        .map
        .living_actors()
        .map(|actor| actor.id)
        .filter(|&id| !engine.is_player(id))
        .collect();

    for monster in monsters {
        match take_turn(engine, monster, rng) {
            Ok(()) | Err(ActionError::Impossible(_)) => {}
            Err(error) => tracing::warn!(
                %monster,
                code = error.error_code(),
                "monster turn failed: {error}"
            ),
        }
    }
}

fn take_turn<R: Rng + ?Sized>(
    engine: &mut Engine,
    monster: EntityId,
    rng: &mut R,
) -> Result<(), ActionError> {
    // Killed earlier in this sweep.
    let Some(ai) = engine.map.actor(monster).and_then(|actor| actor.ai.clone()) else {
        return Ok(());
    };

    let action = match ai {
        Ai::Controlled => return Ok(()),
        Ai::Hostile => hostile_action(engine, monster)?,
        Ai::Confused {
            previous,
            turns_remaining,
        } => match confused_action(engine, monster, *previous, turns_remaining, rng)? {
            Some(action) => action,
            None => return Ok(()),
        },
    };

    tracing::trace!(%monster, ?action, "monster acts");
    action.perform(engine).map(|_| ())
}

/// Attacks when adjacent, closes in when its tile is in view, otherwise waits.
fn hostile_action(engine: &Engine, monster: EntityId) -> Result<Action, ActionError> {
    let position = engine.actor(monster)?.position;
    if !engine.map.visible(position) {
        return Ok(Action::wait(monster));
    }

    let target = engine.player()?.position;
    let (dx, dy) = (target.x - position.x, target.y - position.y);
    if position.chebyshev(target) <= 1 {
        return Ok(Action::melee(monster, dx, dy));
    }

    Ok(match chase_step(engine, position, target) {
        Some(step) => Action::movement(monster, step.x - position.x, step.y - position.y),
        None => Action::wait(monster),
    })
}

/// Free neighbouring tile that brings `from` closest to `target`, if any
/// neighbour is closer than `from` itself. Ties go to the first neighbour
/// clockwise from north-west.
pub fn chase_step(engine: &Engine, from: Position, target: Position) -> Option<Position> {
    let current = from.distance(target);
    from.neighbors()
        .into_iter()
        .filter(|&step| engine.map.is_walkable(step) && engine.map.blocking_entity_at(step).is_none())
        .map(|step| (step, step.distance(target)))
        .filter(|&(_, distance)| distance < current)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(step, _)| step)
}

/// Stumbles in a random direction, or recovers once the confusion ran out.
fn confused_action<R: Rng + ?Sized>(
    engine: &mut Engine,
    monster: EntityId,
    previous: Ai,
    turns_remaining: u32,
    rng: &mut R,
) -> Result<Option<Action>, ActionError> {
    let actor = engine.actor_mut(monster)?;
    if turns_remaining == 0 {
        actor.ai = Some(previous);
        let message = format!("The {} is no longer confused.", actor.name);
        engine.message_log.add_message(message, palette::WHITE);
        return Ok(None);
    }

    actor.ai = Some(Ai::Confused {
        previous: Box::new(previous),
        turns_remaining: turns_remaining - 1,
    });
    let (dx, dy) = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
    Ok(Some(Action::bump(monster, dx, dy)))
}
