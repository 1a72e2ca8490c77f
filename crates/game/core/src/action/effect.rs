//! Consumable effects.
//!
//! Every effect either succeeds and removes its item from the user's
//! inventory, or fails with [`ActionError::Impossible`] and leaves the item
//! where it was so the player can retry.

use super::Action;
use crate::engine::Engine;
use crate::error::ActionError;
use crate::palette;
use crate::state::{Ai, Consumable, EntityId, ItemState, Position};

/// How the interface should go about using an item.
#[derive(Clone, Debug, PartialEq)]
pub enum UseRequest {
    /// Use right away.
    Immediate(Action),
    /// Ask the player for a single tile first.
    SelectTarget,
    /// Ask the player for the center of an area of the given radius.
    SelectArea { radius: i32 },
}

impl Consumable {
    /// Tells the interface what it needs before `user` can use `item`.
    pub fn use_request(&self, user: EntityId, item: EntityId) -> UseRequest {
        match *self {
            Self::Healing { .. } | Self::LightningDamage { .. } => {
                UseRequest::Immediate(Action::use_item(user, item, None))
            }
            Self::Confusion { .. } => UseRequest::SelectTarget,
            Self::Fireball { radius, .. } => UseRequest::SelectArea { radius },
        }
    }
}

pub(crate) fn held_item(
    engine: &Engine,
    user: EntityId,
    item: EntityId,
) -> Result<&ItemState, ActionError> {
    engine
        .actor(user)?
        .inventory
        .as_ref()
        .ok_or(ActionError::missing(user, "inventory"))?
        .find(item)
        .ok_or(ActionError::ItemNotFound { owner: user, item })
}

/// Runs the effect of `item` for `user` aimed at `target`.
pub(crate) fn activate(
    engine: &mut Engine,
    user: EntityId,
    item: EntityId,
    target: Position,
) -> Result<(), ActionError> {
    let held = held_item(engine, user, item)?;
    let consumable = held.consumable;
    let name = held.name.clone();

    match consumable {
        Consumable::Healing { amount } => heal(engine, user, &name, amount)?,
        Consumable::LightningDamage { damage, max_range } => {
            lightning(engine, user, damage, max_range)?
        }
        Consumable::Confusion { turns } => confuse(engine, user, target, turns)?,
        Consumable::Fireball { damage, radius } => fireball(engine, target, damage, radius)?,
    }

    consume(engine, user, item)
}

/// Removes a spent item from its owner's inventory.
fn consume(engine: &mut Engine, user: EntityId, item: EntityId) -> Result<(), ActionError> {
    engine
        .actor_mut(user)?
        .inventory
        .as_mut()
        .and_then(|inventory| inventory.remove(item))
        .map(|_| ())
        .ok_or(ActionError::ItemNotFound { owner: user, item })
}

fn heal(engine: &mut Engine, user: EntityId, name: &str, amount: i32) -> Result<(), ActionError> {
    let actor = engine.actor_mut(user)?;
    if actor.fighter.is_none() {
        return Err(ActionError::missing(user, "fighter"));
    }

    let recovered = actor.heal(amount);
    if recovered <= 0 {
        return Err(ActionError::impossible("Your health is already full."));
    }

    engine.message_log.add_message(
        format!("You consume the {name}, and recover {recovered} HP!"),
        palette::HEALTH_RECOVERED,
    );
    Ok(())
}

fn lightning(
    engine: &mut Engine,
    user: EntityId,
    damage: i32,
    max_range: i32,
) -> Result<(), ActionError> {
    let origin = engine.actor(user)?.position;

    // Strict comparison keeps the first actor found at the minimum distance.
    let mut closest_distance = f64::from(max_range) + 1.0;
    let mut target = None;
    for actor in engine.map.living_actors() {
        if actor.id == user || actor.fighter.is_none() || !engine.map.visible(actor.position) {
            continue;
        }
        let distance = origin.distance(actor.position);
        if distance < closest_distance {
            closest_distance = distance;
            target = Some((actor.id, actor.name.clone()));
        }
    }

    let Some((target, target_name)) = target else {
        return Err(ActionError::impossible(
            "No enemy is close enough to strike.",
        ));
    };

    engine.message_log.add_message(
        format!(
            "A lightning bolt strikes the {target_name} with a loud thunder, for {damage} damage!"
        ),
        palette::WHITE,
    );
    engine.apply_damage(target, damage)?;
    Ok(())
}

fn confuse(
    engine: &mut Engine,
    user: EntityId,
    target: Position,
    turns: u32,
) -> Result<(), ActionError> {
    if !engine.map.visible(target) {
        return Err(ActionError::impossible(
            "You cannot target an area that you cannot see.",
        ));
    }
    let Some(victim) = engine.map.actor_at(target).map(|actor| actor.id) else {
        return Err(ActionError::impossible("You must select an enemy to target."));
    };
    if victim == user {
        return Err(ActionError::impossible("You cannot confuse yourself!"));
    }

    let actor = engine.actor_mut(victim)?;
    let previous = actor.ai.take().unwrap_or(Ai::Hostile);
    actor.ai = Some(Ai::Confused {
        previous: Box::new(previous),
        turns_remaining: turns,
    });
    let message = format!(
        "The eyes of the {} look vacant, as it starts to stumble around!",
        actor.name
    );

    engine
        .message_log
        .add_message(message, palette::STATUS_EFFECT_APPLIED);
    Ok(())
}

fn fireball(
    engine: &mut Engine,
    target: Position,
    damage: i32,
    radius: i32,
) -> Result<(), ActionError> {
    if !engine.map.visible(target) {
        return Err(ActionError::impossible(
            "You cannot target an area that you cannot see.",
        ));
    }

    let radius = f64::from(radius);
    let victims: Vec<(EntityId, String)> = engine
        .map
        .living_actors()
        .filter(|actor| actor.fighter.is_some() && actor.position.distance(target) <= radius)
        .map(|actor| (actor.id, actor.name.clone()))
        .collect();

    if victims.is_empty() {
        return Err(ActionError::impossible("There are no targets in the radius."));
    }

    for (victim, name) in victims {
        engine.message_log.add_message(
            format!("The {name} is engulfed in a fiery explosion, taking {damage} damage!"),
            palette::WHITE,
        );
        engine.apply_damage(victim, damage)?;
    }
    Ok(())
}
