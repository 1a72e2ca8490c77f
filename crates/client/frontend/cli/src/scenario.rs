//! The hand-drawn starting dungeon.
use delve_core::{
    ActionError, ActorState, Ai, Color, Consumable, Engine, EntityId, Fighter, GameConfig,
    GameMap, Inventory, ItemState, MapError, Position, palette,
};

/// Terrain plus spawn markers: `@` player, `o` orc, `T` troll, `!` health
/// potion, `?` lightning scroll, `c` confusion scroll, `f` fireball scroll.
/// Markers stand on floor.
pub const LAYOUT: &[&str] = &[
    "################################################",
    "#..........##########...........################",
    "#..........##########..o.....?..################",
    "#....@.....##########...........################",
    "#.....!..........................######.......##",
    "#..........##########...........######...T....##",
    "#..........##########.....c.....######........##",
    "######.#######################.#######........##",
    "######.#######################.#######...f....##",
    "######.#######################................##",
    "#..........#####################################",
    "#...!......#.................................###",
    "#.......................o.........T......f...###",
    "#....?.....#.................................###",
    "#..........#..........!..........c...........###",
    "################################################",
];

pub const WELCOME: &str = "Hello and welcome, adventurer, to yet another dungeon!";

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error("layout has no player")]
    MissingPlayer,

    #[error("second player marker at {0}")]
    DuplicatePlayer(Position),

    #[error(transparent)]
    Engine(#[from] ActionError),
}

/// Builds a session from [`LAYOUT`].
pub fn build(config: &GameConfig) -> Result<Engine, ScenarioError> {
    from_layout(LAYOUT, config)
}

/// Builds a session from any marker layout and greets the player.
pub fn from_layout<S: AsRef<str>>(
    rows: &[S],
    config: &GameConfig,
) -> Result<Engine, ScenarioError> {
    let mut terrain = Vec::with_capacity(rows.len());
    let mut spawns = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        let mut line = String::with_capacity(row.as_ref().len());
        for (x, glyph) in row.as_ref().chars().enumerate() {
            if matches!(glyph, '@' | 'o' | 'T' | '!' | '?' | 'c' | 'f') {
                spawns.push((Position::new(x as i32, y as i32), glyph));
                line.push('.');
            } else {
                line.push(glyph);
            }
        }
        terrain.push(line);
    }

    let mut map = GameMap::from_ascii(&terrain)?;

    let mut player = None;
    for &(position, _) in spawns.iter().filter(|(_, glyph)| *glyph == '@') {
        if player.is_some() {
            return Err(ScenarioError::DuplicatePlayer(position));
        }
        let id = map.allocate_id();
        player = Some(map.spawn_actor(spawn_player(id, position, config)));
    }
    let player = player.ok_or(ScenarioError::MissingPlayer)?;

    for &(position, glyph) in spawns.iter().filter(|(_, glyph)| *glyph != '@') {
        let id = map.allocate_id();
        match glyph {
            'o' => {
                map.spawn_actor(orc(id, position));
            }
            'T' => {
                map.spawn_actor(troll(id, position));
            }
            '!' => {
                map.place_item(health_potion(id).at(position));
            }
            '?' => {
                map.place_item(lightning_scroll(id).at(position));
            }
            'c' => {
                map.place_item(confusion_scroll(id).at(position));
            }
            'f' => {
                map.place_item(fireball_scroll(id).at(position));
            }
            _ => {}
        }
    }

    let mut engine = Engine::new(map, player, config.clone())?;
    engine
        .message_log
        .add_message(WELCOME, palette::WELCOME_TEXT);
    tracing::info!(
        width = engine.map.width(),
        height = engine.map.height(),
        actors = engine.map.actors().count(),
        items = engine.map.items().count(),
        "scenario built"
    );
    Ok(engine)
}

fn spawn_player(id: EntityId, position: Position, config: &GameConfig) -> ActorState {
    ActorState::new(id, "Player", '@', palette::WHITE, position)
        .with_fighter(Fighter::new(30, 2, 5))
        .with_inventory(Inventory::new(config.player_inventory_capacity))
        .with_ai(Ai::Controlled)
}

fn orc(id: EntityId, position: Position) -> ActorState {
    ActorState::new(id, "Orc", 'o', Color::rgb(63, 127, 63), position)
        .with_fighter(Fighter::new(10, 0, 3))
        .with_inventory(Inventory::new(0))
        .with_ai(Ai::Hostile)
}

fn troll(id: EntityId, position: Position) -> ActorState {
    ActorState::new(id, "Troll", 'T', Color::rgb(0, 127, 0), position)
        .with_fighter(Fighter::new(16, 1, 4))
        .with_inventory(Inventory::new(0))
        .with_ai(Ai::Hostile)
}

fn health_potion(id: EntityId) -> ItemState {
    ItemState::new(
        id,
        "Health Potion",
        '!',
        Color::rgb(127, 0, 255),
        Consumable::Healing { amount: 4 },
    )
}

fn lightning_scroll(id: EntityId) -> ItemState {
    ItemState::new(
        id,
        "Lightning Scroll",
        '~',
        Color::rgb(255, 255, 0),
        Consumable::LightningDamage {
            damage: 20,
            max_range: 5,
        },
    )
}

fn confusion_scroll(id: EntityId) -> ItemState {
    ItemState::new(
        id,
        "Confusion Scroll",
        '~',
        Color::rgb(207, 63, 255),
        Consumable::Confusion { turns: 10 },
    )
}

fn fireball_scroll(id: EntityId) -> ItemState {
    ItemState::new(
        id,
        "Fireball Scroll",
        '~',
        Color::rgb(255, 0, 0),
        Consumable::Fireball {
            damage: 12,
            radius: 3,
        },
    )
}
