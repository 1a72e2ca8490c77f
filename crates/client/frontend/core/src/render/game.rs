//! Main game view: map, entities, health bar, messages.

use delve_core::{Color, Engine, GameMap, Message, Position, RenderOrder, TerrainKind, palette};

use super::Console;

pub const SCREEN_WIDTH: i32 = 80;
pub const SCREEN_HEIGHT: i32 = 50;
pub const MAP_WIDTH: i32 = 80;
pub const MAP_HEIGHT: i32 = 43;
pub const BAR_WIDTH: i32 = 20;

const BAR_Y: i32 = 45;
const NAMES_AT: (i32, i32) = (21, 44);
const LOG_X: i32 = 21;
const LOG_Y: i32 = 45;
const LOG_WIDTH: i32 = 40;
const LOG_HEIGHT: i32 = 5;

/// Background of a tile, lit when in view.
fn tile_background(terrain: TerrainKind, lit: bool) -> Color {
    match (terrain, lit) {
        (TerrainKind::Floor, true) => Color::rgb(0xC8, 0xB4, 0x32),
        (TerrainKind::Floor, false) => Color::rgb(0x32, 0x32, 0x96),
        (TerrainKind::Wall, true) => Color::rgb(0x82, 0x6E, 0x32),
        (TerrainKind::Wall, false) => Color::rgb(0x00, 0x00, 0x64),
    }
}

pub fn render_main(console: &mut dyn Console, engine: &Engine) {
    render_map(console, &engine.map);
    render_entities(console, &engine.map);

    if let Ok(player) = engine.player()
        && let Some(fighter) = &player.fighter
    {
        render_bar(console, fighter.hp(), fighter.max_hp, BAR_WIDTH);
    }

    let messages: Vec<&Message> = engine.message_log.iter().collect();
    render_messages(console, LOG_X, LOG_Y, LOG_WIDTH, LOG_HEIGHT, &messages);
    render_names_at(console, engine, engine.mouse_location);
}

/// Lit tiles in view, dimmed tiles remembered, shroud elsewhere.
fn render_map(console: &mut dyn Console, map: &GameMap) {
    for y in 0..map.height() {
        for x in 0..map.width() {
            let position = Position::new(x, y);
            let Some(terrain) = map.terrain(position) else {
                continue;
            };
            let bg = if map.visible(position) {
                tile_background(terrain, true)
            } else if map.explored(position) {
                tile_background(terrain, false)
            } else {
                palette::BLACK
            };
            console.put(x, y, ' ', palette::WHITE, Some(bg));
        }
    }
}

fn render_entities(console: &mut dyn Console, map: &GameMap) {
    let mut drawables: Vec<(RenderOrder, Position, char, Color)> = map
        .actors()
        .map(|actor| (actor.render_order, actor.position, actor.glyph, actor.color))
        .chain(
            map.items()
                .map(|item| (RenderOrder::Item, item.position, item.glyph, item.color)),
        )
        .filter(|(_, position, _, _)| map.visible(*position))
        .collect();
    drawables.sort_by_key(|(order, ..)| *order);

    for (_, position, glyph, color) in drawables {
        console.put(position.x, position.y, glyph, color, None);
    }
}

/// Draws `HP: hp/max` over a bar filled in proportion to the health left.
pub fn render_bar(console: &mut dyn Console, current: i32, maximum: i32, total_width: i32) {
    let filled = if maximum > 0 {
        (current.clamp(0, maximum) * total_width) / maximum
    } else {
        0
    };

    for x in 0..total_width {
        let bg = if x < filled {
            palette::BAR_FILLED
        } else {
            palette::BAR_EMPTY
        };
        console.put(x, BAR_Y, ' ', palette::BAR_TEXT, Some(bg));
    }
    console.print(1, BAR_Y, &format!("HP: {current}/{maximum}"), palette::BAR_TEXT);
}

/// Draws the newest messages bottom-up inside the given box, word-wrapped.
pub fn render_messages(
    console: &mut dyn Console,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    messages: &[&Message],
) {
    let mut row = height - 1;
    for message in messages.iter().rev() {
        let text = message.full_text();
        for line in wrap(&text, width.max(1) as usize).iter().rev() {
            if row < 0 {
                return;
            }
            console.print(x, y + row, line, message.color);
            row -= 1;
        }
    }
}

fn render_names_at(console: &mut dyn Console, engine: &Engine, position: Position) {
    if !engine.map.in_bounds(position) || !engine.map.visible(position) {
        return;
    }

    let names = engine.map.names_at(position).join(", ");
    let mut chars = names.chars();
    let Some(first) = chars.next() else {
        return;
    };
    let label: String = first.to_uppercase().chain(chars).collect();
    console.print(NAMES_AT.0, NAMES_AT.1, &label, palette::WHITE);
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let line_len = line.chars().count();
        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
