//! Per-handler overlays drawn over the main view.

use delve_core::{Engine, Message, palette};

use super::game::render_messages;
use super::{Console, Frame};
use crate::bindings;
use crate::handler::SelectMode;

/// Framed item list, placed away from the player.
pub(super) fn inventory_menu(console: &mut dyn Console, engine: &Engine, title: &str) {
    let Ok(player) = engine.player() else {
        return;
    };
    let items = player
        .inventory
        .as_ref()
        .map(|inventory| inventory.items())
        .unwrap_or_default();

    let height = (items.len() as i32 + 2).max(3);
    let width = title.chars().count() as i32 + 4;
    let x = if player.position.x <= 30 { 40 } else { 0 };
    let y = 0;

    console.draw_frame(
        Frame::new(x, y, width, height)
            .title(title)
            .cleared(palette::BLACK)
            .fg(palette::WHITE),
    );

    if items.is_empty() {
        console.print(x + 1, y + 1, "(Empty)", palette::WHITE);
        return;
    }
    for (row, (slot, item)) in (1..).zip(items.iter().enumerate()) {
        let Some(letter) = bindings::slot_letter(slot) else {
            break;
        };
        console.print(
            x + 1,
            y + row,
            &format!("({letter}) {}", item.name),
            palette::WHITE,
        );
    }
}

/// Inverted cursor cell, plus an outline of the blast for area targeting.
pub(super) fn selection(console: &mut dyn Console, engine: &Engine, mode: SelectMode) {
    let cursor = engine.mouse_location;
    console.set_bg(cursor.x, cursor.y, palette::WHITE);
    console.set_fg(cursor.x, cursor.y, palette::BLACK);

    if let SelectMode::AreaTarget { radius, .. } = mode {
        let side = radius * 2 + 3;
        console.draw_frame(
            Frame::new(cursor.x - radius - 1, cursor.y - radius - 1, side, side).fg(palette::RED),
        );
    }
}

/// Inset window listing the log up to and including the cursor.
pub(super) fn history(console: &mut dyn Console, engine: &Engine, cursor: usize) {
    let (x, y) = (3, 3);
    let width = console.width() - 6;
    let height = console.height() - 6;
    if width < 3 || height < 3 {
        return;
    }

    console.draw_frame(Frame::new(x, y, width, height).cleared(palette::BLACK));
    console.print_centered(x, y, width, "┤Message history├", palette::WHITE);

    let shown: Vec<&Message> = engine.message_log.iter().take(cursor + 1).collect();
    render_messages(console, x + 1, y + 1, width - 2, height - 2, &shown);
}
