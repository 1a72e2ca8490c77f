//! Radius-limited field of view traced with Bresenham rays.
use delve_core::{GameMap, Position};

/// Visibility grid (row-major, `width * height`) as seen from `origin`.
///
/// A tile is visible when it lies within `radius` and every tile strictly
/// between it and `origin` is transparent, so walls bounding a lit area are
/// visible themselves.
pub fn compute(map: &GameMap, origin: Position, radius: i32) -> Vec<bool> {
    let (width, height) = (map.width(), map.height());
    let mut visible = vec![false; (width * height) as usize];
    if !map.in_bounds(origin) {
        return visible;
    }

    let radius = radius.max(0);
    for y in (origin.y - radius).max(0)..=(origin.y + radius).min(height - 1) {
        for x in (origin.x - radius).max(0)..=(origin.x + radius).min(width - 1) {
            let (dx, dy) = (x - origin.x, y - origin.y);
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            if line_of_sight(map, origin, Position::new(x, y)) {
                visible[(y * width + x) as usize] = true;
            }
        }
    }
    visible
}

fn line_of_sight(map: &GameMap, from: Position, to: Position) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };

    let (mut x, mut y) = (from.x, from.y);
    let mut error = dx + dy;
    loop {
        let here = Position::new(x, y);
        if here == to {
            return true;
        }
        if here != from && !map.is_transparent(here) {
            return false;
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += sx;
        }
        if doubled <= dx {
            error += dx;
            y += sy;
        }
    }
}
