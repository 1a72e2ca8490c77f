//! RGB colors shared by the rules (message styling, corpse tint) and every
//! frontend that draws them.

/// 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);

pub const PLAYER_ATK: Color = Color::rgb(0xE0, 0xE0, 0xE0);
pub const ENEMY_ATK: Color = Color::rgb(0xFF, 0xC0, 0xC0);
pub const NEEDS_TARGET: Color = Color::rgb(0x3F, 0xFF, 0xFF);
pub const STATUS_EFFECT_APPLIED: Color = Color::rgb(0x3F, 0xFF, 0x3F);

pub const PLAYER_DIE: Color = Color::rgb(0xFF, 0x30, 0x30);
pub const ENEMY_DIE: Color = Color::rgb(0xFF, 0xA0, 0x30);

pub const INVALID: Color = Color::rgb(0xFF, 0xFF, 0x00);
pub const IMPOSSIBLE: Color = Color::rgb(0x80, 0x80, 0x80);
pub const ERROR: Color = Color::rgb(0xFF, 0x40, 0x40);

pub const WELCOME_TEXT: Color = Color::rgb(0x20, 0xA0, 0xFF);
pub const HEALTH_RECOVERED: Color = Color::rgb(0x00, 0xFF, 0x00);

pub const BAR_TEXT: Color = WHITE;
pub const BAR_FILLED: Color = Color::rgb(0x00, 0x60, 0x00);
pub const BAR_EMPTY: Color = Color::rgb(0x40, 0x10, 0x10);

pub const CORPSE: Color = Color::rgb(0xBF, 0x00, 0x00);
