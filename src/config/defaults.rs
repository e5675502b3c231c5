//! Built-in configuration values

use std::ops::RangeInclusive;

use super::Tile;

pub const DEFAULT_TILE_SIZE: f32 = 150.0;
pub const DEFAULT_FONT_SIZE: f32 = 24.0;
pub const DEFAULT_BORDER_RADIUS: f32 = 20.0;
pub const DEFAULT_TILE_COUNT: usize = 6;
pub const DEFAULT_PIN: &str = "1234";

/// Slider bounds offered by the settings editor
pub const TILE_SIZE_RANGE: RangeInclusive<f32> = 80.0..=300.0;
pub const FONT_SIZE_RANGE: RangeInclusive<f32> = 10.0..=60.0;
pub const BORDER_RADIUS_RANGE: RangeInclusive<f32> = 0.0..=80.0;

/// The stock tile sequence (emoji, label, color)
const DEFAULT_TILES: &[(&str, &str, &str)] = &[
    ("🍎", "Essen", "#FF9800"),
    ("🥛", "Trinken", "#2196F3"),
    ("🚽", "WC", "#FFEB3B"),
    ("🛁", "Baden", "#03A9F4"),
    ("🧸", "Spielen", "#4CAF50"),
    ("👩", "Mama", "#E91E63"),
];

/// Fresh copy of the stock tiles
pub fn default_tiles() -> Vec<Tile> {
    DEFAULT_TILES
        .iter()
        .map(|(emoji, text, color)| Tile::new(emoji, text, color))
        .collect()
}
