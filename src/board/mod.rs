//! Board view model
//!
//! [`render`] projects a [`Configuration`] into the list of tiles the GUI
//! paints. It is a pure function: the same configuration always yields the
//! same view, so the GUI simply re-derives it every frame.

mod color;

pub use color::{parse_hex_color, to_hex_color, Rgb};

use crate::config::Configuration;

/// Fill used when a tile's color string cannot be parsed
pub const FALLBACK_FILL: Rgb = Rgb(0xcc, 0xcc, 0xcc);

/// What is drawn in the middle of a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileFace {
    /// Uploaded picture as a `data:` URL
    Image(String),
    /// Emoji glyph
    Emoji(String),
}

/// One tile ready to be painted
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    /// Position in the configuration's tile list
    pub index: usize,
    /// Text shown under the face and spoken on activation
    pub label: String,
    pub face: TileFace,
    pub fill: Rgb,
    /// Side length of the square tile
    pub size: f32,
    pub corner_radius: f32,
    pub font_size: f32,
}

/// Everything the board shows, in display order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardView {
    pub tiles: Vec<TileView>,
}

impl BoardView {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.tiles.iter().map(|t| t.label.as_str()).collect()
    }

    /// Label spoken when the tile at `position` is activated
    pub fn activate(&self, position: usize) -> Option<&str> {
        self.tiles.get(position).map(|t| t.label.as_str())
    }
}

/// Build the board for `config`: exactly `min(tile_count, tiles.len())`
/// tiles, in their configured order.
pub fn render(config: &Configuration) -> BoardView {
    let tiles = config
        .visible_tiles()
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let face = match &tile.image {
                Some(image) if !image.is_empty() => TileFace::Image(image.clone()),
                _ => TileFace::Emoji(tile.emoji.clone()),
            };
            TileView {
                index,
                label: tile.text.clone(),
                face,
                fill: parse_hex_color(&tile.color).unwrap_or(FALLBACK_FILL),
                size: config.tile_size,
                corner_radius: config.border_radius,
                font_size: config.font_size,
            }
        })
        .collect();

    BoardView { tiles }
}
