//! A single communication tile

use serde::{Deserialize, Serialize};

/// Fill color given to tiles created without one
pub const FALLBACK_TILE_COLOR: &str = "#cccccc";

/// One communication unit: emoji or image, spoken label, background color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tile {
    /// Emoji shown when no image is set
    pub emoji: String,

    /// Label shown under the face and spoken on activation
    pub text: String,

    /// Background color as a hex string (`#rrggbb`)
    pub color: String,

    /// Uploaded picture as a `data:` URL, replaces the emoji when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            emoji: String::new(),
            text: String::new(),
            color: FALLBACK_TILE_COLOR.to_string(),
            image: None,
        }
    }
}

impl Tile {
    pub fn new(emoji: &str, text: &str, color: &str) -> Self {
        Self {
            emoji: emoji.to_string(),
            text: text.to_string(),
            color: color.to_string(),
            image: None,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.as_ref().is_some_and(|i| !i.is_empty())
    }
}
