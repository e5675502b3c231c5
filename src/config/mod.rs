//! Board configuration: the tile sequence and display settings
//!
//! A single [`Configuration`] holds everything the user can adjust. It is
//! persisted as one JSON document (see [`crate::store`]); field names are
//! camelCase on disk.

mod defaults;
mod tile;

pub use defaults::{
    BORDER_RADIUS_RANGE, DEFAULT_BORDER_RADIUS, DEFAULT_FONT_SIZE, DEFAULT_PIN, DEFAULT_TILE_COUNT,
    DEFAULT_TILE_SIZE, FONT_SIZE_RANGE, TILE_SIZE_RANGE, default_tiles,
};
pub use tile::Tile;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// All user-adjustable settings of the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    /// Side length of each square tile, in pixels
    pub tile_size: f32,

    /// Label font size, in pixels
    pub font_size: f32,

    /// Tile corner radius, in pixels
    pub border_radius: f32,

    /// How many leading tiles of `tiles` are shown
    pub tile_count: usize,

    /// Ordered tile sequence; order is display order
    pub tiles: Vec<Tile>,

    /// PIN guarding the settings panel
    pub pin: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            border_radius: DEFAULT_BORDER_RADIUS,
            tile_count: DEFAULT_TILE_COUNT,
            tiles: default_tiles(),
            pin: DEFAULT_PIN.to_string(),
        }
    }
}

impl Configuration {
    /// Parse a persisted document and merge it over the defaults.
    ///
    /// Fields missing from `json`, `null`, or holding a value of the wrong
    /// shape keep their default value; the remaining fields are still taken
    /// from the document. An absent or empty tile list is replaced wholesale
    /// by the default tiles. Only a document that is not a JSON object at
    /// all is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let Value::Object(fields) = serde_json::from_str::<Value>(json)? else {
            return Err(serde::de::Error::custom("settings document is not a JSON object"));
        };

        let mut config = Configuration::default();
        for (key, value) in fields {
            match key.as_str() {
                "tileSize" => merge_field(&mut config.tile_size, &key, value),
                "fontSize" => merge_field(&mut config.font_size, &key, value),
                "borderRadius" => merge_field(&mut config.border_radius, &key, value),
                "tileCount" => merge_field(&mut config.tile_count, &key, value),
                "tiles" => merge_field(&mut config.tiles, &key, value),
                "pin" => merge_field(&mut config.pin, &key, value),
                _ => debug!("Ignoring unknown settings field: {}", key),
            }
        }

        if config.tiles.is_empty() {
            config.tiles = default_tiles();
        }
        config.normalize();
        Ok(config)
    }

    /// Serialize the full configuration for persistence
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Restore invariants after loading or bulk edits.
    ///
    /// `tile_count` always lies in `1..=tiles.len()` (or is 0 for an empty
    /// tile list). Non-finite sizes fall back to their defaults.
    pub fn normalize(&mut self) {
        let max = self.tiles.len();
        self.tile_count = if max == 0 {
            0
        } else {
            self.tile_count.clamp(1, max)
        };

        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            self.tile_size = DEFAULT_TILE_SIZE;
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            self.font_size = DEFAULT_FONT_SIZE;
        }
        if !self.border_radius.is_finite() || self.border_radius < 0.0 {
            self.border_radius = DEFAULT_BORDER_RADIUS;
        }
    }

    /// Tiles that are currently displayed, in order
    pub fn visible_tiles(&self) -> &[Tile] {
        let n = self.tile_count.min(self.tiles.len());
        &self.tiles[..n]
    }
}

/// Overwrite `slot` with `value` unless it is `null` or fails to parse
fn merge_field<T: DeserializeOwned>(slot: &mut T, key: &str, value: Value) {
    if value.is_null() {
        return;
    }
    match T::deserialize(value) {
        Ok(parsed) => *slot = parsed,
        Err(e) => warn!("Ignoring invalid settings field {}: {}", key, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_layout() {
        let config = Configuration::default();
        assert_eq!(config.tile_size, 150.0);
        assert_eq!(config.font_size, 24.0);
        assert_eq!(config.border_radius, 20.0);
        assert_eq!(config.tile_count, 6);
        assert_eq!(config.pin, "1234");

        let tiles: Vec<_> = config
            .tiles
            .iter()
            .map(|t| (t.emoji.as_str(), t.text.as_str(), t.color.as_str()))
            .collect();
        assert_eq!(
            tiles,
            vec![
                ("🍎", "Essen", "#FF9800"),
                ("🥛", "Trinken", "#2196F3"),
                ("🚽", "WC", "#FFEB3B"),
                ("🛁", "Baden", "#03A9F4"),
                ("🧸", "Spielen", "#4CAF50"),
                ("👩", "Mama", "#E91E63"),
            ]
        );
        assert!(config.tiles.iter().all(|t| t.image.is_none()));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = Configuration::from_json(r#"{"tileSize": 200}"#).unwrap();
        assert_eq!(config.tile_size, 200.0);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(config.pin, DEFAULT_PIN);
        assert_eq!(config.tiles, default_tiles());
    }

    #[test]
    fn test_empty_tile_list_replaced_by_defaults() {
        let config = Configuration::from_json(r#"{"tiles": [], "pin": "9999"}"#).unwrap();
        assert_eq!(config.tiles, default_tiles());
        assert_eq!(config.pin, "9999");
    }

    #[test]
    fn test_saved_tiles_are_not_merged_per_tile() {
        let json = r##"{"tiles": [{"emoji": "🐶", "text": "Hund", "color": "#123456"}]}"##;
        let config = Configuration::from_json(json).unwrap();
        assert_eq!(config.tiles.len(), 1);
        assert_eq!(config.tiles[0].text, "Hund");
        // Default tile_count of 6 is clamped to the single stored tile
        assert_eq!(config.tile_count, 1);
    }

    #[test]
    fn test_normalize_clamps_tile_count() {
        let mut config = Configuration {
            tile_count: 0,
            ..Configuration::default()
        };
        config.normalize();
        assert_eq!(config.tile_count, 1);

        config.tile_count = 999;
        config.normalize();
        assert_eq!(config.tile_count, config.tiles.len());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = Configuration::default().to_json().unwrap();
        assert!(json.contains("\"tileSize\""));
        assert!(json.contains("\"borderRadius\""));
        assert!(json.contains("\"tileCount\""));
        assert!(!json.contains("\"image\""));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Configuration::from_json("{not json").is_err());
        assert!(Configuration::from_json("null").is_err());
        assert!(Configuration::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_wrongly_typed_field_keeps_its_default() {
        let config = Configuration::from_json(r#"{"tileSize": "big", "fontSize": 30}"#).unwrap();
        assert_eq!(config.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(config.font_size, 30.0);
    }

    #[test]
    fn test_null_tiles_replaced_by_defaults() {
        let config = Configuration::from_json(r#"{"tiles": null, "pin": "4321"}"#).unwrap();
        assert_eq!(config.tiles, default_tiles());
        assert_eq!(config.pin, "4321");
    }
}
