//! Tests for loading, saving and resetting the configuration

use talkboard::config::{
    Configuration, DEFAULT_BORDER_RADIUS, DEFAULT_PIN, DEFAULT_TILE_COUNT, DEFAULT_TILE_SIZE,
    default_tiles,
};
use talkboard::store::{FileStore, KeyValueStore, MemoryStore, SETTINGS_KEY, SettingsStore};
use tempfile::TempDir;

#[test]
fn test_load_without_saved_data_yields_defaults() {
    let store = SettingsStore::new(MemoryStore::new());
    assert_eq!(store.load(), Configuration::default());
}

#[test]
fn test_load_without_tiles_keeps_other_saved_fields() {
    let saved = r#"{"tileSize": 220, "fontSize": 32, "borderRadius": 4, "tileCount": 4, "pin": "0000"}"#;
    let store = SettingsStore::new(MemoryStore::with_entry(SETTINGS_KEY, saved));

    let config = store.load();
    assert_eq!(config.tiles, default_tiles());
    assert_eq!(config.tile_size, 220.0);
    assert_eq!(config.font_size, 32.0);
    assert_eq!(config.border_radius, 4.0);
    assert_eq!(config.tile_count, 4);
    assert_eq!(config.pin, "0000");
}

#[test]
fn test_load_null_tiles_keeps_other_saved_fields() {
    let saved = r#"{"tileSize": 220, "pin": "0000", "tiles": null}"#;
    let store = SettingsStore::new(MemoryStore::with_entry(SETTINGS_KEY, saved));

    let config = store.load();
    assert_eq!(config.tiles, default_tiles());
    assert_eq!(config.tile_size, 220.0);
    assert_eq!(config.pin, "0000");
}

#[test]
fn test_load_negative_tile_count_keeps_other_saved_fields() {
    let saved = r#"{"tileCount": -1, "fontSize": 30, "pin": "2468"}"#;
    let store = SettingsStore::new(MemoryStore::with_entry(SETTINGS_KEY, saved));

    let config = store.load();
    assert_eq!(config.tile_count, DEFAULT_TILE_COUNT);
    assert_eq!(config.font_size, 30.0);
    assert_eq!(config.pin, "2468");
}

#[test]
fn test_load_malformed_fields_fall_back_individually() {
    let saved = r#"{"tileSize": "large", "borderRadius": null, "tiles": "none", "pin": 1234, "fontSize": 18}"#;
    let store = SettingsStore::new(MemoryStore::with_entry(SETTINGS_KEY, saved));

    let config = store.load();
    assert_eq!(config.tile_size, DEFAULT_TILE_SIZE);
    assert_eq!(config.border_radius, DEFAULT_BORDER_RADIUS);
    assert_eq!(config.tiles, default_tiles());
    assert_eq!(config.pin, DEFAULT_PIN);
    assert_eq!(config.font_size, 18.0);
}

#[test]
fn test_load_partial_document_fills_defaults() {
    let store = SettingsStore::new(MemoryStore::with_entry(SETTINGS_KEY, r#"{"fontSize": 28}"#));
    let config = store.load();
    assert_eq!(config.font_size, 28.0);
    assert_eq!(config.pin, DEFAULT_PIN);
    assert_eq!(config.tile_count, 6);
}

#[test]
fn test_load_corrupt_data_yields_defaults() {
    let store = SettingsStore::new(MemoryStore::with_entry(SETTINGS_KEY, "not json at all"));
    assert_eq!(store.load(), Configuration::default());
}

#[test]
fn test_save_then_load_returns_saved_configuration() {
    let backend = MemoryStore::new();
    let mut store = SettingsStore::new(backend.clone());

    let mut config = Configuration::default();
    config.tile_size = 180.0;
    config.tiles[5].text = "Mutti".to_string();
    config.tiles[5].image = Some("data:image/png;base64,AAAA".to_string());
    assert!(store.save(&config));

    assert_eq!(SettingsStore::new(backend).load(), config);
}

#[test]
fn test_reset_persists_defaults() {
    let backend = MemoryStore::new();
    let mut store = SettingsStore::new(backend.clone());

    let mut config = Configuration::default();
    config.tile_count = 2;
    config.tiles.truncate(2);
    store.save(&config);

    let reset = store.reset();
    assert_eq!(reset, Configuration::default());
    assert_eq!(SettingsStore::new(backend).load(), Configuration::default());
}

#[test]
fn test_file_store_round_trip_on_disk() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut store = SettingsStore::in_dir(dir.path());

    let mut config = Configuration::default();
    config.border_radius = 0.0;
    store.try_save(&config).expect("save should succeed");

    let file = FileStore::new(dir.path());
    let raw = file.get(SETTINGS_KEY).unwrap().expect("settings file should exist");
    assert!(raw.contains("\"borderRadius\": 0.0"));
    assert!(file.path_for(SETTINGS_KEY).exists());

    assert_eq!(SettingsStore::in_dir(dir.path()).load(), config);
}

#[test]
fn test_file_store_hand_edited_document() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        FileStore::new(dir.path()).path_for(SETTINGS_KEY),
        r##"{"tiles": [{"emoji": "🍎", "text": "Apfel"}], "tileCount": 1}"##,
    )
    .unwrap();

    let config = SettingsStore::in_dir(dir.path()).load();
    assert_eq!(config.tiles.len(), 1);
    assert_eq!(config.tiles[0].text, "Apfel");
    // Missing tile color falls back to the neutral fill
    assert_eq!(config.tiles[0].color, "#cccccc");
}
