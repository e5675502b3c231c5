//! Show command implementation

use anyhow::{Context, Result};
use talkboard::store::SettingsStore;

/// Print the effective configuration (stored values merged over defaults)
pub fn show_command(store: &SettingsStore, summary: bool) -> Result<()> {
    let config = store.load();

    if summary {
        println!(
            "Tiles: {} of {} visible, size {} px, font {} px, radius {} px",
            config.visible_tiles().len(),
            config.tiles.len(),
            config.tile_size,
            config.font_size,
            config.border_radius
        );
        for (i, tile) in config.tiles.iter().enumerate() {
            let marker = if i < config.tile_count { "*" } else { " " };
            let image = if tile.has_image() { " [Bild]" } else { "" };
            println!(
                "{} {:>2}. {} {} ({}){}",
                marker,
                i + 1,
                tile.emoji,
                tile.text,
                tile.color,
                image
            );
        }
        return Ok(());
    }

    let json = config
        .to_json()
        .context("Failed to serialize configuration")?;
    println!("{}", json);
    Ok(())
}
