//! GPU textures for tile pictures

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use tracing::warn;

use crate::data_url;

fn fingerprint(url: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    url.hash(&mut hasher);
    hasher.finish()
}

/// Decode a data URL into an egui image
pub fn decode_image(url: &str) -> anyhow::Result<ColorImage> {
    let decoded = data_url::decode(url)?;
    let rgba = image::load_from_memory(&decoded.bytes)?.into_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// One texture per tile slot, rebuilt when the slot's picture changes
#[derive(Default)]
pub struct TextureCache {
    entries: HashMap<usize, (u64, Option<TextureHandle>)>,
}

impl TextureCache {
    /// Texture for the picture of tile `slot`; `None` if it cannot be decoded
    pub fn get(&mut self, ctx: &egui::Context, slot: usize, url: &str) -> Option<TextureHandle> {
        let key = fingerprint(url);
        if let Some((cached_key, handle)) = self.entries.get(&slot) {
            if *cached_key == key {
                return handle.clone();
            }
        }

        // Failures are cached too so a broken picture is not decoded every frame
        let handle = match decode_image(url) {
            Ok(image) => Some(ctx.load_texture(
                format!("tile-{slot}"),
                image,
                TextureOptions::LINEAR,
            )),
            Err(e) => {
                warn!("Failed to decode picture of tile {}: {}", slot + 1, e);
                None
            }
        };
        self.entries.insert(slot, (key, handle.clone()));
        handle
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
