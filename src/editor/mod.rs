//! Settings editor
//!
//! Setters mutate the live [`Configuration`] immediately; since the board is
//! derived from the configuration every frame, each edit shows up on the
//! board right away. Nothing is persisted until the user saves.

mod gate;
mod upload;

pub use gate::{GateState, PinCheck, PinGate, WRONG_PIN_MESSAGE};
pub use upload::{
    ImageUploads, UploadCompletion, UploadError, UploadOutcome, UploadTicket, read_image_file,
};

use std::collections::HashMap;
use std::path::PathBuf;

use crate::board::{Rgb, to_hex_color};
use crate::config::{BORDER_RADIUS_RANGE, Configuration, FONT_SIZE_RANGE, TILE_SIZE_RANGE};

fn clamp_to(value: f32, range: &std::ops::RangeInclusive<f32>) -> f32 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

pub fn set_tile_size(config: &mut Configuration, size: f32) {
    config.tile_size = clamp_to(size, &TILE_SIZE_RANGE);
}

pub fn set_font_size(config: &mut Configuration, size: f32) {
    config.font_size = clamp_to(size, &FONT_SIZE_RANGE);
}

pub fn set_border_radius(config: &mut Configuration, radius: f32) {
    config.border_radius = clamp_to(radius, &BORDER_RADIUS_RANGE);
}

/// Show the first `count` tiles, clamped to `1..=tiles.len()`
pub fn set_tile_count(config: &mut Configuration, count: usize) {
    config.tile_count = count;
    config.normalize();
}

pub fn set_emoji(config: &mut Configuration, index: usize, emoji: &str) {
    if let Some(tile) = config.tiles.get_mut(index) {
        tile.emoji = emoji.to_string();
    }
}

pub fn set_text(config: &mut Configuration, index: usize, text: &str) {
    if let Some(tile) = config.tiles.get_mut(index) {
        tile.text = text.to_string();
    }
}

pub fn set_color(config: &mut Configuration, index: usize, color: Rgb) {
    if let Some(tile) = config.tiles.get_mut(index) {
        tile.color = to_hex_color(color);
    }
}

pub fn clear_image(config: &mut Configuration, index: usize) {
    if let Some(tile) = config.tiles.get_mut(index) {
        tile.image = None;
    }
}

/// Change the settings PIN. Blank PINs are refused.
pub fn set_pin(config: &mut Configuration, pin: &str) -> bool {
    let pin = pin.trim();
    if pin.is_empty() {
        return false;
    }
    config.pin = pin.to_string();
    true
}

/// Editor state that lives alongside the configuration for a session
#[derive(Default)]
pub struct EditorSession {
    pub gate: PinGate,
    pub uploads: ImageUploads,
    /// Path typed into each tile row's image field
    pub image_paths: HashMap<usize, String>,
    /// Last upload status per tile row (message, is_error)
    pub image_status: HashMap<usize, (String, bool)>,
    /// New PIN being typed in the editor
    pub new_pin: String,
    /// Reset confirmation dialog is shown
    pub confirm_reset: bool,
    /// Last save/reset result (message, is_error)
    pub status: Option<(String, bool)>,
    /// Configuration as last loaded or persisted
    saved: Option<Configuration>,
}

impl EditorSession {
    pub fn new(saved: &Configuration) -> Self {
        Self {
            saved: Some(saved.clone()),
            ..Self::default()
        }
    }

    /// Record `config` as the persisted baseline
    pub fn mark_saved(&mut self, config: &Configuration) {
        self.saved = Some(config.clone());
    }

    /// Whether the live configuration has edits not yet persisted
    pub fn is_dirty(&self, config: &Configuration) -> bool {
        self.saved.as_ref() != Some(config)
    }

    pub fn open(&mut self) {
        self.gate.open();
        self.confirm_reset = false;
        self.status = None;
    }

    pub fn close(&mut self) {
        self.gate.close();
        self.confirm_reset = false;
        self.new_pin.clear();
    }

    /// Start loading the picture typed into the row for `slot`
    pub fn start_upload_from_input(&mut self, slot: usize) -> Option<UploadTicket> {
        let path = self.image_paths.get(&slot)?.trim();
        if path.is_empty() {
            return None;
        }
        Some(self.start_upload(slot, PathBuf::from(path)))
    }

    pub fn start_upload(&mut self, slot: usize, path: PathBuf) -> UploadTicket {
        self.image_status
            .insert(slot, ("Bild wird geladen…".to_string(), false));
        self.uploads.start(slot, path)
    }

    /// Apply finished uploads and update per-row status lines
    pub fn poll_uploads(&mut self, config: &mut Configuration) -> Vec<UploadOutcome> {
        let outcomes = self.uploads.poll(config);
        for outcome in &outcomes {
            match outcome {
                UploadOutcome::Applied { slot } => {
                    self.image_status
                        .insert(*slot, ("Bild übernommen".to_string(), false));
                    self.image_paths.remove(slot);
                }
                UploadOutcome::Failed { slot, message } => {
                    self.image_status.insert(*slot, (message.clone(), true));
                }
                UploadOutcome::Stale { .. } | UploadOutcome::MissingSlot { .. } => {}
            }
        }
        outcomes
    }

    /// Forget everything tied to the previous configuration
    pub fn reset(&mut self, config: &Configuration) {
        self.uploads.invalidate_all();
        self.image_paths.clear();
        self.image_status.clear();
        self.confirm_reset = false;
        self.mark_saved(config);
    }
}
