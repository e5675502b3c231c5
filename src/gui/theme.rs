//! GUI Theme: soft light palette for the communication board
//!
//! Color constants shared by the board and the settings panel.

use eframe::egui::{self, Color32, Stroke};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Board background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(246, 244, 240);
/// Secondary background for panels and sections
pub const BG_SECONDARY: Color32 = Color32::from_rgb(234, 230, 224);
/// Hovered widget background
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(220, 214, 204);
/// Dimmed backdrop behind the settings panel
pub const BG_BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 110);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(40, 36, 32);
pub const TEXT_DIM: Color32 = Color32::from_rgb(90, 84, 76);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 132, 122);
/// Label text drawn on top of tile fills
pub const TEXT_ON_TILE: Color32 = Color32::from_rgb(25, 25, 25);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_BLUE: Color32 = Color32::from_rgb(33, 118, 210);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(46, 160, 67);
pub const ACCENT_RED: Color32 = Color32::from_rgb(211, 47, 47);
pub const ACCENT_YELLOW: Color32 = Color32::from_rgb(240, 180, 20);

/// Apply the light theme to the egui context.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = Color32::WHITE;
    style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_BLUE);
    ctx.set_style(style);
}
