//! Painting the tile board

use eframe::egui::{self, Align2, Color32, CornerRadius, FontId, Rect, Sense, Stroke, Vec2};

use super::textures::TextureCache;
use super::theme::{ACCENT_BLUE, TEXT_ON_TILE};
use crate::board::{BoardView, Rgb, TileFace, TileView};

/// Gap between tiles
const TILE_SPACING: f32 = 16.0;

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Paint all tiles in a wrapping grid.
///
/// Returns the display position of the tile activated this frame, if any.
pub fn render_board(
    ui: &mut egui::Ui,
    view: &BoardView,
    textures: &mut TextureCache,
) -> Option<usize> {
    let mut activated = None;

    ui.spacing_mut().item_spacing = Vec2::splat(TILE_SPACING);
    ui.horizontal_wrapped(|ui| {
        for (position, tile) in view.tiles.iter().enumerate() {
            if render_tile(ui, tile, textures).clicked() {
                activated = Some(position);
            }
        }
    });

    activated
}

fn render_tile(ui: &mut egui::Ui, tile: &TileView, textures: &mut TextureCache) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(tile.size), Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);

    if !ui.is_rect_visible(rect) {
        return response;
    }

    let radius = CornerRadius::same(tile.corner_radius.round().clamp(0.0, 255.0) as u8);
    let painter = ui.painter();
    painter.rect_filled(rect, radius, to_color32(tile.fill));
    if response.is_pointer_button_down_on() {
        painter.rect_filled(rect, radius, Color32::from_black_alpha(30));
    }
    if response.has_focus() {
        painter.rect_stroke(rect, radius, Stroke::new(3.0, ACCENT_BLUE), egui::StrokeKind::Inside);
    }

    // Face fills the upper part, label sits below it
    let padding = tile.size * 0.08;
    let label_height = tile.font_size * 1.4;
    let face_rect = Rect::from_min_max(
        rect.min + Vec2::splat(padding),
        egui::pos2(rect.max.x - padding, rect.max.y - padding - label_height),
    );

    match &tile.face {
        TileFace::Image(url) => match textures.get(ui.ctx(), tile.index, url) {
            Some(texture) => {
                let fitted = fit_rect(face_rect, texture.size_vec2());
                egui::Image::new(&texture)
                    .corner_radius(radius)
                    .paint_at(ui, fitted);
            }
            None => paint_emoji(ui, face_rect, "🖼"),
        },
        TileFace::Emoji(emoji) => paint_emoji(ui, face_rect, emoji),
    }

    ui.painter().text(
        egui::pos2(rect.center().x, rect.max.y - padding - label_height / 2.0),
        Align2::CENTER_CENTER,
        &tile.label,
        FontId::proportional(tile.font_size),
        TEXT_ON_TILE,
    );

    response
}

fn paint_emoji(ui: &egui::Ui, rect: Rect, emoji: &str) {
    if emoji.is_empty() || rect.height() <= 0.0 {
        return;
    }
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        emoji,
        FontId::proportional(rect.height() * 0.8),
        TEXT_ON_TILE,
    );
}

/// Largest rect with `size`'s aspect ratio centered inside `bounds`
fn fit_rect(bounds: Rect, size: Vec2) -> Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / size.x).min(bounds.height() / size.y);
    Rect::from_center_size(bounds.center(), size * scale)
}
