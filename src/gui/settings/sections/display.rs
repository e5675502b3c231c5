//! Board layout section: sizes, radius and tile count

use eframe::egui::{self, RichText};

use crate::config::{Configuration, BORDER_RADIUS_RANGE, FONT_SIZE_RANGE, TILE_SIZE_RANGE};
use crate::editor;
use crate::gui::theme::TEXT_MUTED;

use super::super::helpers::{render_section_frame, render_section_title, render_slider_field};

/// Render the layout controls. Every change applies to the board immediately.
pub fn render_settings_display(ui: &mut egui::Ui, config: &mut Configuration) {
    render_section_title(ui, "Darstellung");

    render_section_frame(ui, |ui| {
        let mut tile_size = config.tile_size;
        if render_slider_field(ui, "Kachelgröße", &mut tile_size, TILE_SIZE_RANGE) {
            editor::set_tile_size(config, tile_size);
        }

        let mut font_size = config.font_size;
        if render_slider_field(ui, "Schriftgröße", &mut font_size, FONT_SIZE_RANGE) {
            editor::set_font_size(config, font_size);
        }

        let mut radius = config.border_radius;
        if render_slider_field(ui, "Eckenradius", &mut radius, BORDER_RADIUS_RANGE) {
            editor::set_border_radius(config, radius);
        }

        ui.horizontal(|ui| {
            ui.add_sized(
                [130.0, 20.0],
                egui::Label::new(RichText::new("Anzahl Kacheln").color(TEXT_MUTED)),
            );
            let mut count = config.tile_count;
            egui::ComboBox::from_id_salt("tile_count")
                .selected_text(count.to_string())
                .show_ui(ui, |ui| {
                    for n in 1..=config.tiles.len() {
                        ui.selectable_value(&mut count, n, n.to_string());
                    }
                });
            if count != config.tile_count {
                editor::set_tile_count(config, count);
            }
        });
    });
}
