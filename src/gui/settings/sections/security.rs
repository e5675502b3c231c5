//! PIN change section

use eframe::egui::{self, RichText};

use crate::config::Configuration;
use crate::editor::{self, EditorSession};
use crate::gui::theme::TEXT_MUTED;

use super::super::helpers::{render_section_frame, render_section_title};

pub fn render_settings_security(
    ui: &mut egui::Ui,
    config: &mut Configuration,
    session: &mut EditorSession,
) {
    render_section_title(ui, "Zugang");

    render_section_frame(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Neuer PIN").color(TEXT_MUTED));
            ui.add(
                egui::TextEdit::singleline(&mut session.new_pin)
                    .password(true)
                    .desired_width(120.0),
            );
            let can_apply = !session.new_pin.trim().is_empty();
            if ui
                .add_enabled(can_apply, egui::Button::new("PIN ändern"))
                .clicked()
                && editor::set_pin(config, &session.new_pin)
            {
                session.new_pin.clear();
                session.status = Some(("PIN geändert, bitte speichern".to_string(), false));
            }
        });
    });
}
