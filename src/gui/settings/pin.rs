//! PIN entry shown while the panel is locked

use eframe::egui::{self, RichText};

use crate::editor::PinGate;
use crate::gui::theme::{ACCENT_RED, TEXT_MUTED};

/// Render the PIN field. Returns true when the user submits it.
pub fn render_pin_entry(ui: &mut egui::Ui, gate: &mut PinGate) -> bool {
    ui.label(RichText::new("Bitte PIN eingeben").color(TEXT_MUTED));
    ui.add_space(6.0);

    let mut submitted = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut gate.input)
                .password(true)
                .desired_width(160.0)
                .hint_text("PIN"),
        );
        // Focus the field as soon as the panel opens
        if !response.has_focus() && gate.input.is_empty() && gate.error.is_none() {
            response.request_focus();
        }

        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui.button("Entsperren").clicked();
        if entered || clicked {
            submitted = true;
        }
    });

    if let Some(error) = &gate.error {
        ui.add_space(6.0);
        ui.label(RichText::new(format!("⚠ {}", error)).color(ACCENT_RED));
    }

    submitted
}
