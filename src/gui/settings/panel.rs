//! Main settings panel rendering
//!
//! Contains the top-level render function for the settings modal.

use eframe::egui::{self, RichText, ScrollArea};

use crate::config::Configuration;
use crate::editor::{EditorSession, GateState};
use crate::gui::app::PanelAction;
use crate::gui::theme::{
    ACCENT_BLUE, ACCENT_RED, BG_BACKDROP, BG_PRIMARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY,
};

use super::helpers::render_status_message;
use super::pin::render_pin_entry;
use super::sections::{render_settings_display, render_settings_security, render_settings_tiles};

/// Render the settings modal.
///
/// Closing via the backdrop or Escape reports [`PanelAction::Close`].
pub fn render_settings(
    ctx: &egui::Context,
    config: &mut Configuration,
    editor: &mut EditorSession,
    storage_label: &str,
) -> PanelAction {
    let mut action = PanelAction::None;

    let modal = egui::Modal::new(egui::Id::new("settings_panel"))
        .backdrop_color(BG_BACKDROP)
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(BG_PRIMARY)
                .corner_radius(12)
                .inner_margin(20.0),
        )
        .show(ctx, |ui| {
            let unlocked = editor.gate.state() == GateState::Unlocked;
            ui.set_width(if unlocked { 680.0 } else { 320.0 });

            // Header
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("⚙ Einstellungen")
                        .size(18.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(RichText::new("✕ Schließen").color(TEXT_DIM))
                        .clicked()
                    {
                        action = PanelAction::Close;
                    }
                });
            });
            ui.add_space(12.0);

            match editor.gate.state() {
                GateState::Locked => {
                    if render_pin_entry(ui, &mut editor.gate) {
                        action = PanelAction::SubmitPin;
                    }
                }
                GateState::Unlocked => {
                    let max_height = ui.ctx().screen_rect().height() * 0.7;
                    ScrollArea::vertical()
                        .max_height(max_height)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            render_settings_display(ui, config);
                            ui.add_space(12.0);
                            render_settings_tiles(ui, config, editor);
                            ui.add_space(12.0);
                            render_settings_security(ui, config, editor);
                        });

                    ui.add_space(12.0);
                    ui.separator();
                    if let Some(footer_action) = render_footer(ui, editor, storage_label) {
                        action = footer_action;
                    }
                }
                GateState::Closed => {}
            }
        });

    if editor.confirm_reset && render_reset_confirmation(ctx, editor) {
        action = PanelAction::Reset;
    }

    if action == PanelAction::None && modal.should_close() && !editor.confirm_reset {
        action = PanelAction::Close;
    }

    action
}

/// Save / reset buttons and storage info
fn render_footer(
    ui: &mut egui::Ui,
    editor: &mut EditorSession,
    storage_label: &str,
) -> Option<PanelAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("💾 Speichern").strong().color(ACCENT_BLUE))
            .clicked()
        {
            action = Some(PanelAction::Save);
        }
        if ui
            .button(RichText::new("↺ Zurücksetzen").color(ACCENT_RED))
            .clicked()
        {
            editor.confirm_reset = true;
        }
        render_status_message(ui, &editor.status);
    });

    if !storage_label.is_empty() {
        ui.label(
            RichText::new(format!("Gespeichert in: {}", storage_label))
                .small()
                .color(TEXT_MUTED),
        );
    }

    action
}

/// Ask before restoring defaults. Returns true once confirmed.
fn render_reset_confirmation(ctx: &egui::Context, editor: &mut EditorSession) -> bool {
    let mut confirmed = false;

    let modal = egui::Modal::new(egui::Id::new("settings_reset_confirm")).show(ctx, |ui| {
        ui.set_width(300.0);
        ui.label(
            RichText::new("Alle Einstellungen und Kacheln auf die Standardwerte zurücksetzen?")
                .color(TEXT_PRIMARY),
        );
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("Zurücksetzen").color(ACCENT_RED))
                .clicked()
            {
                confirmed = true;
            }
            if ui.button("Abbrechen").clicked() {
                editor.confirm_reset = false;
            }
        });
    });

    if modal.should_close() {
        editor.confirm_reset = false;
    }

    confirmed
}
