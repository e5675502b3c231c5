//! eframe::App implementation for TalkboardApp
//!
//! Contains the main update loop that runs every frame.

use std::time::Duration;

use eframe::egui::{self, RichText};

use super::app::TalkboardApp;
use super::board::render_board;
use super::settings::render_settings;
use super::theme::{self, ACCENT_YELLOW, BG_PRIMARY, TEXT_DIM, TEXT_PRIMARY};
use crate::editor::UploadOutcome;

/// How often to poll while an image is still being read
const UPLOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl eframe::App for TalkboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        theme::apply_theme(ctx);

        // Finished uploads change tile pictures
        let outcomes = self.poll_uploads();
        if outcomes
            .iter()
            .any(|o| matches!(o, UploadOutcome::Applied { .. }))
        {
            ctx.request_repaint();
        }
        if self.editor.uploads.has_pending() {
            ctx.request_repaint_after(UPLOAD_POLL_INTERVAL);
        }

        self.render_header(ctx);

        let view = self.board();
        let activated = egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(24.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| render_board(ui, &view, &mut self.textures))
                    .inner
            })
            .inner;

        if let Some(position) = activated {
            self.activate_tile(position);
        }

        if self.editor.gate.state().is_open() {
            let action = render_settings(
                ctx,
                &mut self.config,
                &mut self.editor,
                &self.storage_label,
            );
            self.handle_panel_action(action);
        }
    }
}

impl TalkboardApp {
    /// Top bar with the settings button
    fn render_header(&mut self, ctx: &egui::Context) {
        let unsaved = self.has_unsaved_changes();
        egui::TopBottomPanel::top("board_header")
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Talkboard")
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    if unsaved {
                        ui.label(
                            RichText::new("● nicht gespeichert")
                                .small()
                                .color(ACCENT_YELLOW),
                        );
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button(RichText::new("⚙ Einstellungen").color(TEXT_DIM))
                            .clicked()
                        {
                            self.open_settings();
                        }
                    });
                });
            });
    }
}
