//! UI helper functions for settings rendering
//!
//! Provides reusable UI components for the settings panel.

use std::ops::RangeInclusive;

use eframe::egui::{self, RichText};

use crate::gui::theme::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_MUTED, TEXT_PRIMARY};

/// Render a section title
pub fn render_section_title(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).strong().color(TEXT_PRIMARY));
    ui.add_space(6.0);
}

/// Render a labeled slider in pixels; returns true if the value changed
pub fn render_slider_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: RangeInclusive<f32>,
) -> bool {
    ui.horizontal(|ui| {
        ui.add_sized(
            [130.0, 20.0],
            egui::Label::new(RichText::new(label).color(TEXT_MUTED)),
        );
        ui.add(
            egui::Slider::new(value, range)
                .step_by(1.0)
                .suffix(" px"),
        )
        .changed()
    })
    .inner
}

/// Render a status message (success or error)
pub fn render_status_message(ui: &mut egui::Ui, status: &Option<(String, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.label(RichText::new(msg).small().color(color));
    }
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}
