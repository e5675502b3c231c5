//! Per-tile editor rows

use std::path::PathBuf;

use eframe::egui::{self, Rect, RichText, Stroke};

use crate::board::{parse_hex_color, Rgb};
use crate::config::Configuration;
use crate::editor::{self, EditorSession};
use crate::gui::theme::{ACCENT_BLUE, TEXT_MUTED};

use super::super::helpers::{render_section_frame, render_section_title, render_status_message};

/// Render one row per tile; edits apply to the board immediately.
///
/// Dropping an image file onto a row uploads it for that tile.
pub fn render_settings_tiles(
    ui: &mut egui::Ui,
    config: &mut Configuration,
    session: &mut EditorSession,
) {
    render_section_title(ui, "Kacheln");
    ui.label(
        RichText::new("Bilddatei: Pfad eingeben oder auf die Zeile ziehen")
            .small()
            .color(TEXT_MUTED),
    );
    ui.add_space(4.0);

    let mut row_rects: Vec<(usize, Rect)> = Vec::with_capacity(config.tiles.len());

    for index in 0..config.tiles.len() {
        let rect = render_section_frame(ui, |ui| render_tile_row(ui, config, session, index));
        row_rects.push((index, rect));
        ui.add_space(4.0);
    }

    handle_dropped_files(ui, session, &row_rects);
}

fn render_tile_row(
    ui: &mut egui::Ui,
    config: &mut Configuration,
    session: &mut EditorSession,
    index: usize,
) -> Rect {
    let visible = index < config.tile_count;

    ui.horizontal(|ui| {
        let number = RichText::new(format!("{:>2}", index + 1)).monospace();
        ui.label(if visible { number } else { number.color(TEXT_MUTED) });

        let mut emoji = config.tiles[index].emoji.clone();
        if ui
            .add(egui::TextEdit::singleline(&mut emoji).desired_width(40.0))
            .changed()
        {
            editor::set_emoji(config, index, &emoji);
        }

        let mut text = config.tiles[index].text.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut text)
                    .desired_width(140.0)
                    .hint_text("Text"),
            )
            .changed()
        {
            editor::set_text(config, index, &text);
        }

        let current = parse_hex_color(&config.tiles[index].color).unwrap_or(Rgb(204, 204, 204));
        let mut rgb = [current.0, current.1, current.2];
        if ui.color_edit_button_srgb(&mut rgb).changed() {
            editor::set_color(config, index, Rgb(rgb[0], rgb[1], rgb[2]));
        }

        ui.separator();

        let path = session.image_paths.entry(index).or_default();
        let response = ui.add(
            egui::TextEdit::singleline(path)
                .desired_width(150.0)
                .hint_text("Bild…"),
        );
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui.small_button("Laden").clicked();
        if entered || clicked {
            session.start_upload_from_input(index);
        }

        if config.tiles[index].has_image()
            && ui
                .small_button("✕ Bild")
                .on_hover_text("Bild entfernen")
                .clicked()
        {
            editor::clear_image(config, index);
            session.image_status.remove(&index);
        }
    });

    render_status_message(ui, &session.image_status.get(&index).cloned());
    ui.min_rect()
}

/// Upload files dropped onto a row; highlight the row while hovering
fn handle_dropped_files(ui: &mut egui::Ui, session: &mut EditorSession, rows: &[(usize, Rect)]) {
    let (hovering, dropped, pointer) = ui.ctx().input(|i| {
        (
            !i.raw.hovered_files.is_empty(),
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect::<Vec<PathBuf>>(),
            i.pointer.latest_pos(),
        )
    });

    let Some(pointer) = pointer else {
        return;
    };
    let Some(&(slot, rect)) = rows.iter().find(|(_, rect)| rect.contains(pointer)) else {
        return;
    };

    if hovering {
        ui.painter()
            .rect_stroke(rect, 6.0, Stroke::new(2.0, ACCENT_BLUE), egui::StrokeKind::Outside);
    }

    if let Some(path) = dropped.into_iter().next() {
        session.start_upload(slot, path);
    }
}
