//! GUI runner - launches the talkboard window

use std::path::PathBuf;

use anyhow::Result;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing::info;

use super::app::TalkboardApp;
use crate::speech::{SpeechChoice, SpeechTrigger};
use crate::store::{FileStore, MemoryStore, SettingsStore, SETTINGS_KEY};

/// How the GUI should be set up
#[derive(Debug, Clone)]
pub struct GuiOptions {
    /// Directory holding the settings file
    pub data_dir: PathBuf,
    /// Keep settings in memory only (nothing is written to disk)
    pub ephemeral: bool,
    pub speech: SpeechChoice,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            data_dir: FileStore::default_dir(),
            ephemeral: false,
            speech: SpeechChoice::Auto,
        }
    }
}

/// Run the main GUI application
pub fn run_gui(options: GuiOptions) -> Result<()> {
    let (store, storage_label) = if options.ephemeral {
        info!("[talkboard] Settings are kept in memory only");
        (SettingsStore::new(MemoryStore::new()), "Arbeitsspeicher".to_string())
    } else {
        let file_store = FileStore::new(&options.data_dir);
        let label = file_store.path_for(SETTINGS_KEY).display().to_string();
        info!("[talkboard] Settings file: {}", label);
        (SettingsStore::new(file_store), label)
    };

    let app = TalkboardApp::new(store, SpeechTrigger::from_choice(options.speech))
        .with_storage_label(storage_label);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Talkboard")
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([480.0, 360.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "talkboard",
        native_options,
        Box::new(|cc| {
            configure_fonts(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}

/// Configure fonts with system fallbacks for emoji and umlauts
fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    // Each entry: (name, path) - tried in order, missing files are skipped
    #[cfg(target_os = "macos")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("symbols", "/System/Library/Fonts/Apple Symbols.ttf"),
        ("arial_unicode", "/System/Library/Fonts/Supplemental/Arial Unicode.ttf"),
    ];

    #[cfg(target_os = "windows")]
    let font_fallbacks: &[(&str, &str)] = &[
        ("segoe_emoji", "C:\\Windows\\Fonts\\seguiemj.ttf"),
        ("symbols", "C:\\Windows\\Fonts\\seguisym.ttf"),
    ];

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let font_fallbacks: &[(&str, &str)] = &[
        ("noto_emoji", "/usr/share/fonts/truetype/noto/NotoEmoji-Regular.ttf"),
        ("symbols", "/usr/share/fonts/truetype/noto/NotoSansSymbols2-Regular.ttf"),
        ("dejavu", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    ];

    for (name, path) in font_fallbacks {
        if let Ok(font_data) = std::fs::read(path) {
            fonts
                .font_data
                .insert((*name).to_owned(), FontData::from_owned(font_data).into());

            if let Some(family) = fonts.families.get_mut(&FontFamily::Proportional) {
                family.push((*name).to_owned());
            }

            info!("[talkboard] Loaded fallback font '{}' from: {}", name, path);
        }
    }

    ctx.set_fonts(fonts);
}
