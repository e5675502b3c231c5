//! Main board application
//!
//! `TalkboardApp` is the single owner of the live [`Configuration`]. The
//! board view is derived from it by reference every frame, the settings
//! panel receives it by mutable reference, and persistence only happens
//! through explicit calls on the [`SettingsStore`].

use tracing::info;

use super::textures::TextureCache;
use crate::board::{self, BoardView};
use crate::config::Configuration;
use crate::editor::{EditorSession, PinCheck, UploadOutcome};
use crate::speech::SpeechTrigger;
use crate::store::SettingsStore;

/// Actions the settings panel asks the app to perform after rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    SubmitPin,
    Save,
    Close,
    /// Reset confirmed by the user
    Reset,
}

/// Main application state
pub struct TalkboardApp {
    pub(crate) config: Configuration,
    store: SettingsStore,
    speech: SpeechTrigger,
    pub(crate) editor: EditorSession,
    pub(crate) textures: TextureCache,
    /// Where settings are stored, shown in the settings footer
    pub(crate) storage_label: String,
}

impl TalkboardApp {
    /// Load the configuration from `store` and set up a session
    pub fn new(store: SettingsStore, speech: SpeechTrigger) -> Self {
        let config = store.load();
        info!(
            "Loaded board with {} tiles ({} visible)",
            config.tiles.len(),
            config.visible_tiles().len()
        );
        let editor = EditorSession::new(&config);
        Self {
            config,
            store,
            speech,
            editor,
            textures: TextureCache::default(),
            storage_label: String::new(),
        }
    }

    pub fn with_storage_label(mut self, label: impl Into<String>) -> Self {
        self.storage_label = label.into();
        self
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        &mut self.config
    }

    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorSession {
        &mut self.editor
    }

    /// Current board, derived from the live configuration
    pub fn board(&self) -> BoardView {
        board::render(&self.config)
    }

    /// Speak the label of the tile at display `position`
    pub fn activate_tile(&mut self, position: usize) -> Option<String> {
        let label = self.board().activate(position)?.to_string();
        self.speech.speak(&label);
        Some(label)
    }

    pub fn open_settings(&mut self) {
        self.editor.open();
    }

    /// Check the typed PIN against the configured one
    pub fn submit_pin(&mut self) -> PinCheck {
        let check = self.editor.gate.submit(&self.config.pin);
        if check == PinCheck::Rejected {
            info!("Wrong PIN entered for settings");
        }
        check
    }

    /// Close the panel. Unsaved edits stay on the board for this session.
    pub fn close_settings(&mut self) {
        self.editor.close();
    }

    /// Persist the live configuration and close the panel
    pub fn save_settings(&mut self) -> bool {
        let saved = self.store.save(&self.config);
        if saved {
            self.editor.mark_saved(&self.config);
        }
        self.editor.close();
        saved
    }

    /// Replace the live configuration with persisted defaults
    pub fn reset_settings(&mut self) {
        self.config = self.store.reset();
        self.editor.reset(&self.config);
        self.editor.status = Some(("Standardwerte wiederhergestellt".to_string(), false));
        self.textures.clear();
    }

    /// Apply finished image uploads
    pub fn poll_uploads(&mut self) -> Vec<UploadOutcome> {
        self.editor.poll_uploads(&mut self.config)
    }

    /// Whether the board shows edits that were never saved
    pub fn has_unsaved_changes(&self) -> bool {
        self.editor.is_dirty(&self.config)
    }

    pub(crate) fn handle_panel_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::None => {}
            PanelAction::SubmitPin => {
                self.submit_pin();
            }
            PanelAction::Save => {
                self.save_settings();
            }
            PanelAction::Close => self.close_settings(),
            PanelAction::Reset => self.reset_settings(),
        }
    }
}
