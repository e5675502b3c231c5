//! GUI module for the talkboard application
//!
//! This module provides a native egui window showing the tile board, plus the
//! PIN-protected settings panel. All state is owned by [`TalkboardApp`]; the
//! board is re-derived from the configuration every frame, so edits made in
//! the settings panel show up immediately.

pub mod app;
mod app_eframe;
mod board;
pub mod runner;
mod settings;
pub mod textures;
pub mod theme;

pub use app::{PanelAction, TalkboardApp};
pub use runner::{run_gui, GuiOptions};
