//! Settings module for the GUI
//!
//! Renders the PIN-protected settings panel where users can:
//! - Adjust tile size, font size, corner radius and the number of tiles
//! - Edit each tile's emoji, label, color and picture
//! - Change the settings PIN
//! - Save or reset the configuration

mod helpers;
mod panel;
mod pin;
mod sections;

pub use panel::render_settings;
