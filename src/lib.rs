//! Talkboard - tap-to-speak communication board
//!
//! A grid of tiles (emoji or picture plus a label) that speak their label
//! when activated, with a PIN-protected settings panel to adjust tile
//! count, size, font size, corner radius and each tile's content.
//!
//! ## Layout
//!
//! - [`config`]: the [`Configuration`] document and its defaults
//! - [`store`]: loading, merging and persisting the configuration
//! - [`board`]: the view model projected from the configuration
//! - [`editor`]: PIN gate, live setters and image uploads
//! - [`speech`]: speaking tile labels through the platform
//! - [`gui`]: the egui application tying it all together

pub mod board;
pub mod config;
pub mod data_url;
pub mod editor;
pub mod gui;
pub mod speech;
pub mod store;

pub use config::{Configuration, Tile};
