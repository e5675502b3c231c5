//! Settings panel sections

mod display;
mod security;
mod tiles;

pub use display::render_settings_display;
pub use security::render_settings_security;
pub use tiles::render_settings_tiles;
