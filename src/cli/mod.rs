//! CLI command implementations

pub mod reset;
pub mod say;
pub mod show;
