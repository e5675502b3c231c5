//! Reset command implementation

use anyhow::{bail, Context, Result};
use talkboard::Configuration;
use talkboard::store::SettingsStore;
use tracing::info;

/// Restore and persist the default configuration
pub fn reset_command(store: &mut SettingsStore, yes: bool) -> Result<()> {
    if !yes {
        bail!("Refusing to reset without confirmation. Re-run with --yes.");
    }

    store
        .try_save(&Configuration::default())
        .context("Failed to write default settings")?;

    info!("Settings reset to defaults");
    println!("Settings reset to defaults.");
    Ok(())
}
