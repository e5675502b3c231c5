use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use talkboard::gui::GuiOptions;
use talkboard::speech::SpeechChoice;
use talkboard::store::{FileStore, SettingsStore};

mod cli;

#[derive(Parser)]
#[command(name = "talkboard")]
#[command(about = "Talkboard - tap-to-speak communication board")]
#[command(version)]
struct Cli {
    /// Directory for saved settings (defaults to the platform data directory)
    #[arg(short, long, global = true, env = "TALKBOARD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Speech backend: auto, none, say, espeak-ng, espeak, spd-say, powershell
    #[arg(short, long, global = true, default_value = "auto")]
    speech: SpeechChoice,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the board window (default)
    Gui {
        /// Keep settings in memory only, nothing is written to disk
        #[arg(long)]
        ephemeral: bool,
    },

    /// Print the effective settings as JSON
    Show {
        /// Print a readable tile list instead of JSON
        #[arg(long)]
        summary: bool,
    },

    /// Restore the default settings and tiles
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Speak a text with the configured speech backend
    Say {
        /// Text to speak
        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let data_dir = cli.data_dir.unwrap_or_else(FileStore::default_dir);

    match cli.command {
        Some(Commands::Show { summary }) => {
            cli::show::show_command(&SettingsStore::in_dir(&data_dir), summary)?;
        }
        Some(Commands::Reset { yes }) => {
            cli::reset::reset_command(&mut SettingsStore::in_dir(&data_dir), yes)?;
        }
        Some(Commands::Say { text }) => {
            cli::say::say_command(&text, cli.speech)?;
        }
        Some(Commands::Gui { ephemeral }) => {
            talkboard::gui::run_gui(GuiOptions {
                data_dir,
                ephemeral,
                speech: cli.speech,
            })?;
        }
        None => {
            // Default: run the GUI
            talkboard::gui::run_gui(GuiOptions {
                data_dir,
                ephemeral: false,
                speech: cli.speech,
            })?;
        }
    }

    Ok(())
}
