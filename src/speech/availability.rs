//! Speech command availability checking.

use std::process::{Command, Stdio};

use super::SpeechBackend;

/// Check whether `program` can be found on PATH
pub fn command_exists(program: &str) -> bool {
    #[cfg(target_os = "windows")]
    let finder = "where";
    #[cfg(not(target_os = "windows"))]
    let finder = "which";

    Command::new(finder)
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// First speech backend installed on this machine, in platform preference order
pub fn detect_backend() -> Option<SpeechBackend> {
    SpeechBackend::platform_candidates()
        .iter()
        .copied()
        .find(|backend| command_exists(backend.program()))
}
