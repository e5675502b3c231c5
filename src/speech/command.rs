//! Speech through the platform's speech command

use std::fmt;
use std::process::{Child, Command, Stdio};
use std::str::FromStr;

use tracing::{debug, info};

use super::{detect_backend, SpeechError, Speaker, Utterance};

/// Base words-per-minute that a rate of 1.0 maps to
const BASE_WPM: f32 = 180.0;

/// Supported speech commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechBackend {
    /// macOS `say`
    Say,
    EspeakNg,
    Espeak,
    /// speech-dispatcher client
    SpdSay,
    /// Windows `System.Speech` through PowerShell
    PowerShell,
}

impl SpeechBackend {
    pub const ALL: [SpeechBackend; 5] = [
        SpeechBackend::Say,
        SpeechBackend::EspeakNg,
        SpeechBackend::Espeak,
        SpeechBackend::SpdSay,
        SpeechBackend::PowerShell,
    ];

    /// Backends worth probing on the current platform
    pub fn platform_candidates() -> &'static [SpeechBackend] {
        #[cfg(target_os = "macos")]
        return &[SpeechBackend::Say];
        #[cfg(target_os = "windows")]
        return &[SpeechBackend::PowerShell];
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return &[
            SpeechBackend::EspeakNg,
            SpeechBackend::Espeak,
            SpeechBackend::SpdSay,
        ];
    }

    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            SpeechBackend::Say => "say",
            SpeechBackend::EspeakNg => "espeak-ng",
            SpeechBackend::Espeak => "espeak",
            SpeechBackend::SpdSay => "spd-say",
            SpeechBackend::PowerShell => "powershell",
        }
    }

    /// Command-line arguments that speak `utterance`
    pub fn args(&self, utterance: &Utterance) -> Vec<String> {
        let language = utterance
            .locale
            .split(['-', '_'])
            .next()
            .unwrap_or("de")
            .to_lowercase();
        let wpm = (BASE_WPM * utterance.rate).round() as i32;

        match self {
            SpeechBackend::Say => {
                let mut args = Vec::new();
                if let Some(voice) = say_voice(&language) {
                    args.push("-v".to_string());
                    args.push(voice.to_string());
                }
                args.push("-r".to_string());
                args.push(wpm.to_string());
                args.push(utterance.text.clone());
                args
            }
            SpeechBackend::EspeakNg | SpeechBackend::Espeak => vec![
                "-v".to_string(),
                language,
                "-s".to_string(),
                wpm.to_string(),
                "-p".to_string(),
                ((50.0 * utterance.pitch).round().clamp(0.0, 99.0) as i32).to_string(),
                utterance.text.clone(),
            ],
            SpeechBackend::SpdSay => vec![
                "-l".to_string(),
                language,
                "-r".to_string(),
                relative_percent(utterance.rate).to_string(),
                "-p".to_string(),
                relative_percent(utterance.pitch).to_string(),
                utterance.text.clone(),
            ],
            SpeechBackend::PowerShell => {
                let rate = ((utterance.rate - 1.0) * 10.0).round().clamp(-10.0, 10.0) as i32;
                let script = format!(
                    "Add-Type -AssemblyName System.Speech; \
                     $s = New-Object System.Speech.Synthesis.SpeechSynthesizer; \
                     $s.Rate = {rate}; \
                     try {{ $s.SelectVoiceByHints('NotSet', 'NotSet', 0, [System.Globalization.CultureInfo]'{locale}') }} catch {{}}; \
                     $s.Speak('{text}')",
                    locale = ps_quote(&utterance.locale),
                    text = ps_quote(&utterance.text),
                );
                vec![
                    "-NoProfile".to_string(),
                    "-NonInteractive".to_string(),
                    "-Command".to_string(),
                    script,
                ]
            }
        }
    }
}

impl fmt::Display for SpeechBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

impl FromStr for SpeechBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpeechBackend::ALL
            .iter()
            .copied()
            .find(|b| b.program().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown speech backend: {s}"))
    }
}

/// macOS voice for a language code
fn say_voice(language: &str) -> Option<&'static str> {
    match language {
        "de" => Some("Anna"),
        "en" => Some("Samantha"),
        "fr" => Some("Thomas"),
        _ => None,
    }
}

/// Map a 1.0-centered factor onto speech-dispatcher's -100..100 scale
fn relative_percent(factor: f32) -> i32 {
    ((factor - 1.0) * 100.0).round().clamp(-100.0, 100.0) as i32
}

/// Escape for a single-quoted PowerShell string
fn ps_quote(s: &str) -> String {
    s.replace('\'', "''")
}

/// Speaks by spawning the backend's command; one child at a time
pub struct CommandSpeaker {
    backend: Option<SpeechBackend>,
    current: Option<Child>,
}

impl CommandSpeaker {
    pub fn new(backend: SpeechBackend) -> Self {
        Self {
            backend: Some(backend),
            current: None,
        }
    }

    /// Use the first backend found on this machine, if any
    pub fn detect() -> Self {
        let backend = detect_backend();
        match backend {
            Some(b) => info!("Using speech backend: {}", b),
            None => info!("No speech backend found, tiles will be silent"),
        }
        Self {
            backend,
            current: None,
        }
    }

    pub fn backend(&self) -> Option<SpeechBackend> {
        self.backend
    }

    /// Block until the current utterance finishes
    pub fn wait(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.wait();
        }
    }
}

impl Speaker for CommandSpeaker {
    fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            // Already finished children only need reaping
            if let Ok(None) = child.try_wait() {
                debug!("Cancelling utterance in progress");
                let _ = child.kill();
            }
            let _ = child.wait();
        }

        // speech-dispatcher queues speech server-side, killing the client is not enough
        if self.backend == Some(SpeechBackend::SpdSay) {
            let _ = Command::new("spd-say")
                .arg("--cancel")
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
        }
    }

    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
        let Some(backend) = self.backend else {
            return Ok(());
        };

        let child = Command::new(backend.program())
            .args(backend.args(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: backend.program().to_string(),
                source,
            })?;

        self.current = Some(child);
        Ok(())
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
