//! Speech output for tile labels
//!
//! [`SpeechTrigger`] is what the board calls when a tile is activated. It
//! stops whatever is still being spoken and hands the new label to a
//! [`Speaker`] with a fixed rate, pitch and locale. Speaking is
//! fire-and-forget; failures are only logged.

mod availability;
mod command;

pub use availability::{command_exists, detect_backend};
pub use command::{CommandSpeaker, SpeechBackend};

use tracing::{debug, info, warn};

/// Speaking rate relative to the platform default
pub const SPEECH_RATE: f32 = 0.9;
/// Pitch relative to the platform default
pub const SPEECH_PITCH: f32 = 1.1;
/// Locale the labels are spoken in
pub const SPEECH_LOCALE: &str = "de-DE";

/// Error type for speech output
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// One synthesis request
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub locale: String,
}

impl Utterance {
    /// Request with the fixed board voice settings
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            locale: SPEECH_LOCALE.to_string(),
        }
    }
}

/// Platform text-to-speech capability
pub trait Speaker {
    /// Whether speech output can be produced at all
    fn is_available(&self) -> bool;

    /// Stop the utterance in progress, if any
    fn cancel(&mut self);

    /// Begin speaking; returns without waiting for completion
    fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// Speaker used when no speech capability exists
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn is_available(&self) -> bool {
        false
    }

    fn cancel(&mut self) {}

    fn speak(&mut self, _utterance: &Utterance) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// Which speaker to use, as chosen on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeechChoice {
    /// First backend found on this machine
    #[default]
    Auto,
    /// No speech output
    Off,
    Backend(SpeechBackend),
}

impl std::str::FromStr for SpeechChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SpeechChoice::Auto),
            "none" | "off" => Ok(SpeechChoice::Off),
            other => other.parse().map(SpeechChoice::Backend),
        }
    }
}

/// Speaks tile labels
pub struct SpeechTrigger {
    speaker: Box<dyn Speaker>,
    warned_unavailable: bool,
}

impl SpeechTrigger {
    pub fn new(speaker: impl Speaker + 'static) -> Self {
        Self {
            speaker: Box::new(speaker),
            warned_unavailable: false,
        }
    }

    /// Trigger that never produces sound
    pub fn silent() -> Self {
        Self::new(NullSpeaker)
    }

    /// Trigger for a command-line speech choice
    pub fn from_choice(choice: SpeechChoice) -> Self {
        match choice {
            SpeechChoice::Auto => Self::new(CommandSpeaker::detect()),
            SpeechChoice::Off => {
                info!("Speech output disabled");
                Self::silent()
            }
            SpeechChoice::Backend(backend) => {
                info!("Using speech backend: {}", backend);
                Self::new(CommandSpeaker::new(backend))
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.speaker.is_available()
    }

    /// Cancel any utterance in progress and speak `label`
    pub fn speak(&mut self, label: &str) {
        if label.trim().is_empty() {
            return;
        }

        if !self.speaker.is_available() {
            if !self.warned_unavailable {
                debug!("No speech capability available, tile labels will not be spoken");
                self.warned_unavailable = true;
            }
            return;
        }

        self.speaker.cancel();
        if let Err(e) = self.speaker.speak(&Utterance::new(label)) {
            warn!("Failed to speak \"{}\": {}", label, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Default, Clone)]
    struct RecordingSpeaker {
        spoken: Arc<Mutex<Vec<Utterance>>>,
        cancels: Arc<Mutex<usize>>,
    }

    impl RecordingSpeaker {
        fn utterances(&self) -> Vec<Utterance> {
            self.spoken.lock().unwrap().clone()
        }

        fn spoken(&self) -> Vec<String> {
            self.utterances().into_iter().map(|u| u.text).collect()
        }

        fn cancel_count(&self) -> usize {
            *self.cancels.lock().unwrap()
        }
    }

    impl Speaker for RecordingSpeaker {
        fn is_available(&self) -> bool {
            true
        }

        fn cancel(&mut self) {
            *self.cancels.lock().unwrap() += 1;
        }

        fn speak(&mut self, utterance: &Utterance) -> Result<(), SpeechError> {
            self.spoken.lock().unwrap().push(utterance.clone());
            Ok(())
        }
    }

    #[test]
    fn test_speak_cancels_before_each_request() {
        let speaker = RecordingSpeaker::default();
        let mut trigger = SpeechTrigger::new(speaker.clone());

        trigger.speak("Essen");
        trigger.speak("Trinken");

        assert_eq!(speaker.spoken(), vec!["Essen", "Trinken"]);
        assert_eq!(speaker.cancel_count(), 2);
    }

    #[test]
    fn test_fixed_voice_settings() {
        let speaker = RecordingSpeaker::default();
        let mut trigger = SpeechTrigger::new(speaker.clone());
        trigger.speak("Mama");

        let utterance = &speaker.utterances()[0];
        assert_eq!(utterance.rate, SPEECH_RATE);
        assert_eq!(utterance.pitch, 1.1);
        assert_eq!(utterance.locale, "de-DE");
    }

    #[test]
    fn test_blank_labels_are_not_spoken() {
        let speaker = RecordingSpeaker::default();
        let mut trigger = SpeechTrigger::new(speaker.clone());
        trigger.speak("   ");
        assert!(speaker.spoken().is_empty());
        assert_eq!(speaker.cancel_count(), 0);
    }

    #[test]
    fn test_label_is_spoken_verbatim() {
        let speaker = RecordingSpeaker::default();
        let mut trigger = SpeechTrigger::new(speaker.clone());
        trigger.speak(" Guten Morgen ");
        assert_eq!(speaker.spoken(), vec![" Guten Morgen "]);
    }

    #[test]
    fn test_speech_choice_from_str() {
        assert_eq!("auto".parse::<SpeechChoice>(), Ok(SpeechChoice::Auto));
        assert_eq!("None".parse::<SpeechChoice>(), Ok(SpeechChoice::Off));
        assert_eq!(
            "spd-say".parse::<SpeechChoice>(),
            Ok(SpeechChoice::Backend(SpeechBackend::SpdSay))
        );
        assert!("festival".parse::<SpeechChoice>().is_err());
    }

    #[test]
    fn test_missing_capability_is_silent() {
        let mut trigger = SpeechTrigger::silent();
        assert!(!trigger.is_available());
        trigger.speak("Hilfe");
        trigger.speak("Hilfe");
    }
}
