//! Say command implementation

use anyhow::{bail, Result};
use talkboard::speech::{CommandSpeaker, SpeechBackend, SpeechChoice, Speaker, Utterance};

/// Speak `text` once and wait for it to finish
pub fn say_command(text: &str, choice: SpeechChoice) -> Result<()> {
    let mut speaker = match choice {
        SpeechChoice::Auto => CommandSpeaker::detect(),
        SpeechChoice::Backend(backend) => CommandSpeaker::new(backend),
        SpeechChoice::Off => bail!("Speech output is disabled"),
    };

    if !speaker.is_available() {
        let tried: Vec<String> = SpeechBackend::platform_candidates()
            .iter()
            .map(|b| b.to_string())
            .collect();
        bail!("No speech backend found (tried: {})", tried.join(", "));
    }

    speaker.speak(&Utterance::new(text))?;
    speaker.wait();
    Ok(())
}
