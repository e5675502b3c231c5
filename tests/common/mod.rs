//! Shared test utilities for talkboard integration tests

#![allow(dead_code)]

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use talkboard::gui::TalkboardApp;
use talkboard::speech::{Speaker, SpeechError, SpeechTrigger, Utterance};
use talkboard::store::{MemoryStore, SettingsStore};

/// Speaker that records requests instead of producing sound
#[derive(Debug, Default, Clone)]
pub struct RecordingSpeaker {
    spoken: Arc<Mutex<Vec<Utterance>>>,
    cancels: Arc<Mutex<usize>>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts requested so far, oldest first
    pub fn spoken(&self) -> Vec<String> {
        self.utterances().into_iter().map(|u| u.text).collect()
    }

    pub fn utterances(&self) -> Vec<Utterance> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn cancel_count(&self) -> usize {
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

/// App backed by an in-memory store and a recording speaker
pub fn create_test_app() -> (TalkboardApp, MemoryStore, RecordingSpeaker) {
    create_test_app_with(MemoryStore::new())
}

/// App backed by the given in-memory store
pub fn create_test_app_with(store: MemoryStore) -> (TalkboardApp, MemoryStore, RecordingSpeaker) {
    let speaker = RecordingSpeaker::new();
    let app = TalkboardApp::new(
        SettingsStore::new(store.clone()),
        SpeechTrigger::new(speaker.clone()),
    );
    (app, store, speaker)
}

/// Encode a small solid-color PNG
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("Failed to encode test PNG");
    bytes
}
