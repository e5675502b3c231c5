//! Image uploads for tile slots
//!
//! Reading and encoding a picture runs on a worker thread; the result comes
//! back over a channel that the GUI polls every frame. Each slot carries a
//! monotonically increasing request token, and a completed read is applied
//! only if no newer upload for the same slot has started since.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing::{debug, info, warn};

use crate::config::Configuration;
use crate::data_url::{self, DataUrlError};

/// Error type for a single upload
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Encode(#[from] DataUrlError),
}

/// Identifies one upload request for one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTicket {
    pub slot: usize,
    pub token: u64,
}

/// Finished read, as sent back by the worker
#[derive(Debug)]
pub struct UploadCompletion {
    pub ticket: UploadTicket,
    pub result: Result<String, UploadError>,
}

/// What happened to a completion once it reached the configuration
#[derive(Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Picture stored on the tile
    Applied { slot: usize },
    /// A newer upload for the slot exists; the result was dropped
    Stale { slot: usize },
    /// Reading or encoding failed; the tile is unchanged
    Failed { slot: usize, message: String },
    /// The slot no longer exists
    MissingSlot { slot: usize },
}

/// Read `path` and encode it as a data URL.
///
/// Files above [`data_url::MAX_IMAGE_BYTES`] are refused before any of
/// their content is read.
pub fn read_image_file(path: &Path) -> Result<String, UploadError> {
    let read_error = |source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(read_error)?.len();
    if size > data_url::MAX_IMAGE_BYTES as u64 {
        return Err(DataUrlError::TooLarge {
            size: usize::try_from(size).unwrap_or(usize::MAX),
            limit: data_url::MAX_IMAGE_BYTES,
        }
        .into());
    }

    let bytes = std::fs::read(path).map_err(read_error)?;
    Ok(data_url::encode_image(&bytes)?)
}

/// Tracks in-flight uploads and the latest token per slot
pub struct ImageUploads {
    next_token: u64,
    latest: HashMap<usize, u64>,
    tx: Sender<UploadCompletion>,
    rx: Receiver<UploadCompletion>,
}

impl Default for ImageUploads {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageUploads {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            next_token: 0,
            latest: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Register a new request for `slot`, superseding any earlier one
    pub fn begin(&mut self, slot: usize) -> UploadTicket {
        self.next_token += 1;
        self.latest.insert(slot, self.next_token);
        UploadTicket {
            slot,
            token: self.next_token,
        }
    }

    /// Whether `slot` has a request that has not completed yet
    pub fn is_pending(&self, slot: usize) -> bool {
        self.latest.contains_key(&slot)
    }

    /// Whether any slot is still waiting for a read to finish
    pub fn has_pending(&self) -> bool {
        !self.latest.is_empty()
    }

    /// Start reading `path` in the background for `slot`
    pub fn start(&mut self, slot: usize, path: PathBuf) -> UploadTicket {
        let ticket = self.begin(slot);
        let tx = self.tx.clone();
        info!("Loading image for tile {} from {}", slot + 1, path.display());

        std::thread::spawn(move || {
            let result = read_image_file(&path);
            // Receiver gone means the app is shutting down
            let _ = tx.send(UploadCompletion { ticket, result });
        });

        ticket
    }

    /// Drop every pending request; late completions will be stale
    pub fn invalidate_all(&mut self) {
        self.latest.clear();
    }

    /// Apply one completion to `config` if its ticket is still current
    pub fn apply(
        &mut self,
        completion: UploadCompletion,
        config: &mut Configuration,
    ) -> UploadOutcome {
        let UploadTicket { slot, token } = completion.ticket;

        if self.latest.get(&slot) != Some(&token) {
            debug!("Discarding stale image upload for tile {} (token {})", slot + 1, token);
            return UploadOutcome::Stale { slot };
        }
        self.latest.remove(&slot);

        let data_url = match completion.result {
            Ok(url) => url,
            Err(e) => {
                warn!("Image upload for tile {} failed: {}", slot + 1, e);
                return UploadOutcome::Failed {
                    slot,
                    message: e.to_string(),
                };
            }
        };

        match config.tiles.get_mut(slot) {
            Some(tile) => {
                tile.image = Some(data_url);
                UploadOutcome::Applied { slot }
            }
            None => {
                warn!("Image upload finished for missing tile {}", slot + 1);
                UploadOutcome::MissingSlot { slot }
            }
        }
    }

    /// Apply every completion that has arrived so far (non-blocking)
    pub fn poll(&mut self, config: &mut Configuration) -> Vec<UploadOutcome> {
        let mut outcomes = Vec::new();
        while let Ok(completion) = self.rx.try_recv() {
            outcomes.push(self.apply(completion, config));
        }
        outcomes
    }
}
