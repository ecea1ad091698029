//! Persistence port: durable buffer and last-used-location storage
//!
//! Reads tolerate absent or corrupt data by returning `None`; writes are
//! fire-and-forget from the core's point of view. A failed or garbled store
//! must never surface as an error to the ingestion pipeline.

use crate::core::types::LocationSample;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Durable key/value storage for the core's persisted state.
pub trait LocationStore {
    /// Load the persisted buffer, oldest first. Absent or corrupt data
    /// comes back as `None`, never as an error.
    fn load_buffer(&mut self) -> Option<Vec<LocationSample>>;

    /// Persist the buffer, oldest first.
    fn save_buffer(&mut self, samples: &[LocationSample]);

    /// Load the persisted last-used location.
    fn load_last_used(&mut self) -> Option<LocationSample>;

    /// Persist the last-used location.
    fn save_last_used(&mut self, sample: &LocationSample);
}

/// On-disk document holding both persisted values.
///
/// Key names match the store keys the original key/value persistence used,
/// so a document written by an earlier app generation still loads.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(rename = "LOCATIONS", default, skip_serializing_if = "Option::is_none")]
    locations: Option<Vec<LocationSample>>,
    #[serde(
        rename = "LAST_USED_LOCATION",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    last_used_location: Option<LocationSample>,
}

/// JSON-file-backed implementation of the persistence port.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the document, treating a missing or unparseable file as empty.
    fn read_document(&self) -> StoreDocument {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(document) => document,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "corrupt location store, treating as empty");
                    StoreDocument::default()
                }
            },
            Err(_) => StoreDocument::default(),
        }
    }

    fn write_document(&self, document: &StoreDocument) {
        let json = match serde_json::to_string(document) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize location store document");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            warn!(path = %self.path.display(), error = %e, "failed to write location store");
        }
    }
}

impl LocationStore for FileStore {
    fn load_buffer(&mut self) -> Option<Vec<LocationSample>> {
        self.read_document().locations
    }

    fn save_buffer(&mut self, samples: &[LocationSample]) {
        let mut document = self.read_document();
        document.locations = Some(samples.to_vec());
        self.write_document(&document);
    }

    fn load_last_used(&mut self) -> Option<LocationSample> {
        self.read_document().last_used_location
    }

    fn save_last_used(&mut self, sample: &LocationSample) {
        let mut document = self.read_document();
        document.last_used_location = Some(sample.clone());
        self.write_document(&document);
    }
}
