//! Provider port: the platform location client seen from the core
//!
//! The core only issues and cancels acquisition requests here. Fix delivery
//! does not flow through this trait: whenever the platform produces a fix,
//! the host invokes `LocationSession::ingest_fix` with a `RawFix`.

use crate::core::types::{AcquisitionRequest, LocationSample};
use std::fmt;

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Provider port errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The acquisition request could not be issued (missing capability,
    /// client not attached). The core degrades by not starting.
    Unavailable { details: String },
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable { details } => {
                write!(f, "location provider unavailable: {}", details)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Platform location client interface.
pub trait LocationProvider {
    /// Begin delivering fixes under the given parameters. An already
    /// running request is superseded, not merged.
    fn start(&mut self, request: &AcquisitionRequest) -> ProviderResult<()>;

    /// Cancel the outstanding request. Idempotent: safe to call when no
    /// request is outstanding.
    fn stop(&mut self);
}

/// Untrusted fix descriptor as delivered by the platform client.
///
/// Admitted into the core as a `LocationSample` by the ingestion path only,
/// after a domain check.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFix {
    pub provider: String,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f32,
    pub time: u64,
    pub mock: Option<bool>,
}

impl RawFix {
    pub fn new(provider: &str, latitude: f64, longitude: f64, accuracy: f32, time: u64) -> Self {
        Self {
            provider: provider.to_string(),
            latitude,
            longitude,
            accuracy,
            time,
            mock: None,
        }
    }

    pub fn with_mock_flag(mut self, mock: bool) -> Self {
        self.mock = Some(mock);
        self
    }
}

impl From<RawFix> for LocationSample {
    fn from(fix: RawFix) -> Self {
        LocationSample {
            provider: fix.provider,
            latitude: fix.latitude,
            longitude: fix.longitude,
            accuracy: fix.accuracy,
            time: fix.time,
            mock: fix.mock,
        }
    }
}
