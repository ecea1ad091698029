//! Errors returned across the bridge surface

use crate::config::ConfigError;
use crate::platform::provider::ProviderError;
use std::fmt;

/// Result type for bridge-surface operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Why a location query could not be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotAvailableReason {
    /// `configure` has never run; no buffer exists
    NotConfigured,
    /// A buffer exists but holds no samples yet
    EmptyBuffer,
}

/// Bridge-surface error types
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Malformed or out-of-domain configuration; rejected wholesale,
    /// nothing was applied
    InvalidConfiguration { parameter: String, value: String },
    /// No locations can be returned
    NotAvailable { reason: NotAvailableReason },
    /// The acquisition request could not be issued
    ProviderUnavailable { details: String },
}

impl GeoError {
    /// Numeric error code the scripting side has always matched on.
    pub fn code(&self) -> u8 {
        match self {
            GeoError::ProviderUnavailable { .. } => 1,
            GeoError::NotAvailable {
                reason: NotAvailableReason::EmptyBuffer,
            } => 2,
            GeoError::NotAvailable {
                reason: NotAvailableReason::NotConfigured,
            } => 3,
            GeoError::InvalidConfiguration { .. } => 4,
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::InvalidConfiguration { parameter, value } => {
                write!(f, "configuration is invalid: {} = {}", parameter, value)
            }
            GeoError::NotAvailable {
                reason: NotAvailableReason::NotConfigured,
            } => write!(f, "location service is not configured"),
            GeoError::NotAvailable {
                reason: NotAvailableReason::EmptyBuffer,
            } => write!(f, "no location in buffer"),
            GeoError::ProviderUnavailable { details } => {
                write!(f, "location service failed: {}", details)
            }
        }
    }
}

impl std::error::Error for GeoError {}

impl From<ConfigError> for GeoError {
    fn from(error: ConfigError) -> Self {
        GeoError::InvalidConfiguration {
            parameter: error.parameter,
            value: error.value,
        }
    }
}

impl From<ProviderError> for GeoError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Unavailable { details } => GeoError::ProviderUnavailable { details },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_match_bridge_contract() {
        let provider = GeoError::ProviderUnavailable {
            details: "x".to_string(),
        };
        let empty = GeoError::NotAvailable {
            reason: NotAvailableReason::EmptyBuffer,
        };
        let unconfigured = GeoError::NotAvailable {
            reason: NotAvailableReason::NotConfigured,
        };
        let invalid = GeoError::InvalidConfiguration {
            parameter: "bufferSize".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(provider.code(), 1);
        assert_eq!(empty.code(), 2);
        assert_eq!(unconfigured.code(), 3);
        assert_eq!(invalid.code(), 4);
    }

    #[test]
    fn test_config_error_conversion() {
        let err: GeoError = crate::config::LocationConfiguration {
            desired_accuracy: crate::config::AccuracyTier::PowerSaving,
            distance_filter_m: 0,
            update_interval_ms: 10_000,
            buffer_size: 0,
        }
        .validate()
        .unwrap_err()
        .into();
        assert!(matches!(err, GeoError::InvalidConfiguration { .. }));
        assert_eq!(err.code(), 4);
    }
}
