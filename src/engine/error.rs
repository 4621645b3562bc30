use thiserror::Error;

use crate::lookup::error::LookupError;
use crate::store::error::StoreError;

/// Why a check cycle ended without an alert
///
/// Every variant is reported once per cycle; none of them is fatal to the
/// host application.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Device OS {device} is older than the required {required}")]
    OsVersionUnsupported { device: String, required: String },

    #[error("Latest version installed (installed: {installed}, store: {remote})")]
    NoUpdateAvailable { installed: String, remote: String },

    #[error("Version {remote} released {days_since_release} day(s) ago, waiting for {required}")]
    ReleasedTooSoon {
        remote: String,
        days_since_release: i64,
        required: u32,
    },

    #[error("Unreadable release date: {0:?}")]
    MalformedReleaseDate(String),

    #[error("Version {0} was skipped by the user")]
    VersionSkipped(String),

    #[error("Checked too recently, next check after {frequency_days} day(s)")]
    CheckedTooRecently { frequency_days: u32 },

    #[error("An update alert is already visible")]
    AlertAlreadyVisible,

    #[error("Preference store error: {0}")]
    Store(#[from] StoreError),
}

impl UpdateError {
    /// True for outcomes that are expected during normal operation
    pub fn is_informational(&self) -> bool {
        matches!(
            self,
            UpdateError::NoUpdateAvailable { .. }
                | UpdateError::ReleasedTooSoon { .. }
                | UpdateError::VersionSkipped(_)
                | UpdateError::CheckedTooRecently { .. }
                | UpdateError::AlertAlreadyVisible
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_outcomes_are_informational() {
        assert!(
            UpdateError::NoUpdateAvailable {
                installed: "1.0".to_string(),
                remote: "1.0".to_string(),
            }
            .is_informational()
        );
        assert!(UpdateError::CheckedTooRecently { frequency_days: 1 }.is_informational());
        assert!(UpdateError::VersionSkipped("2.0".to_string()).is_informational());
        assert!(UpdateError::AlertAlreadyVisible.is_informational());
    }

    #[test]
    fn lookup_and_store_failures_are_not_informational() {
        assert!(!UpdateError::Lookup(LookupError::EmptyResults).is_informational());
        assert!(!UpdateError::Store(StoreError::LockPoisoned).is_informational());
        assert!(
            !UpdateError::OsVersionUnsupported {
                device: "15.0".to_string(),
                required: "16.0".to_string(),
            }
            .is_informational()
        );
    }

    #[test]
    fn lookup_error_message_is_forwarded() {
        let error = UpdateError::from(LookupError::EmptyResults);
        assert_eq!(error.to_string(), "App not found in this storefront");
    }
}
