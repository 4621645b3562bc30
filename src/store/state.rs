use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

use crate::store::error::StoreError;

/// Preferences the engine reads once per decision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    /// When an alert was last emitted
    pub last_check_date: Option<DateTime<Utc>>,
    /// Exact remote version string the user chose to skip
    pub skipped_version: Option<String>,
    /// Set when the user chose "next time"; bypasses the cadence gate once
    pub pending_forced_check: bool,
}

impl PersistedState {
    /// Whether `remote_version` was skipped. String equality, not numeric.
    pub fn is_skipped(&self, remote_version: &str) -> bool {
        self.skipped_version.as_deref() == Some(remote_version)
    }
}

/// Trait for reading and writing persisted preferences
#[cfg_attr(test, automock)]
pub trait PreferenceStore: Send + Sync + 'static {
    /// Read the full state
    fn load(&self) -> Result<PersistedState, StoreError>;

    fn set_last_check_date(&self, date: DateTime<Utc>) -> Result<(), StoreError>;

    /// Remember a version the user never wants to hear about again
    fn set_skipped_version(&self, version: &str) -> Result<(), StoreError>;

    fn set_pending_forced_check(&self, pending: bool) -> Result<(), StoreError>;

    /// Record an emitted alert: set the last check date and clear the
    /// pending forced check in one write
    fn record_check(&self, date: DateTime<Utc>) -> Result<(), StoreError>;

    /// Forget everything
    fn reset(&self) -> Result<(), StoreError>;
}
