use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::store::error::StoreError;
use crate::store::state::{PersistedState, PreferenceStore};

/// In-process store; state is lost when the process exits
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<PersistedState>,
}

impl MemoryStore {
    pub fn new(state: PersistedState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, PersistedState>, StoreError> {
        self.state.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<PersistedState, StoreError> {
        Ok(self.lock_state()?.clone())
    }

    fn set_last_check_date(&self, date: DateTime<Utc>) -> Result<(), StoreError> {
        self.lock_state()?.last_check_date = Some(date);
        Ok(())
    }

    fn set_skipped_version(&self, version: &str) -> Result<(), StoreError> {
        self.lock_state()?.skipped_version = Some(version.to_string());
        Ok(())
    }

    fn set_pending_forced_check(&self, pending: bool) -> Result<(), StoreError> {
        self.lock_state()?.pending_forced_check = pending;
        Ok(())
    }

    fn record_check(&self, date: DateTime<Utc>) -> Result<(), StoreError> {
        let mut state = self.lock_state()?;
        state.last_check_date = Some(date);
        state.pending_forced_check = false;
        Ok(())
    }

    fn reset(&self) -> Result<(), StoreError> {
        *self.lock_state()? = PersistedState::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn writes_are_visible_to_load() {
        let store = MemoryStore::default();
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        store.set_last_check_date(date).unwrap();
        store.set_skipped_version("3.1.0").unwrap();
        store.set_pending_forced_check(true).unwrap();

        assert_eq!(
            store.load().unwrap(),
            PersistedState {
                last_check_date: Some(date),
                skipped_version: Some("3.1.0".to_string()),
                pending_forced_check: true,
            }
        );
    }

    #[test]
    fn later_skip_replaces_earlier_one() {
        let store = MemoryStore::default();

        store.set_skipped_version("3.1.0").unwrap();
        store.set_skipped_version("3.2.0").unwrap();

        assert_eq!(
            store.load().unwrap().skipped_version.as_deref(),
            Some("3.2.0")
        );
    }

    #[test]
    fn record_check_clears_pending_flag() {
        let store = MemoryStore::new(PersistedState {
            pending_forced_check: true,
            ..Default::default()
        });
        let date = Utc.with_ymd_and_hms(2024, 5, 2, 10, 0, 0).unwrap();

        store.record_check(date).unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.last_check_date, Some(date));
        assert!(!state.pending_forced_check);
    }

    #[test]
    fn reset_clears_state() {
        let store = MemoryStore::new(PersistedState {
            skipped_version: Some("1.0".to_string()),
            pending_forced_check: true,
            ..Default::default()
        });

        store.reset().unwrap();

        assert_eq!(store.load().unwrap(), PersistedState::default());
    }
}
