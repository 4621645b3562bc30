use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info, warn};

use crate::store::error::StoreError;
use crate::store::state::{PersistedState, PreferenceStore};

const KEY_LAST_CHECK_DATE: &str = "last_check_date";
const KEY_SKIPPED_VERSION: &str = "skipped_version";
const KEY_PENDING_FORCED_CHECK: &str = "pending_forced_check";

/// SQLite-backed preferences
///
/// Rows are namespaced by `app_key` (bundle identifier or app id), so one
/// database can hold the state of several apps.
pub struct SqliteStore {
    conn: Mutex<Connection>,
    app_key: String,
}

impl SqliteStore {
    pub fn new(db_path: &Path, app_key: &str) -> Result<Self, StoreError> {
        info!("Initializing preference database at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        // Enable WAL mode for better concurrency
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        debug!("Database connection established");

        let store = Self {
            conn: Mutex::new(conn),
            app_key: app_key.to_string(),
        };

        store.create_schema()?;
        info!("Preference store initialized for {}", app_key);

        Ok(store)
    }

    /// Acquire database connection lock with proper error handling
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    fn create_schema(&self) -> Result<(), StoreError> {
        debug!("Creating database schema");

        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                app_key TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY(app_key, key)
            )
            "#,
            [],
        )?;

        debug!("Database schema created successfully");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE app_key = ?1 AND key = ?2",
                (&self.app_key, key),
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;
        Self::upsert(&conn, &self.app_key, key, value)
    }

    fn upsert(conn: &Connection, app_key: &str, key: &str, value: &str) -> Result<(), StoreError> {
        conn.execute(
            r#"
            INSERT INTO preferences (app_key, key, value, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(app_key, key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            (app_key, key, value, Utc::now().timestamp_millis()),
        )?;

        debug!("Saved preference {}/{} = {}", app_key, key, value);
        Ok(())
    }

    fn format_date(date: DateTime<Utc>) -> String {
        date.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    fn parse_date(value: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|date| date.with_timezone(&Utc))
            .inspect_err(|e| warn!("Ignoring unreadable last check date {:?}: {}", value, e))
            .ok()
    }

    fn parse_flag(value: &str) -> bool {
        match value {
            "1" => true,
            "0" => false,
            other => {
                warn!("Ignoring unreadable pending forced check flag {:?}", other);
                false
            }
        }
    }
}

impl PreferenceStore for SqliteStore {
    fn load(&self) -> Result<PersistedState, StoreError> {
        let last_check_date = self
            .get(KEY_LAST_CHECK_DATE)?
            .and_then(|value| Self::parse_date(&value));
        let skipped_version = self.get(KEY_SKIPPED_VERSION)?;
        let pending_forced_check = self
            .get(KEY_PENDING_FORCED_CHECK)?
            .is_some_and(|value| Self::parse_flag(&value));

        Ok(PersistedState {
            last_check_date,
            skipped_version,
            pending_forced_check,
        })
    }

    fn set_last_check_date(&self, date: DateTime<Utc>) -> Result<(), StoreError> {
        self.set(KEY_LAST_CHECK_DATE, &Self::format_date(date))
    }

    fn record_check(&self, date: DateTime<Utc>) -> Result<(), StoreError> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;
        Self::upsert(&tx, &self.app_key, KEY_LAST_CHECK_DATE, &Self::format_date(date))?;
        Self::upsert(&tx, &self.app_key, KEY_PENDING_FORCED_CHECK, "0")?;
        tx.commit()?;
        Ok(())
    }

    fn set_skipped_version(&self, version: &str) -> Result<(), StoreError> {
        self.set(KEY_SKIPPED_VERSION, version)
    }

    fn set_pending_forced_check(&self, pending: bool) -> Result<(), StoreError> {
        self.set(KEY_PENDING_FORCED_CHECK, if pending { "1" } else { "0" })
    }

    fn reset(&self) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;
        let removed = conn.execute(
            "DELETE FROM preferences WHERE app_key = ?1",
            [&self.app_key],
        )?;

        info!("Removed {} preferences for {}", removed, self.app_key);
        Ok(())
    }
}
