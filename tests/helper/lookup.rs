//! Lookup and store test utilities

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use version_nudge::alert::UpdateDelegate;
use version_nudge::engine::UpdateError;
use version_nudge::lookup::{AppLookup, LookupError, LookupResult};
use version_nudge::store::SqliteStore;

/// Stub lookup returning a fixed record, or "not found" when none is set
pub struct StubLookup {
    result: Option<LookupResult>,
}

impl StubLookup {
    pub fn new() -> Self {
        Self { result: None }
    }

    pub fn with_version(mut self, version: &str, release_date: &str) -> Self {
        self.result = Some(LookupResult {
            app_id: 1234,
            remote_version: version.to_string(),
            release_date: Some(release_date.to_string()),
            minimum_os_version: None,
            release_notes: None,
        });
        self
    }
}

#[async_trait]
impl AppLookup for StubLookup {
    async fn fetch(&self) -> Result<LookupResult, LookupError> {
        self.result.clone().ok_or(LookupError::EmptyResults)
    }
}

/// Delegate that remembers the failures it was told about
#[derive(Default)]
pub struct FailureLog {
    failures: Mutex<Vec<String>>,
}

impl FailureLog {
    pub fn failures(&self) -> Vec<String> {
        self.failures.lock().unwrap().clone()
    }
}

impl UpdateDelegate for FailureLog {
    fn did_fail(&self, error: &UpdateError) {
        self.failures.lock().unwrap().push(error.to_string());
    }
}

/// Create a store backed by a fresh temporary database
pub fn create_test_store(app_key: &str) -> (TempDir, Arc<SqliteStore>) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::new(&db_path, app_key).unwrap();

    (temp_dir, Arc::new(store))
}

/// Lookup API body with a single record
pub fn lookup_body(version: &str, release_date: &str, minimum_os: &str) -> String {
    serde_json::json!({
        "resultCount": 1,
        "results": [{
            "trackId": 1234,
            "trackName": "Example",
            "version": version,
            "currentVersionReleaseDate": release_date,
            "minimumOsVersion": minimum_os,
            "releaseNotes": "Bug fixes and improvements"
        }]
    })
    .to_string()
}
