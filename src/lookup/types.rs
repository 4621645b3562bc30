//! Lookup payload types

use serde::Deserialize;

use crate::config::STORE_APP_URL;
use crate::lookup::error::LookupError;

/// Immutable snapshot of one lookup, used for one decision cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub app_id: u64,
    pub remote_version: String,
    /// Raw `currentVersionReleaseDate`, parsed by the release-age gate
    pub release_date: Option<String>,
    pub minimum_os_version: Option<String>,
    pub release_notes: Option<String>,
}

impl LookupResult {
    /// Store page opened by the Update button
    pub fn store_url(&self) -> String {
        format!("{}/id{}", STORE_APP_URL, self.app_id)
    }

    /// First record of a decoded response
    pub(crate) fn from_response(response: LookupResponse) -> Result<Self, LookupError> {
        let record = response
            .results
            .into_iter()
            .next()
            .ok_or(LookupError::EmptyResults)?;

        let app_id = record.track_id.ok_or(LookupError::MissingAppId)?;
        let remote_version = record
            .version
            .filter(|version| !version.trim().is_empty())
            .ok_or(LookupError::MissingVersionField)?;

        Ok(LookupResult {
            app_id,
            remote_version,
            release_date: record.current_version_release_date,
            minimum_os_version: record.minimum_os_version,
            release_notes: record.release_notes,
        })
    }
}

/// Response body of the lookup API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub results: Vec<LookupRecord>,
}

/// One record; every field is optional on the wire
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct LookupRecord {
    pub track_id: Option<u64>,
    pub version: Option<String>,
    pub current_version_release_date: Option<String>,
    pub minimum_os_version: Option<String>,
    pub release_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<LookupResult, LookupError> {
        let response: LookupResponse = serde_json::from_str(body).unwrap();
        LookupResult::from_response(response)
    }

    #[test]
    fn decodes_first_record() {
        let result = decode(
            r#"{
                "resultCount": 1,
                "results": [{
                    "trackId": 284882215,
                    "version": "3.4.1",
                    "currentVersionReleaseDate": "2024-02-01T10:00:00Z",
                    "minimumOsVersion": "15.0",
                    "releaseNotes": "Bug fixes",
                    "trackName": "Example"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(
            result,
            LookupResult {
                app_id: 284882215,
                remote_version: "3.4.1".to_string(),
                release_date: Some("2024-02-01T10:00:00Z".to_string()),
                minimum_os_version: Some("15.0".to_string()),
                release_notes: Some("Bug fixes".to_string()),
            }
        );
    }

    #[test]
    fn empty_results_is_an_error() {
        let result = decode(r#"{ "resultCount": 0, "results": [] }"#);
        assert!(matches!(result, Err(LookupError::EmptyResults)));
    }

    #[test]
    fn missing_results_key_is_empty_results() {
        let result = decode(r#"{ "resultCount": 0 }"#);
        assert!(matches!(result, Err(LookupError::EmptyResults)));
    }

    #[test]
    fn missing_track_id_is_an_error() {
        let result = decode(r#"{ "results": [{ "version": "1.0" }] }"#);
        assert!(matches!(result, Err(LookupError::MissingAppId)));
    }

    #[test]
    fn missing_version_is_an_error() {
        let result = decode(r#"{ "results": [{ "trackId": 1 }] }"#);
        assert!(matches!(result, Err(LookupError::MissingVersionField)));
    }

    #[test]
    fn blank_version_is_an_error() {
        let result = decode(r#"{ "results": [{ "trackId": 1, "version": " " }] }"#);
        assert!(matches!(result, Err(LookupError::MissingVersionField)));
    }

    #[test]
    fn store_url_uses_app_id() {
        let result = decode(r#"{ "results": [{ "trackId": 42, "version": "1.0" }] }"#).unwrap();
        assert_eq!(result.store_url(), "https://apps.apple.com/app/id42");
    }
}
