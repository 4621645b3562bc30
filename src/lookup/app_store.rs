//! App Store lookup API implementation

use std::time::Duration;

use reqwest::Url;
use tracing::{debug, warn};

use crate::config::{DEFAULT_LOOKUP_BASE_URL, LOOKUP_TIMEOUT_SECS};
use crate::lookup::client::AppLookup;
use crate::lookup::error::LookupError;
use crate::lookup::types::{LookupResponse, LookupResult};

/// How the app is identified in the lookup query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// `lookup?bundleId=com.example.app`
    BundleId(String),
    /// `lookup?id=284882215`
    AppId(u64),
}

/// Lookup implementation for the App Store lookup API
pub struct AppStoreLookup {
    client: reqwest::Client,
    base_url: String,
    key: LookupKey,
    country: Option<String>,
}

impl AppStoreLookup {
    /// Creates a new AppStoreLookup with a custom base URL
    pub fn new(base_url: &str, key: LookupKey, country: Option<&str>) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent("version-nudge")
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            key,
            country: country.map(|c| c.to_string()),
        })
    }

    /// Creates a lookup against the public App Store endpoint
    pub fn with_default_url(key: LookupKey, country: Option<&str>) -> Result<Self, LookupError> {
        Self::new(DEFAULT_LOOKUP_BASE_URL, key, country)
    }

    /// Build the lookup URL
    ///
    /// Fails before any I/O when the bundle identifier is blank or the
    /// country code is not a two-letter storefront code.
    pub fn lookup_url(&self) -> Result<Url, LookupError> {
        let mut params: Vec<(&str, String)> = Vec::with_capacity(2);

        match &self.key {
            LookupKey::BundleId(bundle_id) => {
                let bundle_id = bundle_id.trim();
                if bundle_id.is_empty() {
                    return Err(LookupError::MissingBundleIdentifier);
                }
                params.push(("bundleId", bundle_id.to_string()));
            }
            LookupKey::AppId(app_id) => params.push(("id", app_id.to_string())),
        }

        if let Some(country) = &self.country {
            if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(LookupError::MalformedLookupUrl(format!(
                    "invalid country code: {:?}",
                    country
                )));
            }
            params.push(("country", country.to_ascii_lowercase()));
        }

        let url = format!("{}/lookup", self.base_url);
        Url::parse_with_params(&url, &params)
            .map_err(|e| LookupError::MalformedLookupUrl(format!("{}: {}", url, e)))
    }
}

#[async_trait::async_trait]
impl AppLookup for AppStoreLookup {
    async fn fetch(&self) -> Result<LookupResult, LookupError> {
        let url = self.lookup_url()?;
        debug!("Looking up {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Lookup returned status {}: {}", status, url);
            return Err(LookupError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body: LookupResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse lookup response: {}", e);
            LookupError::InvalidResponse(e.to_string())
        })?;

        debug!("Lookup returned {:?} results", body.result_count);

        LookupResult::from_response(body)
    }
}
