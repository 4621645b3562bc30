//! Lookup trait for fetching the published version of an app

#[cfg(test)]
use mockall::automock;

use crate::lookup::error::LookupError;
use crate::lookup::types::LookupResult;

/// Trait for fetching the latest published metadata for the configured app
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AppLookup: Send + Sync {
    /// Fetches the marketplace record
    ///
    /// # Returns
    /// * `Ok(LookupResult)` - The first matching record
    /// * `Err(LookupError)` - If the URL cannot be built, the request fails, or
    ///   the payload lacks required fields
    async fn fetch(&self) -> Result<LookupResult, LookupError>;
}
