use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Missing bundle identifier")]
    MissingBundleIdentifier,

    #[error("Malformed lookup URL: {0}")]
    MalformedLookupUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("App not found in this storefront")]
    EmptyResults,

    #[error("Lookup result has no trackId")]
    MissingAppId,

    #[error("Lookup result has no version")]
    MissingVersionField,
}
