//! Marketplace lookup: fetches the published version metadata for one app
//!
//! # Modules
//!
//! - [`client`]: `AppLookup` trait for fetching lookup results
//! - [`app_store`]: App Store lookup API implementation
//! - [`types`]: `LookupResult` snapshot consumed by the decision engine
//! - [`error`]: Lookup error type

pub mod app_store;
pub mod client;
pub mod error;
pub mod types;

pub use app_store::{AppStoreLookup, LookupKey};
pub use client::AppLookup;
pub use error::LookupError;
pub use types::LookupResult;
