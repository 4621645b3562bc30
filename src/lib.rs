//! Marketplace update checks with a configurable nagging policy
//!
//! # Modules
//!
//! - [`config`]: Constants, file configuration and data paths
//! - [`version`]: Version vectors, comparison and update classification
//! - [`policy`]: Alert rules, cadence and release-age gates
//! - [`store`]: Persisted preferences (last check, skipped version)
//! - [`lookup`]: Marketplace lookup client
//! - [`alert`]: Alert content, buttons and delegate callbacks
//! - [`engine`]: Decision engine and the check cycle

pub mod alert;
pub mod config;
pub mod engine;
pub mod lookup;
pub mod policy;
pub mod store;
pub mod version;
