//! Decision engine and check cycle
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Lookup    │────▶│   Engine    │────▶│  Delegate   │
//! │  (fetch)    │     │  (decide)   │     │ (callbacks) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │    Store    │
//!                     │(preferences)│
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`decision`]: Synchronous decision over one lookup result
//! - [`checker`]: Async check cycle, alert visibility and user responses
//! - [`error`]: Error taxonomy reported to the caller

pub mod checker;
pub mod decision;
pub mod error;

pub use checker::{CheckTrigger, UpdateChecker};
pub use decision::{Decision, DecisionEngine, DetectedUpdate};
pub use error::UpdateError;
