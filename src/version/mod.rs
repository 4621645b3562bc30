//! Version layer: parsing and comparing marketplace version strings
//!
//! Marketplace version strings are free text. Everything here is total:
//! malformed input degrades to zero components instead of failing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   "1.2.3"   │────▶│   Vector    │────▶│  Compare    │
//! │  (string)   │     │  (parse)    │     │ (is_newer)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  Classify   │
//!                                         │(UpdateType) │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vector`]: `VersionVector` parsing
//! - [`compare`]: Numeric, zero-padded comparison predicates
//! - [`classifier`]: Update magnitude classification

pub mod classifier;
pub mod compare;
pub mod vector;

pub use classifier::{UpdateType, classify};
pub use compare::{is_at_least, is_newer};
pub use vector::VersionVector;
