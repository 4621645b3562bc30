//! Persisted preferences that survive restarts
//!
//! The decision engine reads [`PersistedState`] at decision time and writes
//! back through [`PreferenceStore`]. Writes are last-write-wins.
//!
//! # Modules
//!
//! - [`state`]: `PersistedState` and the `PreferenceStore` trait
//! - [`sqlite`]: SQLite-backed store, namespaced per app
//! - [`memory`]: In-process store
//! - [`error`]: Store error type

pub mod error;
pub mod memory;
pub mod sqlite;
pub mod state;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use state::{PersistedState, PreferenceStore};
