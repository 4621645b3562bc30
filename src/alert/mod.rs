//! What the presentation layer needs to render an update alert
//!
//! Nothing here draws UI. The engine fills in [`AlertContent`] for each
//! decision; the caller renders it and reports the user's [`UserAction`].
//!
//! # Modules
//!
//! - [`localizer`]: Key to string lookup with an English default
//! - [`content`]: Buttons, title and message for a decision
//! - [`delegate`]: Callbacks with no-op defaults

pub mod content;
pub mod delegate;
pub mod localizer;

pub use content::{AlertButton, AlertContent, UserAction};
pub use delegate::{NoopDelegate, UpdateDelegate};
pub use localizer::{EnglishLocalizer, LocalizationKey, Localizer};
