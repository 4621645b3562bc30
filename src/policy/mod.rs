//! Alert policy: which rule applies, and whether it is time to alert
//!
//! # Modules
//!
//! - [`rules`]: `AlertType`, `CheckFrequency`, `Rule` and per-update-type `RulesManager`
//! - [`cadence`]: Minimum interval between alerts
//! - [`release_age`]: Minimum age of a release before it is announced

pub mod cadence;
pub mod release_age;
pub mod rules;

pub use cadence::{days_between, should_check_now};
pub use release_age::{is_old_enough, parse_release_date};
pub use rules::{AlertType, CheckFrequency, Rule, RulesManager};
