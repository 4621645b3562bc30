//! Deciding whether, and how, to alert about one lookup result

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::alert::content::{AlertContent, UserAction};
use crate::alert::localizer::{EnglishLocalizer, Localizer};
use crate::engine::error::UpdateError;
use crate::lookup::types::LookupResult;
use crate::policy::cadence::{days_between, should_check_now};
use crate::policy::release_age::{is_old_enough, parse_release_date};
use crate::policy::rules::{AlertType, Rule, RulesManager};
use crate::store::state::PreferenceStore;
use crate::version::{UpdateType, VersionVector, classify, is_at_least, is_newer};

/// The engine's output, handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub alert_type: AlertType,
    pub update_type: UpdateType,
    pub app_name: String,
    pub installed_version: Option<String>,
    pub remote_version: String,
    pub store_url: String,
    pub release_notes: Option<String>,
    pub content: AlertContent,
}

/// A confirmed update and the rule that governs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedUpdate {
    pub update_type: UpdateType,
    pub rule: Rule,
}

/// Turns a lookup result and persisted preferences into a [`Decision`]
///
/// Synchronous and free of I/O apart from the preference store.
pub struct DecisionEngine<S: PreferenceStore> {
    store: Arc<S>,
    rules: RulesManager,
    localizer: Box<dyn Localizer>,
    app_name: String,
}

impl<S: PreferenceStore> DecisionEngine<S> {
    pub fn new(store: Arc<S>, rules: RulesManager, app_name: &str) -> Self {
        Self {
            store,
            rules,
            localizer: Box::new(EnglishLocalizer),
            app_name: app_name.to_string(),
        }
    }

    pub fn with_localizer(mut self, localizer: Box<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn rules(&self) -> &RulesManager {
        &self.rules
    }

    /// Run every gate and, if all pass, record the check and emit a decision
    pub fn decide(
        &self,
        lookup: &LookupResult,
        installed: Option<&str>,
        device_os: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Decision, UpdateError> {
        let detected = self.detect_update(lookup, installed, device_os)?;
        self.gate(lookup, installed, &detected, now)
    }

    /// Compatibility and version checks, then classification
    ///
    /// An absent device OS version or an absent minimum skips the
    /// compatibility check.
    pub fn detect_update(
        &self,
        lookup: &LookupResult,
        installed: Option<&str>,
        device_os: Option<&str>,
    ) -> Result<DetectedUpdate, UpdateError> {
        let installed_vector = VersionVector::parse(installed);
        let remote_vector = VersionVector::from(lookup.remote_version.as_str());

        if let (Some(device), Some(required)) = (device_os, lookup.minimum_os_version.as_deref()) {
            if !is_at_least(&VersionVector::from(device), &VersionVector::from(required)) {
                info!(
                    "Device OS {} does not meet minimum {} for version {}",
                    device, required, lookup.remote_version
                );
                return Err(UpdateError::OsVersionUnsupported {
                    device: device.to_string(),
                    required: required.to_string(),
                });
            }
        }

        if !is_newer(&installed_vector, &remote_vector) {
            debug!(
                "No update: installed {:?}, store {}",
                installed, lookup.remote_version
            );
            return Err(UpdateError::NoUpdateAvailable {
                installed: installed.unwrap_or_default().to_string(),
                remote: lookup.remote_version.clone(),
            });
        }

        let update_type = classify(&installed_vector, &remote_vector);
        let rule = *self.rules.resolve(update_type);

        info!(
            "Found {} update {:?} -> {} (alert: {}, frequency: {:?})",
            update_type, installed, lookup.remote_version, rule.alert_type, rule.frequency
        );

        Ok(DetectedUpdate { update_type, rule })
    }

    /// Release-age, skip and cadence gates for a detected update
    ///
    /// Only a passing result writes to the store: the last check date moves
    /// to `now` and a pending forced check is consumed.
    pub fn gate(
        &self,
        lookup: &LookupResult,
        installed: Option<&str>,
        detected: &DetectedUpdate,
        now: DateTime<Utc>,
    ) -> Result<Decision, UpdateError> {
        let rule = detected.rule;

        if rule.min_release_days > 0 {
            let raw_date = lookup.release_date.as_deref().unwrap_or_default();
            let release_date = parse_release_date(raw_date)
                .ok_or_else(|| UpdateError::MalformedReleaseDate(raw_date.to_string()))?;

            if !is_old_enough(release_date, rule.min_release_days, now) {
                let days_since_release = days_between(release_date, now);
                info!(
                    "Version {} released {} day(s) ago, waiting for {}",
                    lookup.remote_version, days_since_release, rule.min_release_days
                );
                return Err(UpdateError::ReleasedTooSoon {
                    remote: lookup.remote_version.clone(),
                    days_since_release,
                    required: rule.min_release_days,
                });
            }
        }

        let state = self.store.load()?;

        if state.is_skipped(&lookup.remote_version) {
            info!("Version {} skipped by user", lookup.remote_version);
            return Err(UpdateError::VersionSkipped(lookup.remote_version.clone()));
        }

        if !should_check_now(
            state.last_check_date,
            rule.frequency,
            state.pending_forced_check,
            now,
        ) {
            debug!(
                "Checked too recently (last: {:?}, frequency: {:?})",
                state.last_check_date, rule.frequency
            );
            return Err(UpdateError::CheckedTooRecently {
                frequency_days: rule.frequency.as_days(),
            });
        }

        self.store.record_check(now)?;

        Ok(Decision {
            alert_type: rule.alert_type,
            update_type: detected.update_type,
            app_name: self.app_name.clone(),
            installed_version: installed.map(|v| v.to_string()),
            remote_version: lookup.remote_version.clone(),
            store_url: lookup.store_url(),
            release_notes: lookup.release_notes.clone(),
            content: AlertContent::build(
                self.localizer.as_ref(),
                rule.alert_type,
                &self.app_name,
                &lookup.remote_version,
            ),
        })
    }

    /// Persist the user's choice on an alert
    pub fn record_action(&self, action: UserAction, decision: &Decision) -> Result<(), UpdateError> {
        match action {
            UserAction::Update => {
                info!("User chose to update to {}", decision.remote_version);
            }
            UserAction::NextTime => {
                info!("User postponed {}", decision.remote_version);
                self.store.set_pending_forced_check(true)?;
            }
            UserAction::Skip => {
                info!("User skipped {}", decision.remote_version);
                self.store.set_skipped_version(&decision.remote_version)?;
            }
        }
        Ok(())
    }
}
