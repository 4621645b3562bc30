//! One check cycle: fetch, decide, notify

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use tracing::{debug, error, info, warn};

use crate::alert::content::UserAction;
use crate::alert::delegate::UpdateDelegate;
use crate::engine::decision::{Decision, DecisionEngine};
use crate::engine::error::UpdateError;
use crate::lookup::client::AppLookup;
use crate::store::state::PreferenceStore;

/// Host application event that started a check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckTrigger {
    Launch,
    BecameActive,
    EnteredForeground,
    Manual,
}

/// Drives check cycles for one app
///
/// A check while a native alert is still visible is a no-op. Concurrent
/// checks are not de-duplicated; store writes are last-write-wins.
pub struct UpdateChecker<S: PreferenceStore, L: AppLookup> {
    lookup: L,
    engine: DecisionEngine<S>,
    delegate: Arc<dyn UpdateDelegate>,
    installed_version: Option<String>,
    device_os_version: Option<String>,
    alert_visible: AtomicBool,
}

impl<S: PreferenceStore, L: AppLookup> UpdateChecker<S, L> {
    pub fn new(
        lookup: L,
        engine: DecisionEngine<S>,
        delegate: Arc<dyn UpdateDelegate>,
        installed_version: Option<&str>,
    ) -> Self {
        Self {
            lookup,
            engine,
            delegate,
            installed_version: installed_version.map(|v| v.to_string()),
            device_os_version: None,
            alert_visible: AtomicBool::new(false),
        }
    }

    /// Enables the minimum OS version check
    pub fn with_device_os_version(mut self, version: &str) -> Self {
        self.device_os_version = Some(version.to_string());
        self
    }

    pub fn engine(&self) -> &DecisionEngine<S> {
        &self.engine
    }

    pub fn is_alert_visible(&self) -> bool {
        self.alert_visible.load(Ordering::SeqCst)
    }

    pub async fn check(&self, trigger: CheckTrigger) -> Result<Decision, UpdateError> {
        self.check_at(trigger, Utc::now()).await
    }

    /// Same as [`check`](Self::check) with an explicit clock
    pub async fn check_at(
        &self,
        trigger: CheckTrigger,
        now: DateTime<Utc>,
    ) -> Result<Decision, UpdateError> {
        if self.is_alert_visible() {
            debug!("Ignoring {:?} check: alert already visible", trigger);
            return Err(UpdateError::AlertAlreadyVisible);
        }

        info!("Starting update check ({:?})", trigger);

        match self.run_cycle(now).await {
            Ok(decision) => {
                if decision.alert_type.shows_dialog() {
                    self.alert_visible.store(true, Ordering::SeqCst);
                    self.delegate.did_show_alert(&decision);
                } else {
                    self.delegate.did_receive_custom_alert(
                        &decision.content.title,
                        &decision.content.message,
                        &decision,
                    );
                }
                Ok(decision)
            }
            Err(e) => {
                if e.is_informational() {
                    info!("Update check finished without alert: {}", e);
                } else if matches!(e, UpdateError::Store(_)) {
                    error!("Update check failed: {}", e);
                } else {
                    warn!("Update check failed: {}", e);
                }
                self.delegate.did_fail(&e);
                Err(e)
            }
        }
    }

    async fn run_cycle(&self, now: DateTime<Utc>) -> Result<Decision, UpdateError> {
        let lookup = self.lookup.fetch().await?;
        let installed = self.installed_version.as_deref();

        let detected =
            self.engine
                .detect_update(&lookup, installed, self.device_os_version.as_deref())?;
        self.delegate
            .did_detect_update(detected.update_type, &lookup.remote_version);

        self.engine.gate(&lookup, installed, &detected, now)
    }

    /// Apply the user's choice on the visible alert and dismiss it
    pub fn respond(&self, action: UserAction, decision: &Decision) -> Result<(), UpdateError> {
        self.alert_visible.store(false, Ordering::SeqCst);
        self.engine.record_action(action, decision)?;

        match action {
            UserAction::Update => self.delegate.did_choose_update(&decision.store_url),
            UserAction::NextTime => self.delegate.did_choose_next_time(),
            UserAction::Skip => self.delegate.did_choose_skip(&decision.remote_version),
        }
        Ok(())
    }
}
