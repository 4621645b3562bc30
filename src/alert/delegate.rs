//! Callbacks fired during a check cycle

use crate::engine::decision::Decision;
use crate::engine::error::UpdateError;
use crate::version::UpdateType;

/// Observer for check cycle events; every method defaults to a no-op
pub trait UpdateDelegate: Send + Sync {
    /// A native dialog should now be visible
    fn did_show_alert(&self, _decision: &Decision) {}

    /// A newer version was found and classified, before any gate
    fn did_detect_update(&self, _update_type: UpdateType, _remote_version: &str) {}

    /// The cycle stopped without an alert; see `UpdateError::is_informational`
    fn did_fail(&self, _error: &UpdateError) {}

    /// The user chose Update; `store_url` is the page to open
    fn did_choose_update(&self, _store_url: &str) {}

    fn did_choose_next_time(&self) {}

    fn did_choose_skip(&self, _version: &str) {}

    /// `AlertType::None`: the caller renders its own UI from this content
    fn did_receive_custom_alert(&self, _title: &str, _message: &str, _decision: &Decision) {}
}

/// Delegate that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDelegate;

impl UpdateDelegate for NoopDelegate {}
