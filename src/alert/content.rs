use crate::alert::localizer::{LocalizationKey, Localizer};
use crate::policy::AlertType;

/// A button the presentation layer renders, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertButton {
    NextTime,
    Update,
    Skip,
}

impl AlertButton {
    /// Buttons implied by the alert type; `None` shows no dialog
    pub fn for_alert_type(alert_type: AlertType) -> &'static [AlertButton] {
        match alert_type {
            AlertType::Force => &[AlertButton::Update],
            AlertType::Option => &[AlertButton::NextTime, AlertButton::Update],
            AlertType::Skip => &[AlertButton::NextTime, AlertButton::Update, AlertButton::Skip],
            AlertType::None => &[],
        }
    }

    fn localization_key(&self) -> LocalizationKey {
        match self {
            AlertButton::NextTime => LocalizationKey::NextTimeButton,
            AlertButton::Update => LocalizationKey::UpdateButton,
            AlertButton::Skip => LocalizationKey::SkipButton,
        }
    }

    pub fn action(&self) -> UserAction {
        match self {
            AlertButton::NextTime => UserAction::NextTime,
            AlertButton::Update => UserAction::Update,
            AlertButton::Skip => UserAction::Skip,
        }
    }
}

/// The terminal choice the user made on an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    /// Open the store page
    Update,
    /// Ask again on the next check, regardless of cadence
    NextTime,
    /// Never alert about this exact version again
    Skip,
}

/// Localized text for one alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertContent {
    pub title: String,
    pub message: String,
    /// `(button, localized title)` in display order
    pub buttons: Vec<(AlertButton, String)>,
}

impl AlertContent {
    pub fn build(
        localizer: &dyn Localizer,
        alert_type: AlertType,
        app_name: &str,
        remote_version: &str,
    ) -> Self {
        let message = localizer
            .localize(LocalizationKey::AlertMessage)
            .replace("{app}", app_name)
            .replace("{version}", remote_version);

        let buttons = AlertButton::for_alert_type(alert_type)
            .iter()
            .map(|button| (*button, localizer.localize(button.localization_key())))
            .collect();

        Self {
            title: localizer.localize(LocalizationKey::AlertTitle),
            message,
            buttons,
        }
    }

    pub fn button_titles(&self) -> Vec<&str> {
        self.buttons.iter().map(|(_, title)| title.as_str()).collect()
    }
}
