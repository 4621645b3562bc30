/// Strings used by the update alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalizationKey {
    AlertTitle,
    /// Contains `{app}` and `{version}` placeholders
    AlertMessage,
    UpdateButton,
    NextTimeButton,
    SkipButton,
}

/// Opaque key to string lookup
pub trait Localizer: Send + Sync {
    fn localize(&self, key: LocalizationKey) -> String;
}

/// Built-in English strings
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn localize(&self, key: LocalizationKey) -> String {
        match key {
            LocalizationKey::AlertTitle => "Update Available",
            LocalizationKey::AlertMessage => {
                "A new version of {app} is available. Please update to version {version} now."
            }
            LocalizationKey::UpdateButton => "Update",
            LocalizationKey::NextTimeButton => "Next time",
            LocalizationKey::SkipButton => "Skip this version",
        }
        .to_string()
    }
}
