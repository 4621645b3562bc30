//! Alert rules and the presets applications usually pick from

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MIN_RELEASE_DAYS;
use crate::version::UpdateType;

/// How forcefully the user is interrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertType {
    /// Only an Update button
    Force,
    /// Next time and Update buttons
    Option,
    /// Next time, Update and Skip buttons
    Skip,
    /// No native dialog; content is handed to the caller's own UI
    None,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Force => "force",
            AlertType::Option => "option",
            AlertType::Skip => "skip",
            AlertType::None => "none",
        }
    }

    /// Whether the presentation layer shows a native dialog for this type
    pub fn shows_dialog(&self) -> bool {
        !matches!(self, AlertType::None)
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum interval between two alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFrequency", into = "RawFrequency")]
pub enum CheckFrequency {
    Immediately,
    /// Whole calendar days; always at least 1
    Days(u32),
}

impl CheckFrequency {
    pub const DAILY: CheckFrequency = CheckFrequency::Days(1);
    pub const WEEKLY: CheckFrequency = CheckFrequency::Days(7);

    /// `Days(0)` collapses to `Immediately`
    pub fn days(days: u32) -> Self {
        if days == 0 {
            CheckFrequency::Immediately
        } else {
            CheckFrequency::Days(days)
        }
    }

    pub fn as_days(&self) -> u32 {
        match self {
            CheckFrequency::Immediately => 0,
            CheckFrequency::Days(days) => *days,
        }
    }
}

/// Wire form: `"immediately" | "daily" | "weekly" | <days>`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawFrequency {
    Named(String),
    Days(u32),
}

impl TryFrom<RawFrequency> for CheckFrequency {
    type Error = String;

    fn try_from(raw: RawFrequency) -> Result<Self, Self::Error> {
        match raw {
            RawFrequency::Days(days) => Ok(CheckFrequency::days(days)),
            RawFrequency::Named(name) => match name.as_str() {
                "immediately" => Ok(CheckFrequency::Immediately),
                "daily" => Ok(CheckFrequency::DAILY),
                "weekly" => Ok(CheckFrequency::WEEKLY),
                other => Err(format!("unknown check frequency: {}", other)),
            },
        }
    }
}

impl From<CheckFrequency> for RawFrequency {
    fn from(frequency: CheckFrequency) -> Self {
        match frequency {
            CheckFrequency::Immediately => RawFrequency::Named("immediately".to_string()),
            CheckFrequency::Days(1) => RawFrequency::Named("daily".to_string()),
            CheckFrequency::Days(7) => RawFrequency::Named("weekly".to_string()),
            CheckFrequency::Days(days) => RawFrequency::Days(days),
        }
    }
}

/// Alert policy for one update type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rule {
    pub alert_type: AlertType,
    pub frequency: CheckFrequency,
    /// Days the release must have been public before it is announced; 0 disables
    pub min_release_days: u32,
}

impl Rule {
    pub fn new(frequency: CheckFrequency, alert_type: AlertType) -> Self {
        Self {
            alert_type,
            frequency,
            min_release_days: DEFAULT_MIN_RELEASE_DAYS,
        }
    }

    pub fn with_min_release_days(mut self, days: u32) -> Self {
        self.min_release_days = days;
        self
    }

    /// Alert on every check, user can dismiss
    pub fn annoying() -> Self {
        Self::new(CheckFrequency::Immediately, AlertType::Option)
    }

    /// Alert on every check, user must update
    pub fn critical() -> Self {
        Self::new(CheckFrequency::Immediately, AlertType::Force)
    }

    /// Once a week, user can skip the version
    pub fn hinting() -> Self {
        Self::new(CheckFrequency::WEEKLY, AlertType::Skip)
    }

    /// Once a day, user can dismiss
    pub fn persistent() -> Self {
        Self::new(CheckFrequency::DAILY, AlertType::Option)
    }

    /// Once a week, user can dismiss
    pub fn relaxed() -> Self {
        Self::new(CheckFrequency::WEEKLY, AlertType::Option)
    }
}

/// The `default` preset: once a day, user can skip the version
impl Default for Rule {
    fn default() -> Self {
        Self::new(CheckFrequency::DAILY, AlertType::Skip)
    }
}

/// One rule per update type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RulesManager {
    pub major: Rule,
    pub minor: Rule,
    pub patch: Rule,
    pub revision: Rule,
    /// Rule for `UpdateType::Unknown`; `None` falls back to the major rule
    pub unknown: Option<Rule>,
}

impl RulesManager {
    pub fn new(major: Rule, minor: Rule, patch: Rule, revision: Rule) -> Self {
        Self {
            major,
            minor,
            patch,
            revision,
            unknown: None,
        }
    }

    /// Same rule for every update type
    pub fn uniform(rule: Rule) -> Self {
        Self::new(rule, rule, rule, rule)
    }

    pub fn with_unknown(mut self, rule: Rule) -> Self {
        self.unknown = Some(rule);
        self
    }

    /// Overrides the release-age gate on every rule
    pub fn with_min_release_days(mut self, days: u32) -> Self {
        for rule in [
            &mut self.major,
            &mut self.minor,
            &mut self.patch,
            &mut self.revision,
        ] {
            rule.min_release_days = days;
        }
        if let Some(rule) = self.unknown.as_mut() {
            rule.min_release_days = days;
        }
        self
    }

    pub fn resolve(&self, update_type: UpdateType) -> &Rule {
        match update_type {
            UpdateType::Major => &self.major,
            UpdateType::Minor => &self.minor,
            UpdateType::Patch => &self.patch,
            UpdateType::Revision => &self.revision,
            UpdateType::Unknown => self.unknown.as_ref().unwrap_or(&self.major),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn rules() -> RulesManager {
        RulesManager::new(
            Rule::critical(),
            Rule::persistent(),
            Rule::hinting(),
            Rule::relaxed().with_min_release_days(3),
        )
    }

    #[rstest]
    #[case(UpdateType::Major, Rule::critical())]
    #[case(UpdateType::Minor, Rule::persistent())]
    #[case(UpdateType::Patch, Rule::hinting())]
    #[case(UpdateType::Revision, Rule::relaxed().with_min_release_days(3))]
    #[case(UpdateType::Unknown, Rule::critical())] // falls back to major
    fn resolve_returns_rule_for_update_type(#[case] update_type: UpdateType, #[case] expected: Rule) {
        assert_eq!(*rules().resolve(update_type), expected);
    }

    #[test]
    fn resolve_uses_configured_unknown_rule() {
        let silent = Rule::new(CheckFrequency::Immediately, AlertType::None);
        let manager = rules().with_unknown(silent);

        assert_eq!(*manager.resolve(UpdateType::Unknown), silent);
        assert_eq!(*manager.resolve(UpdateType::Major), Rule::critical());
    }

    #[test]
    fn uniform_uses_one_rule_for_every_type() {
        let manager = RulesManager::uniform(Rule::annoying());

        for update_type in [
            UpdateType::Major,
            UpdateType::Minor,
            UpdateType::Patch,
            UpdateType::Revision,
            UpdateType::Unknown,
        ] {
            assert_eq!(*manager.resolve(update_type), Rule::annoying());
        }
    }

    #[test]
    fn with_min_release_days_overrides_every_rule() {
        let manager = rules()
            .with_unknown(Rule::annoying())
            .with_min_release_days(0);

        assert_eq!(manager.major.min_release_days, 0);
        assert_eq!(manager.revision.min_release_days, 0);
        assert_eq!(manager.unknown.map(|r| r.min_release_days), Some(0));
    }

    #[test]
    fn default_rule_is_daily_skip_with_one_day_release_gate() {
        assert_eq!(
            Rule::default(),
            Rule {
                alert_type: AlertType::Skip,
                frequency: CheckFrequency::DAILY,
                min_release_days: 1,
            }
        );
    }

    #[rstest]
    #[case(json!("immediately"), CheckFrequency::Immediately)]
    #[case(json!("daily"), CheckFrequency::Days(1))]
    #[case(json!("weekly"), CheckFrequency::Days(7))]
    #[case(json!(3), CheckFrequency::Days(3))]
    #[case(json!(0), CheckFrequency::Immediately)]
    fn check_frequency_deserializes_names_and_days(
        #[case] value: serde_json::Value,
        #[case] expected: CheckFrequency,
    ) {
        assert_eq!(
            serde_json::from_value::<CheckFrequency>(value).unwrap(),
            expected
        );
    }

    #[test]
    fn check_frequency_rejects_unknown_name() {
        assert!(serde_json::from_value::<CheckFrequency>(json!("hourly")).is_err());
    }

    #[test]
    fn rules_manager_from_partial_object_uses_defaults_for_missing_fields() {
        let manager = serde_json::from_value::<RulesManager>(json!({
            "major": { "alertType": "force", "frequency": "immediately" },
            "patch": { "frequency": 14, "minReleaseDays": 0 }
        }))
        .unwrap();

        assert_eq!(
            manager.major,
            Rule::new(CheckFrequency::Immediately, AlertType::Force)
        );
        assert_eq!(manager.minor, Rule::default());
        assert_eq!(
            manager.patch,
            Rule {
                alert_type: AlertType::Skip,
                frequency: CheckFrequency::Days(14),
                min_release_days: 0,
            }
        );
        assert_eq!(manager.unknown, None);
    }

    #[test]
    fn alert_type_none_shows_no_dialog() {
        assert!(!AlertType::None.shows_dialog());
        assert!(AlertType::Force.shows_dialog());
        assert!(AlertType::Option.shows_dialog());
        assert!(AlertType::Skip.shows_dialog());
    }
}
