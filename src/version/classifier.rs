//! Update magnitude classification
//!
//! The lookup API has no "change type" field, so the magnitude of an update
//! is inferred from which version position increased.

use serde::{Deserialize, Serialize};

use crate::version::compare::is_newer;
use crate::version::vector::VersionVector;

/// How significant an update is, most significant first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    /// A.b.c.d
    Major,
    /// a.B.c.d
    Minor,
    /// a.b.C.d
    Patch,
    /// a.b.c.D
    Revision,
    /// No update, or not enough information to tell
    Unknown,
}

impl UpdateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateType::Major => "major",
            UpdateType::Minor => "minor",
            UpdateType::Patch => "patch",
            UpdateType::Revision => "revision",
            UpdateType::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for UpdateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UpdateType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(UpdateType::Major),
            "minor" => Ok(UpdateType::Minor),
            "patch" => Ok(UpdateType::Patch),
            "revision" => Ok(UpdateType::Revision),
            "unknown" => Ok(UpdateType::Unknown),
            _ => Err(()),
        }
    }
}

/// Positions checked after the major component, with the type they signal
const POSITIONAL_TYPES: [(usize, UpdateType); 3] = [
    (1, UpdateType::Minor),
    (2, UpdateType::Patch),
    (3, UpdateType::Revision),
];

/// Classify the update from `installed` to `remote`
///
/// Evaluated strictly left to right: the first position where `remote`
/// increased, or where `remote` has a component that `installed` lacks,
/// decides the type. Returns `Unknown` when `remote` is not newer.
pub fn classify(installed: &VersionVector, remote: &VersionVector) -> UpdateType {
    if !is_newer(installed, remote) {
        return UpdateType::Unknown;
    }

    if remote.component(0) > installed.component(0) {
        return UpdateType::Major;
    }

    POSITIONAL_TYPES
        .iter()
        .find(|(position, _)| match (remote.get(*position), installed.get(*position)) {
            (Some(_), None) => true,
            (Some(new), Some(old)) => new > old,
            (None, _) => false,
        })
        .map(|(_, update_type)| *update_type)
        .unwrap_or(UpdateType::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(s: &str) -> VersionVector {
        VersionVector::from(s)
    }

    #[rstest]
    #[case("1.0.0", "2.0.0.0", UpdateType::Major)]
    #[case("1", "2", UpdateType::Major)]
    #[case("1.9.9", "2.0.0", UpdateType::Major)]
    #[case("1.2.0", "1.3.0", UpdateType::Minor)]
    #[case("1", "1.1", UpdateType::Minor)]
    #[case("1.2.3", "1.2.4", UpdateType::Patch)]
    #[case("1.2", "1.2.1", UpdateType::Patch)]
    #[case("1.2.3.4", "1.2.3.5", UpdateType::Revision)]
    #[case("1.2.3", "1.2.3.1", UpdateType::Revision)]
    #[case("1.2.3.4.5", "1.2.3.4.6", UpdateType::Unknown)] // beyond revision
    fn classify_returns_first_increased_position(
        #[case] installed: &str,
        #[case] remote: &str,
        #[case] expected: UpdateType,
    ) {
        assert_eq!(classify(&v(installed), &v(remote)), expected);
    }

    #[rstest]
    #[case("1.2.3", "1.2.3")]
    #[case("2.0", "1.9")]
    #[case("1.5", "1.0.1")]
    #[case("1", "1.0")]
    fn classify_returns_unknown_when_not_newer(#[case] installed: &str, #[case] remote: &str) {
        assert_eq!(classify(&v(installed), &v(remote)), UpdateType::Unknown);
    }

    #[test]
    fn classify_returns_unknown_without_installed_version() {
        assert_eq!(
            classify(&VersionVector::parse(None), &v("1.0.0")),
            UpdateType::Unknown
        );
    }

    #[rstest]
    #[case("1", "2")]
    #[case("1.2.3", "1.2.4")]
    #[case("1.2", "1.2.0.1")]
    #[case("0.9", "1")]
    #[case("3.1.4", "3.1.4.1")]
    fn classified_updates_are_newer(#[case] installed: &str, #[case] remote: &str) {
        let (installed, remote) = (v(installed), v(remote));

        if classify(&installed, &remote) != UpdateType::Unknown {
            assert!(is_newer(&installed, &remote));
        }
    }

    #[test]
    fn update_type_round_trips_through_str() {
        for update_type in [
            UpdateType::Major,
            UpdateType::Minor,
            UpdateType::Patch,
            UpdateType::Revision,
            UpdateType::Unknown,
        ] {
            assert_eq!(update_type.as_str().parse::<UpdateType>(), Ok(update_type));
        }
    }
}
