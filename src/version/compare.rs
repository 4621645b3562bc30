//! Comparison predicates over version vectors

use std::cmp::Ordering;

use crate::version::vector::VersionVector;

/// Returns true iff `remote` is strictly newer than `installed`
///
/// Comparison is numeric per component, with the shorter vector padded
/// with zeros. An absent version on either side returns false: without both
/// versions there is no certainty of an update.
pub fn is_newer(installed: &VersionVector, remote: &VersionVector) -> bool {
    if installed.is_empty() || remote.is_empty() {
        return false;
    }
    remote.cmp_padded(installed) == Ordering::Greater
}

/// Returns true iff `version` is equal to or newer than `minimum`
///
/// An absent minimum is always satisfied; an absent version never satisfies
/// a present minimum.
pub fn is_at_least(version: &VersionVector, minimum: &VersionVector) -> bool {
    if minimum.is_empty() {
        return true;
    }
    if version.is_empty() {
        return false;
    }
    version.cmp_padded(minimum) != Ordering::Less
}
