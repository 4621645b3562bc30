use std::cmp::Ordering;
use std::fmt;

/// A dot-delimited version string parsed into numeric components
///
/// Parsing never fails. A token that is not a non-negative integer becomes `0`,
/// and an absent string yields an empty vector. Comparisons treat missing
/// trailing components as `0`.
///
/// Examples:
/// - "1.2.3" -> [1, 2, 3]
/// - "2.0b.1" -> [2, 0, 1]
/// - None -> []
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionVector {
    components: Vec<u64>,
}

impl VersionVector {
    pub fn parse(version: Option<&str>) -> Self {
        let Some(version) = version else {
            return Self::default();
        };

        let components = version
            .split('.')
            .map(|token| token.trim().parse::<u64>().unwrap_or(0))
            .collect();

        Self { components }
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True when the source string was absent
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component at `index`, or `None` past the end of the vector
    pub fn get(&self, index: usize) -> Option<u64> {
        self.components.get(index).copied()
    }

    /// Component at `index`, zero-padded past the end of the vector
    pub fn component(&self, index: usize) -> u64 {
        self.get(index).unwrap_or(0)
    }

    /// Numeric comparison, padding the shorter vector with zeros
    pub fn cmp_padded(&self, other: &Self) -> Ordering {
        let len = self.len().max(other.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl From<&str> for VersionVector {
    fn from(version: &str) -> Self {
        Self::parse(Some(version))
    }
}

impl fmt::Display for VersionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}
