//! Name-based denylist matching.

use crate::Error;

/// Names excluded by default: common credential and contact field names.
pub const DEFAULT_EXCLUSIONS: [&str; 5] = ["username", "password", "email", "token", "bearer"];

/// An immutable set of case-insensitive substrings.
///
/// A name is excluded when it contains any pattern, ignoring case. Patterns are
/// stored lowercased and de-duplicated; insertion order is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    patterns: Vec<String>,
}

impl ExclusionSet {
    /// Builds a set from `patterns`.
    ///
    /// Fails with [`Error::EmptyPattern`] if any pattern is empty.
    pub fn new<I, S>(patterns: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for pattern in patterns {
            set.insert(pattern.as_ref())?;
        }
        Ok(set)
    }

    /// A set that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The [`DEFAULT_EXCLUSIONS`].
    pub fn defaults() -> Self {
        Self {
            patterns: DEFAULT_EXCLUSIONS.iter().map(|p| (*p).to_owned()).collect(),
        }
    }

    /// Adds a pattern. Returns `false` if an equal pattern (ignoring case) was
    /// already present.
    pub fn insert(&mut self, pattern: &str) -> Result<bool, Error> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        let pattern = pattern.to_lowercase();
        if self.patterns.contains(&pattern) {
            return Ok(false);
        }
        self.patterns.push(pattern);
        Ok(true)
    }

    /// Adds every pattern from `other`.
    pub fn merge(&mut self, other: &ExclusionSet) {
        for pattern in &other.patterns {
            if !self.patterns.contains(pattern) {
                self.patterns.push(pattern.clone());
            }
        }
    }

    /// Returns true if `name` contains any pattern, ignoring case.
    pub fn matches(&self, name: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let name = name.to_lowercase();
        self.patterns
            .iter()
            .any(|pattern| name.contains(pattern.as_str()))
    }

    /// The stored (lowercased) patterns.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ExclusionSet, DEFAULT_EXCLUSIONS};
    use crate::Error;

    #[test]
    fn matches_substrings_ignoring_case() {
        let set = ExclusionSet::new(["password"]).unwrap();
        assert!(set.matches("password"));
        assert!(set.matches("UserPassword"));
        assert!(set.matches("PASSWORD_HASH"));
        assert!(!set.matches("passcode"));
    }

    #[test]
    fn patterns_are_case_folded() {
        let set = ExclusionSet::new(["ToKeN"]).unwrap();
        assert!(set.matches("accessToken"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["token"]);
    }

    #[test]
    fn empty_set_matches_nothing() {
        let set = ExclusionSet::empty();
        assert!(!set.matches("password"));
        assert!(!set.matches(""));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let result = ExclusionSet::new(["token", ""]);
        assert!(matches!(result, Err(Error::EmptyPattern)));
    }

    #[test]
    fn duplicates_are_ignored_case_insensitively() {
        let mut set = ExclusionSet::new(["Email"]).unwrap();
        assert!(!set.insert("EMAIL").unwrap());
        assert!(set.insert("phone").unwrap());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn merge_keeps_first_seen_order() {
        let mut set = ExclusionSet::new(["secret", "token"]).unwrap();
        set.merge(&ExclusionSet::defaults());
        let patterns: Vec<&str> = set.iter().collect();
        assert_eq!(
            patterns,
            vec!["secret", "token", "username", "password", "email", "bearer"]
        );
    }

    #[test]
    fn defaults_cover_credentials() {
        let set = ExclusionSet::defaults();
        assert_eq!(set.len(), DEFAULT_EXCLUSIONS.len());
        assert!(set.matches("BearerHeader"));
        assert!(set.matches("user_email"));
        assert!(!set.matches("id"));
    }
}
