use std::collections::HashMap;

use super::Matcher;

/// What to do when a label name shows up more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The last occurrence wins, but keeps the position of the first one.
    #[default]
    Overwrite,
    /// Every occurrence is kept as its own entry.
    Allow,
}

impl DuplicatePolicy {
    pub fn from_allow(allow_duplicates: bool) -> Self {
        if allow_duplicates {
            DuplicatePolicy::Allow
        } else {
            DuplicatePolicy::Overwrite
        }
    }
}

/// An ordered list of matchers keyed by label name.
///
/// Entries are stored in insertion order next to an index from name to the
/// position of its first occurrence, so overwriting a duplicate is a lookup
/// instead of a scan.
#[derive(Debug, Clone, Default)]
pub struct MatcherList {
    policy: DuplicatePolicy,
    entries: Vec<Matcher>,
    index: HashMap<String, usize>,
}

impl MatcherList {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Add a matcher according to the duplicate policy.
    /// Returns `true` if an existing entry was overwritten.
    pub fn push(&mut self, matcher: Matcher) -> bool {
        if self.policy == DuplicatePolicy::Overwrite {
            if let Some(&i) = self.index.get(&matcher.name) {
                log::debug!(
                    "Overwriting matcher '{}' at position {} with {}",
                    matcher.name,
                    i,
                    matcher
                );
                let existing = &mut self.entries[i];
                existing.value = matcher.value;
                existing.is_equal = matcher.is_equal;
                existing.is_regex = matcher.is_regex;
                return true;
            }
        }
        self.index
            .entry(matcher.name.clone())
            .or_insert(self.entries.len());
        self.entries.push(matcher);
        false
    }

    /// The first entry with the given name.
    pub fn get(&self, name: &str) -> Option<&Matcher> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Matcher> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Matcher] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Matcher> {
        self.entries
    }
}

impl Extend<Matcher> for MatcherList {
    fn extend<T: IntoIterator<Item = Matcher>>(&mut self, iter: T) {
        for matcher in iter {
            self.push(matcher);
        }
    }
}

impl IntoIterator for MatcherList {
    type Item = Matcher;
    type IntoIter = std::vec::IntoIter<Matcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a MatcherList {
    type Item = &'a Matcher;
    type IntoIter = std::slice::Iter<'a, Matcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
