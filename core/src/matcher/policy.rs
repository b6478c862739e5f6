use std::collections::BTreeSet;

/// Labels that are managed by the alerting backend and never shown to users.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &["alertstate"];

/// Where excluded label names are enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Enforcement {
    /// Excluded names parse normally and are only left out when printing.
    #[default]
    FormatOnly,
    /// Excluded names are also rejected while parsing.
    Reject,
}

/// The set of excluded label names and how strictly they are enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPolicy {
    excluded: BTreeSet<String>,
    enforcement: Enforcement,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_NAMES.iter().copied())
    }
}

impl LabelPolicy {
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: excluded.into_iter().map(Into::into).collect(),
            enforcement: Enforcement::default(),
        }
    }

    /// A policy that excludes nothing.
    pub fn none() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    pub fn exclude(mut self, name: impl Into<String>) -> Self {
        self.excluded.insert(name.into());
        self
    }

    pub fn with_enforcement(self, enforcement: Enforcement) -> Self {
        Self {
            enforcement,
            ..self
        }
    }

    pub fn enforcement(&self) -> Enforcement {
        self.enforcement
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    pub fn rejects_on_parse(&self) -> bool {
        self.enforcement == Enforcement::Reject
    }

    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }
}
