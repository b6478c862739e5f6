use std::fmt::Display;

/// A comparison operator between a label name and its value.
///
/// Every operator is the combination of two independent facets:
/// - *equality*: `=` and `=~` require a match, `!=` and `!~` require a mismatch.
/// - *regex*: `=~` and `!~` compare against a regular expression,
///   `=` and `!=` against the literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `=~`
    RegexMatch,
    /// `!~`
    RegexNotMatch,
}

impl CompareOp {
    /// All operators, two-character forms first.
    /// This is the order the lexer must try them in.
    pub const ALL: [CompareOp; 4] = [
        CompareOp::NotEqual,
        CompareOp::RegexMatch,
        CompareOp::RegexNotMatch,
        CompareOp::Equal,
    ];

    pub fn from_flags(is_equal: bool, is_regex: bool) -> Self {
        match (is_equal, is_regex) {
            (true, false) => CompareOp::Equal,
            (true, true) => CompareOp::RegexMatch,
            (false, false) => CompareOp::NotEqual,
            (false, true) => CompareOp::RegexNotMatch,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "!=",
            CompareOp::RegexMatch => "=~",
            CompareOp::RegexNotMatch => "!~",
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, CompareOp::Equal | CompareOp::RegexMatch)
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, CompareOp::RegexMatch | CompareOp::RegexNotMatch)
    }

    /// Number of columns the operator occupies when printed.
    pub fn width(&self) -> usize {
        self.symbol().len()
    }
}

impl Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
