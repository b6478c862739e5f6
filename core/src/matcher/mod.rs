pub mod list;
pub mod policy;

use std::fmt::Display;

use crate::parser::{ast::MatcherEntry, op::CompareOp};

/// A label matching condition.
///
/// `is_equal` and `is_regex` are independent, all four combinations are valid:
/// equals, not-equals, regex-equals and regex-not-equals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matcher {
    pub name: String,
    pub value: String,
    pub is_equal: bool,
    pub is_regex: bool,
}

impl Matcher {
    pub fn new(name: impl Into<String>, op: CompareOp, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_equal: op.is_equal(),
            is_regex: op.is_regex(),
        }
    }

    pub fn op(&self) -> CompareOp {
        CompareOp::from_flags(self.is_equal, self.is_regex)
    }
}

impl From<MatcherEntry> for Matcher {
    fn from(entry: MatcherEntry) -> Self {
        Matcher::new(entry.name, entry.op, entry.value)
    }
}

/// Canonical form: `name`, operator and the value as a double-quoted string.
impl Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.name, self.op(), quote(&self.value))
    }
}

/// Quote a value as a double-quoted string the lexer reads back to the same value.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
