use crate::util::error::LineInfo;

use super::op::CompareOp;

/// How a matcher value was written in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// An unquoted identifier, like `bar123` in `foo=bar123`
    Bare,
    SingleQuoted,
    DoubleQuoted,
}

/// One `name op value` unit exactly as the grammar produced it,
/// before duplicate names are resolved.
#[derive(Debug, Clone)]
pub struct MatcherEntry {
    pub name: String,
    pub op: CompareOp,
    /// The value with quotes removed and escapes resolved.
    pub value: String,
    pub kind: ValueKind,
    /// Span from the start of the name to the end of the value.
    pub info: LineInfo,
}

impl PartialEq for MatcherEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.op == other.op
            && self.value == other.value
            && self.kind == other.kind
    }
}

impl MatcherEntry {
    pub fn new(name: String, op: CompareOp, value: String, kind: ValueKind, info: LineInfo) -> Self {
        Self {
            name,
            op,
            value,
            kind,
            info,
        }
    }

    pub fn is_equal(&self) -> bool {
        self.op.is_equal()
    }

    pub fn is_regex(&self) -> bool {
        self.op.is_regex()
    }

    /// Print the entry close to how it was written, keeping the original quoting style.
    /// Escapes are not re-applied, use the printer for canonical output.
    pub fn print_expr(&self) -> String {
        match self.kind {
            ValueKind::Bare => format!("{}{}{}", self.name, self.op, self.value),
            ValueKind::SingleQuoted => format!("{}{}'{}'", self.name, self.op, self.value),
            ValueKind::DoubleQuoted => format!("{}{}\"{}\"", self.name, self.op, self.value),
        }
    }
}
