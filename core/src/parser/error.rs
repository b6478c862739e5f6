use crate::{
    lexer::token::TokenInfo,
    util::error::{BaseError, BaseErrorExt, LineInfo},
};

use super::op::CompareOp;

#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub inner: BaseError,
}

impl ParseError {
    pub fn expected_name(found: &TokenInfo) -> Self {
        Self::new(
            format!("Expected a label name, found {}", found.token),
            found.info.clone(),
        )
        .with_hint("Every matcher starts with a label name, like foo=\"bar\"".to_string())
    }

    pub fn expected_operator(name: &str, found: &TokenInfo) -> Self {
        Self::new(
            format!(
                "Expected a comparison operator after '{}', found {}",
                name, found.token
            ),
            found.info.clone(),
        )
        .with_hint("Use one of =, !=, =~ or !~".to_string())
    }

    pub fn expected_value(op: CompareOp, found: &TokenInfo) -> Self {
        Self::new(
            format!("Expected a value after '{}', found {}", op, found.token),
            found.info.clone(),
        )
        .with_hint("Values are identifiers or quoted strings".to_string())
    }

    /// A token after a complete matcher that cannot start a new one.
    pub fn expected_entry(found: &TokenInfo, previous: &LineInfo) -> Self {
        Self::new(
            format!(
                "Expected a new matcher or the end of input, found {}",
                found.token
            ),
            found.info.clone(),
        )
        .with_label("previous matcher ends here".to_string(), previous.clone())
    }

    pub fn reserved_name(name: &str, info: LineInfo) -> Self {
        Self::new(format!("Label name '{}' is reserved", name), info)
            .with_hint("Remove this matcher, the label is managed internally".to_string())
    }
}

impl BaseErrorExt for ParseError {
    fn new(message: String, info: LineInfo) -> Self {
        Self {
            inner: BaseError::new(message, info),
        }
    }

    fn with_hint(self, hint: String) -> Self {
        Self {
            inner: self.inner.with_hint(hint),
        }
    }

    fn with_label(self, message: String, info: LineInfo) -> Self {
        Self {
            inner: self.inner.with_label(message, info),
        }
    }

    fn base(&self) -> &BaseError {
        &self.inner
    }

    fn to_base(self) -> BaseError {
        self.inner
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for ParseError {}
