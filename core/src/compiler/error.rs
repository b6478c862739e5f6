use std::fmt::Display;

use crate::{
    lexer::error::LexerError,
    parser::error::ParseError,
    util::error::{BaseError, BaseErrorExt},
};

/// Any error raised while compiling a matcher expression.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelError {
    Lexer(LexerError),
    Parse(ParseError),
}

impl LabelError {
    /// A short name for the error kind, used as the report title.
    pub fn kind(&self) -> &'static str {
        match self {
            LabelError::Lexer(_) => "lexer error",
            LabelError::Parse(_) => "parse error",
        }
    }

    pub fn is_lexer(&self) -> bool {
        matches!(self, LabelError::Lexer(_))
    }

    pub fn base(&self) -> &BaseError {
        match self {
            LabelError::Lexer(err) => err.base(),
            LabelError::Parse(err) => err.base(),
        }
    }

    pub fn to_base(self) -> BaseError {
        match self {
            LabelError::Lexer(err) => err.to_base(),
            LabelError::Parse(err) => err.to_base(),
        }
    }

    pub fn message(&self) -> &str {
        &self.base().message
    }
}

impl From<LexerError> for LabelError {
    fn from(err: LexerError) -> Self {
        LabelError::Lexer(err)
    }
}

impl From<ParseError> for LabelError {
    fn from(err: ParseError) -> Self {
        LabelError::Parse(err)
    }
}

impl Display for LabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind(), self.base())
    }
}

impl std::error::Error for LabelError {}
