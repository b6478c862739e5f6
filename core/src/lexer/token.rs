use std::fmt::{Debug, Display};

use crate::{parser::op::CompareOp, util::error::LineInfo};

// Token structure for matcher expressions
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    EndOfFile,
    // A label name or a bare value
    Identifier(String),
    // Quoted values, stored unescaped and without the surrounding quotes
    SingleQuoted(String),
    DoubleQuoted(String),
    Op(CompareOp),
    // Runs of whitespace and commas
    Separator(String),
}

impl TokenKind {
    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Identifier(_))
    }

    pub fn is_op(&self) -> bool {
        matches!(self, TokenKind::Op(_))
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::Separator(_))
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::EndOfFile)
    }

    /// Tokens that can stand on the right hand side of an operator.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier(_) | TokenKind::SingleQuoted(_) | TokenKind::DoubleQuoted(_)
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndOfFile => write!(f, "end of input"),
            Self::Identifier(s) => write!(f, "{}", s),
            Self::SingleQuoted(s) => write!(f, "'{}'", s),
            Self::DoubleQuoted(s) => write!(f, "\"{}\"", s),
            Self::Op(op) => write!(f, "{}", op),
            Self::Separator(_) => write!(f, "separator"),
        }
    }
}

/// TokenInfo is a structure that contains a token and its position in the input.
/// The raw text of the token can be recovered by slicing the input with `info.range()`.
#[derive(Clone, PartialEq)]
pub struct TokenInfo {
    /// The token itself
    pub token: TokenKind,
    /// The span of the token
    pub info: LineInfo,
}

impl TokenInfo {
    pub fn raw<'a>(&self, input: &'a str) -> &'a str {
        &input[self.info.range()]
    }
}

impl Debug for TokenInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} at {:?}", self.token, self.info)
    }
}
