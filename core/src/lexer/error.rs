use crate::util::error::{BaseError, BaseErrorExt, LineInfo};

/// Lexer error
#[derive(Debug, Clone, PartialEq)]
pub struct LexerError {
    pub inner: BaseError,
}

impl LexerError {
    pub fn unexpected_character(c: char, info: LineInfo) -> Self {
        Self::new(format!("Unexpected character '{}'", c.escape_debug()), info)
    }

    pub fn unterminated_string(quote: char, info: LineInfo) -> Self {
        Self::new(format!("Unterminated string literal starting with {}", quote), info)
            .with_hint(format!("Add a closing {} to end the string", quote))
    }

    pub fn incomplete_operator(info: LineInfo) -> Self {
        Self::new("Incomplete comparison operator '!'".to_string(), info)
            .with_hint("Use '!=' for a negated match or '!~' for a negated regex match".to_string())
    }
}

impl BaseErrorExt for LexerError {
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

impl std::fmt::Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for LexerError {}
