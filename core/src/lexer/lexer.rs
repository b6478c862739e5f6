use std::{fmt::Display, path::PathBuf};

use crate::{
    parser::op::CompareOp,
    util::error::{LineInfo, LocationInfo},
};

use super::{
    error::LexerError,
    token::{TokenInfo, TokenKind},
};

/// Where a matcher expression came from, used when reporting errors.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    String,
    StdIn,
    File(PathBuf),
}

impl InputSource {
    pub fn name(&self) -> String {
        match self {
            InputSource::String => "<string>".to_string(),
            InputSource::StdIn => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

impl Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::String => write!(f, "string"),
            InputSource::StdIn => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "file '{}'", path.display()),
        }
    }
}

pub type LexResult = Result<TokenInfo, LexerError>;

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | ',')
}

/// Resolve the character following a backslash inside a quoted string.
/// Unknown escapes are kept as written so regular expressions like `\d` survive.
fn unescape(c: char, out: &mut String) {
    match c {
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'r' => out.push('\r'),
        '\\' | '"' | '\'' => out.push(c),
        _ => {
            out.push('\\');
            out.push(c);
        }
    }
}

/// A lexer over an in-memory matcher expression.
///
/// The lexer yields every token including separators,
/// use [`tokenize`] to get the stream the parser consumes.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    index: usize,
    line: usize,
    column: usize,
}

pub fn from_str(input: &str) -> Lexer<'_> {
    Lexer::new(input)
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            index: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn get_content(&self) -> &'a str {
        self.input
    }

    fn location(&self) -> LocationInfo {
        LocationInfo::new(self.index, self.line, self.column)
    }

    fn span_from(&self, start: LocationInfo) -> LineInfo {
        LineInfo::new(start, self.location())
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.index..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.index += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn eof_token(&self) -> TokenInfo {
        let start = self.location();
        let end = LocationInfo::eof(self.index, self.line, self.column);
        TokenInfo {
            token: TokenKind::EndOfFile,
            info: LineInfo::new(start, end),
        }
    }

    pub fn next_token(&mut self) -> LexResult {
        self.read_token()
    }

    fn read_token(&mut self) -> LexResult {
        let start = self.location();
        let Some(c) = self.peek_char() else {
            return Ok(self.eof_token());
        };
        let token = match c {
            '=' | '!' => self.read_operator(start.clone())?,
            '\'' | '"' => self.read_quoted(c, start.clone())?,
            c if is_identifier_start(c) => self.read_identifier(),
            c if is_separator(c) => self.read_separator(),
            c => {
                self.next_char();
                return Err(LexerError::unexpected_character(c, self.span_from(start)));
            }
        };
        let token = TokenInfo {
            token,
            info: self.span_from(start),
        };
        log::trace!("Lexed {:?}", token);
        Ok(token)
    }

    fn read_operator(&mut self, start: LocationInfo) -> Result<TokenKind, LexerError> {
        let rest = &self.input[self.index..];
        let Some(op) = CompareOp::ALL
            .into_iter()
            .find(|op| rest.starts_with(op.symbol()))
        else {
            self.next_char();
            return Err(LexerError::incomplete_operator(self.span_from(start)));
        };
        for _ in 0..op.width() {
            self.next_char();
        }
        Ok(TokenKind::Op(op))
    }

    fn read_identifier(&mut self) -> TokenKind {
        let start = self.index;
        while self.peek_char().is_some_and(is_identifier_char) {
            self.next_char();
        }
        TokenKind::Identifier(self.input[start..self.index].to_string())
    }

    fn read_separator(&mut self) -> TokenKind {
        let start = self.index;
        while self.peek_char().is_some_and(is_separator) {
            self.next_char();
        }
        TokenKind::Separator(self.input[start..self.index].to_string())
    }

    fn read_quoted(&mut self, quote: char, start: LocationInfo) -> Result<TokenKind, LexerError> {
        self.next_char();
        let mut value = String::new();
        let mut closed = false;
        while let Some(c) = self.next_char() {
            match c {
                c if c == quote => {
                    closed = true;
                    break;
                }
                '\\' => match self.next_char() {
                    Some(escaped) => unescape(escaped, &mut value),
                    None => break,
                },
                c => value.push(c),
            }
        }
        if !closed {
            return Err(LexerError::unterminated_string(
                quote,
                LineInfo::new(start, LocationInfo::eof(self.index, self.line, self.column)),
            ));
        }
        Ok(match quote {
            '\'' => TokenKind::SingleQuoted(value),
            _ => TokenKind::DoubleQuoted(value),
        })
    }
}

/// Lex the whole input, keeping separators. The trailing end-of-file token is not included.
pub fn tokenize_all(input: &str) -> Result<Vec<TokenInfo>, LexerError> {
    let mut lexer = from_str(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Lex the whole input into the stream the parser consumes:
/// separators are dropped and the stream always ends with an end-of-file token.
pub fn tokenize(input: &str) -> Result<Vec<TokenInfo>, LexerError> {
    let mut lexer = from_str(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.token.is_separator() {
            continue;
        }
        let eof = token.token.is_eof();
        tokens.push(token);
        if eof {
            break;
        }
    }
    log::debug!("Lexed {} tokens", tokens.len());
    Ok(tokens)
}
