use crate::{
    lexer::token::{TokenInfo, TokenKind},
    util::error::{LineInfo, LocationInfo},
};

use super::{
    ast::{MatcherEntry, ValueKind},
    error::ParseError,
    op::CompareOp,
};

//--------------------------------------------------------------------------------------//
//                                        Parser                                        //
//--------------------------------------------------------------------------------------//

/// A parse results is a list of matcher entries or a parse error.
pub type ParseResults = Result<Vec<MatcherEntry>, ParseError>;

/// What the parser expects to see next.
///
/// ```text
/// Expression = (Entry)* | Entry ("," Entry)+
/// Entry      = Ident Operator (SingleQuoted | DoubleQuoted | Ident)
/// ```
///
/// Separators are elided by the lexer, so both shapes of `Expression`
/// collapse into a plain sequence of entries.
#[derive(Debug, Clone)]
enum State {
    ExpectName,
    ExpectOperator { name: String, name_info: LineInfo },
    ExpectValue { name: String, name_info: LineInfo, op: CompareOp },
    ExpectSeparatorOrEnd,
}

/// An explicit state machine over a separator-free token stream.
///
/// An identifier is either a label name or a bare value, so after a complete
/// entry the parser peeks two tokens ahead: only an identifier followed by an
/// operator starts the next entry.
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<TokenInfo>,
    pos: usize,
}

impl Parser {
    /// Create a parser over the output of [`crate::lexer::lexer::tokenize`].
    /// A missing end-of-file token is added.
    pub fn new(mut tokens: Vec<TokenInfo>) -> Self {
        if !tokens.last().is_some_and(|t| t.token.is_eof()) {
            let end = tokens
                .last()
                .map(|t| t.info.end.clone())
                .unwrap_or_default();
            tokens.push(TokenInfo {
                token: TokenKind::EndOfFile,
                info: LineInfo::new(
                    end.clone(),
                    LocationInfo::eof(end.index, end.line, end.column),
                ),
            });
        }
        Self { tokens, pos: 0 }
    }

    fn peek_nth(&self, n: usize) -> &TokenInfo {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    fn peek(&self) -> &TokenInfo {
        self.peek_nth(0)
    }

    fn advance(&mut self) -> TokenInfo {
        let token = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        token
    }

    /// Parse every entry in the stream.
    /// Returns the entries in input order or the first parse error.
    pub fn parse_all(&mut self) -> ParseResults {
        let mut entries: Vec<MatcherEntry> = Vec::new();
        let mut state = State::ExpectName;

        loop {
            log::trace!("Parser state {:?} at {:?}", state, self.peek());
            state = match state {
                State::ExpectName => match &self.peek().token {
                    TokenKind::EndOfFile => break,
                    TokenKind::Identifier(name) => {
                        let name = name.clone();
                        let name_info = self.advance().info;
                        State::ExpectOperator { name, name_info }
                    }
                    _ => return Err(ParseError::expected_name(self.peek())),
                },
                State::ExpectOperator { name, name_info } => match self.peek().token {
                    TokenKind::Op(op) => {
                        self.advance();
                        State::ExpectValue {
                            name,
                            name_info,
                            op,
                        }
                    }
                    _ => return Err(ParseError::expected_operator(&name, self.peek())),
                },
                State::ExpectValue {
                    name,
                    name_info,
                    op,
                } => {
                    let (value, kind) = match &self.peek().token {
                        TokenKind::Identifier(v) => (v.clone(), ValueKind::Bare),
                        TokenKind::SingleQuoted(v) => (v.clone(), ValueKind::SingleQuoted),
                        TokenKind::DoubleQuoted(v) => (v.clone(), ValueKind::DoubleQuoted),
                        _ => return Err(ParseError::expected_value(op, self.peek())),
                    };
                    let value_info = self.advance().info;
                    let entry =
                        MatcherEntry::new(name, op, value, kind, name_info.join(&value_info));
                    log::debug!("Parsed matcher entry {}", entry.print_expr());
                    entries.push(entry);
                    State::ExpectSeparatorOrEnd
                }
                State::ExpectSeparatorOrEnd => {
                    match (&self.peek_nth(0).token, &self.peek_nth(1).token) {
                        (TokenKind::EndOfFile, _) => break,
                        (TokenKind::Identifier(_), TokenKind::Op(_)) => State::ExpectName,
                        (TokenKind::Identifier(found), _) => {
                            return Err(ParseError::expected_operator(found, self.peek_nth(1)))
                        }
                        _ => {
                            let previous = entries
                                .last()
                                .map(|e| e.info.clone())
                                .unwrap_or_default();
                            return Err(ParseError::expected_entry(self.peek(), &previous));
                        }
                    }
                }
            };
        }

        Ok(entries)
    }
}

/// Parse a separator-free token stream into matcher entries.
pub fn parse_tokens(tokens: Vec<TokenInfo>) -> ParseResults {
    Parser::new(tokens).parse_all()
}
