//! PQL Tokenizer implementation.

use tracing::{debug, trace};

use super::classify::classify_with;
use super::patterns::{PatternKind, PatternTable, SubQueryScanner};
use super::{Span, Token};
use crate::config::{LexerConfig, NumericGrammar};
use crate::error::{LexError, Result};

/// A lexer that tokenizes PQL input.
///
/// The lexer is an iterator over [`Token`]s. Whitespace is skipped, every
/// other character ends up in exactly one token, and characters no pattern
/// accepts come out one at a time as
/// [`TokenKind::Unrecognized`](crate::TokenKind::Unrecognized).
///
/// ```
/// use pql_core::{Lexer, TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("age > 10").map(|t| t.kind).collect();
/// assert_eq!(kinds, vec![TokenKind::FieldName, TokenKind::Gt, TokenKind::Integer]);
/// ```
pub struct Lexer<'a> {
    /// The input query.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    numeric: NumericGrammar,
    patterns: &'static PatternTable,
    sub_queries: SubQueryScanner,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input with the default configuration.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, LexerConfig::default())
    }

    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn with_config(input: &'a str, config: LexerConfig) -> Self {
        Self {
            input,
            pos: 0,
            numeric: config.numeric,
            patterns: PatternTable::get(config.numeric),
            sub_queries: SubQueryScanner::default(),
        }
    }

    /// Restarts scanning over `input`.
    pub fn reset(&mut self, input: &'a str) {
        self.input = input;
        self.pos = 0;
        self.sub_queries = SubQueryScanner::default();
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// Scans the next token, or returns `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let start = self.pos;
        let rest = self.rest();
        let first = rest.chars().next()?;

        let matched = self
            .sub_queries
            .match_at(self.input, start)
            .map(|len| (PatternKind::QueryString, len))
            .or_else(|| self.patterns.match_at(rest));
        let len = match matched {
            Some((pattern, len)) => {
                trace!(pattern = pattern.name(), start, len, "matched");
                len
            }
            None => {
                trace!(start, character = %first.escape_debug(), "unrecognized character");
                first.len_utf8()
            }
        };

        self.pos += len;
        let raw = &self.input[start..self.pos];
        let (kind, value) = classify_with(raw, self.numeric);
        Some(Token::new(kind, value, raw, Span::new(start, self.pos)))
    }

    /// Tokenizes the remaining input and returns all tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            tokens = tokens.len(),
            unrecognized = tokens.iter().filter(|t| t.is_unrecognized()).count(),
            "tokenized query"
        );
        tokens
    }

    /// Tokenizes the remaining input, failing on the first unrecognized token.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::Unrecognized`] carrying the offending lexeme and its
    /// span.
    pub fn tokenize_strict(&mut self) -> Result<Vec<Token>> {
        let tokens = self.tokenize();
        match tokens.iter().find(|t| t.is_unrecognized()) {
            Some(token) => Err(LexError::unrecognized(token)),
            None => Ok(tokens),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

impl core::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes `query` with the default configuration.
#[must_use]
pub fn tokenize(query: &str) -> Vec<Token> {
    Lexer::new(query).tokenize()
}
