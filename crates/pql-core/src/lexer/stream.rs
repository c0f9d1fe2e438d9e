//! Lookahead cursor over the tokens of one query.

use super::{Lexer, Token, TokenKind};
use crate::config::LexerConfig;
use crate::error::{LexError, Result};

/// A token cursor for parsers.
///
/// The stream starts before the first token: call [`move_next`] to load the
/// lookahead. After each move, [`token`] is the token just moved past and
/// [`lookahead`] is the one a parser will consume next.
///
/// ```
/// use pql_core::{TokenKind, TokenStream};
///
/// let mut stream = TokenStream::new("age > 10");
/// assert!(stream.move_next());
/// assert!(stream.is_next_token(TokenKind::FieldName));
/// stream.move_next();
/// assert_eq!(stream.token().map(|t| t.value.as_str()), Some("age"));
/// assert_eq!(stream.lookahead().map(|t| t.kind), Some(TokenKind::Gt));
/// ```
///
/// [`move_next`]: TokenStream::move_next
/// [`token`]: TokenStream::token
/// [`lookahead`]: TokenStream::lookahead
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    config: LexerConfig,
    /// Index of the token `move_next` loads as the next lookahead.
    position: usize,
    /// Offset of the next `peek` past `position`.
    peek: usize,
    lookahead: Option<usize>,
    token: Option<usize>,
}

impl TokenStream {
    /// Tokenizes `query` with the default configuration.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self::with_config(query, LexerConfig::default())
    }

    /// Tokenizes `query` with the given configuration.
    #[must_use]
    pub fn with_config(query: &str, config: LexerConfig) -> Self {
        let mut stream = Self {
            config,
            ..Self::default()
        };
        stream.set_query(query);
        stream
    }

    /// Replaces the input and rewinds the cursor.
    pub fn set_query(&mut self, query: &str) {
        self.tokens = Lexer::with_config(query, self.config).tokenize();
        self.reset();
    }

    /// Rewinds to before the first token.
    pub fn reset(&mut self) {
        self.lookahead = None;
        self.token = None;
        self.peek = 0;
        self.position = 0;
    }

    /// Rewinds the peek cursor to the lookahead.
    pub fn reset_peek(&mut self) {
        self.peek = 0;
    }

    /// Makes the token at `position` the lookahead on the next `move_next`.
    pub fn reset_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Advances the cursor. Returns true if a lookahead token is available.
    pub fn move_next(&mut self) -> bool {
        self.peek = 0;
        self.token = self.lookahead;
        self.lookahead = if self.position < self.tokens.len() {
            self.position += 1;
            Some(self.position - 1)
        } else {
            None
        };
        self.lookahead.is_some()
    }

    /// The token most recently moved past.
    #[must_use]
    pub fn token(&self) -> Option<&Token> {
        self.token.map(|i| &self.tokens[i])
    }

    /// The next token to be consumed.
    #[must_use]
    pub fn lookahead(&self) -> Option<&Token> {
        self.lookahead.map(|i| &self.tokens[i])
    }

    /// Returns true if the lookahead has the given kind.
    #[must_use]
    pub fn is_next_token(&self, kind: TokenKind) -> bool {
        self.lookahead().is_some_and(|t| t.is(kind))
    }

    /// Returns true if the lookahead has any of the given kinds.
    #[must_use]
    pub fn is_next_token_any(&self, kinds: &[TokenKind]) -> bool {
        self.lookahead().is_some_and(|t| kinds.contains(&t.kind))
    }

    /// Moves forward until the lookahead has the given kind or the stream ends.
    pub fn skip_until(&mut self, kind: TokenKind) {
        while self.lookahead.is_some() && !self.is_next_token(kind) {
            self.move_next();
        }
    }

    /// Returns the next token after the lookahead not yet peeked at.
    ///
    /// Each call moves the peek cursor one further; the main cursor stays.
    pub fn peek(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position + self.peek)?;
        self.peek += 1;
        Some(token)
    }

    /// Peeks once and rewinds the peek cursor.
    pub fn glimpse(&mut self) -> Option<&Token> {
        let index = self.position + self.peek;
        self.peek = 0;
        self.tokens.get(index)
    }

    /// Consumes the lookahead if it has the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::Unexpected`] if the lookahead has another kind, or
    /// [`LexError::UnexpectedEnd`] if the stream is exhausted.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        match self.lookahead() {
            Some(token) if token.is(kind) => {
                let token = token.clone();
                self.move_next();
                Ok(token)
            }
            Some(token) => Err(LexError::unexpected(kind, token)),
            None => Err(LexError::UnexpectedEnd { expected: kind }),
        }
    }

    /// Moves through the rest of the stream, collecting every lookahead.
    pub fn remaining(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.move_next();
        while let Some(token) = self.lookahead() {
            tokens.push(token.clone());
            self.move_next();
        }
        tokens
    }

    /// Returns the canonical spelling of a token kind.
    #[must_use]
    pub const fn literal(kind: TokenKind) -> &'static str {
        kind.as_str()
    }

    /// All tokens of the query, independent of the cursor.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the query produced no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
