//! # pql-core
//!
//! Lexer for PQL, the filter language of the search index.
//!
//! A PQL query is a condition over indexed entities:
//!
//! ```text
//! age > 10 AND (city = 'Paris' OR QUERY("some text"))
//! ```
//!
//! This crate turns such a string into typed tokens for a parser to consume.
//! The lexer is total: characters it cannot place come out as
//! [`TokenKind::Unrecognized`] tokens rather than errors, so the parser can
//! report a precise position.
//!
//! ```rust
//! use pql_core::{TokenKind, tokenize};
//!
//! let tokens = tokenize("name = 'O''Brien'");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, vec![TokenKind::FieldName, TokenKind::Eq, TokenKind::String]);
//! assert_eq!(tokens[2].value, "O'Brien");
//! ```
//!
//! Parsers that want a lookahead cursor use [`TokenStream`]:
//!
//! ```rust
//! use pql_core::{TokenKind, TokenStream};
//!
//! let mut stream = TokenStream::new("asset:relation.path = '/a/b'");
//! stream.move_next();
//! let field = stream.expect(TokenKind::RelationField).unwrap();
//! assert_eq!(field.value, "asset:relation.path");
//! assert!(stream.is_next_token(TokenKind::Eq));
//! ```

pub mod config;
pub mod error;
pub mod lexer;

pub use config::{LexerConfig, NumericGrammar};
pub use error::{LexError, Result};
pub use lexer::{Lexer, Span, Token, TokenKind, TokenStream, classify, classify_with, tokenize};
