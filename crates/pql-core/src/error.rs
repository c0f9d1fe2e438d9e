//! Error types for PQL tokenization.

use crate::lexer::{Span, Token, TokenKind};

/// Errors reported for a token sequence.
///
/// The lexer itself is total; these errors are produced only by callers that
/// ask for a strict scan or drive a [`TokenStream`](crate::TokenStream) with
/// expectations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character no pattern accepts.
    #[error("Unrecognized token '{lexeme}' at position {span}")]
    Unrecognized {
        /// The offending lexeme.
        lexeme: String,
        /// Where it was found.
        span: Span,
    },

    /// A token of the wrong kind at this position.
    #[error("Unexpected token: expected {expected}, found {found} '{lexeme}' at position {span}")]
    Unexpected {
        /// The kind the caller asked for.
        expected: TokenKind,
        /// The kind that was found.
        found: TokenKind,
        /// The lexeme that was found.
        lexeme: String,
        /// Where it was found.
        span: Span,
    },

    /// The query ended while a token was still expected.
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEnd {
        /// The kind the caller asked for.
        expected: TokenKind,
    },
}

impl LexError {
    /// Creates an "unrecognized token" error from a token.
    #[must_use]
    pub fn unrecognized(token: &Token) -> Self {
        Self::Unrecognized {
            lexeme: token.raw.clone(),
            span: token.span,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: TokenKind, found: &Token) -> Self {
        Self::Unexpected {
            expected,
            found: found.kind,
            lexeme: found.raw.clone(),
            span: found.span,
        }
    }

    /// Returns the span the error points at, if any.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Unrecognized { span, .. } | Self::Unexpected { span, .. } => Some(*span),
            Self::UnexpectedEnd { .. } => None,
        }
    }
}

/// Result type for PQL tokenization.
pub type Result<T> = std::result::Result<T, LexError>;
