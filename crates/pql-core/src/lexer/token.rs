//! Token types for the PQL lexer.

use serde::{Deserialize, Serialize};

use super::Span;

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Names
    /// Plain field path (e.g., `age`, `address.city`)
    #[serde(rename = "FIELDNAME")]
    FieldName,
    /// Field path through a relation (e.g., `asset:relation.path`)
    RelationField,

    // Literals
    /// Integer literal (e.g., 42)
    Integer,
    /// Float literal (e.g., 3.14e10)
    Float,
    /// Quoted string literal (e.g., 'Paris')
    String,
    /// Full-text sub-query (e.g., QUERY("some text"))
    QueryString,
    /// NULL
    Null,
    /// EMPTY
    Empty,

    // Operators
    /// =
    Eq,
    /// !=
    #[serde(rename = "NEQ")]
    NotEq,
    /// >
    Gt,
    /// <
    Lt,
    /// >=
    #[serde(rename = "GTE")]
    GtEq,
    /// <=
    #[serde(rename = "LTE")]
    LtEq,
    /// LIKE
    Like,
    /// NOT LIKE
    NotLike,

    // Logical
    /// AND
    And,
    /// OR
    Or,

    // Delimiters
    /// (
    #[serde(rename = "LPAREN")]
    LeftParen,
    /// )
    #[serde(rename = "RPAREN")]
    RightParen,

    /// A single character no pattern accepts
    Unrecognized,
}

impl TokenKind {
    /// Looks up a fixed keyword, operator or delimiter (case-insensitive).
    ///
    /// Only the exact spellings of the token map are accepted; `not  like`
    /// with two spaces is not `NotLike`.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "=" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            ">" => Some(Self::Gt),
            "<" => Some(Self::Lt),
            ">=" => Some(Self::GtEq),
            "<=" => Some(Self::LtEq),
            "like" => Some(Self::Like),
            "not like" => Some(Self::NotLike),
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            "(" => Some(Self::LeftParen),
            ")" => Some(Self::RightParen),
            "null" => Some(Self::Null),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Returns the canonical spelling of the kind, used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FieldName => "FIELDNAME",
            Self::RelationField => "RELATION_FIELD",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::QueryString => "QUERY_STRING",
            Self::Null => "NULL",
            Self::Empty => "EMPTY",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::And => "AND",
            Self::Or => "OR",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Returns true for the comparison operators.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::NotEq
                | Self::Gt
                | Self::Lt
                | Self::GtEq
                | Self::LtEq
                | Self::Like
                | Self::NotLike
        )
    }

    /// Returns true for kinds that may appear on the right of an operator.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::String | Self::Null | Self::Empty
        )
    }

    /// Returns true for plain and relation field names.
    #[must_use]
    pub const fn is_field(&self) -> bool {
        matches!(self, Self::FieldName | Self::RelationField)
    }
}

impl core::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with its location in the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The normalized value (unquoted string, sub-query text, ...).
    pub value: String,
    /// The lexeme exactly as it appears in the query.
    pub raw: String,
    /// The location in the query.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        value: impl Into<String>,
        raw: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            value: value.into(),
            raw: raw.into(),
            span,
        }
    }

    /// Returns the start byte offset of the token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns the length of the raw lexeme in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.span.len()
    }

    /// Returns true if the raw lexeme is empty. Never the case for lexer output.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Returns true if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true if this token is the catch-all kind.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self.kind, TokenKind::Unrecognized)
    }
}
