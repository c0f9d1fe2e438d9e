//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Which numeric literal grammar the lexer accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericGrammar {
    /// At most one fractional part: `1.2.3` lexes as `1.2`, `.`, `3`.
    #[default]
    Strict,
    /// Any number of `.digits` groups, as earlier PQL lexers accepted.
    /// Lexemes such as `1.2.3` are captured whole and come out unrecognized,
    /// unless they contain a field name: `1.2.3e5` is a field name.
    Compat,
}

impl NumericGrammar {
    /// Returns the lowercase name of the grammar.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Compat => "compat",
        }
    }
}

/// Options for a [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Numeric literal grammar.
    pub numeric: NumericGrammar,
}

impl LexerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            numeric: NumericGrammar::Strict,
        }
    }

    /// Sets the numeric grammar.
    #[must_use]
    pub const fn numeric(mut self, numeric: NumericGrammar) -> Self {
        self.numeric = numeric;
        self
    }
}
