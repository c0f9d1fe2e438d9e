//! Lexeme classification.

use super::TokenKind;
use super::patterns::{
    contains_field_name, contains_relation_field, is_field_name, is_integer, is_numeric,
    is_relation_field,
};
use crate::config::NumericGrammar;

const QUERY_PREFIX: &str = "query(\"";
const QUERY_SUFFIX: &str = "\")";

/// Classifies a raw lexeme and computes its semantic value.
///
/// The result depends on the lexeme alone. Rules are applied in order:
/// numbers, quoted strings, sub-queries, the fixed token map, relation
/// fields, field names. Anything else is [`TokenKind::Unrecognized`].
///
/// ```
/// use pql_core::lexer::{TokenKind, classify};
///
/// assert_eq!(classify("'O''Brien'"), (TokenKind::String, String::from("O'Brien")));
/// assert_eq!(classify("10"), (TokenKind::Integer, String::from("10")));
/// assert_eq!(classify("Or"), (TokenKind::Or, String::from("Or")));
/// ```
#[must_use]
pub fn classify(raw: &str) -> (TokenKind, String) {
    classify_with(raw, NumericGrammar::Strict)
}

/// Classifies a raw lexeme under a numeric grammar.
///
/// With [`NumericGrammar::Compat`] the relation field and field name rules
/// accept a lexeme that merely contains such a name, so a compat number like
/// `1.2.3e5` classifies as a field name through its `e5` suffix. Under
/// [`NumericGrammar::Strict`] this is the same as [`classify`].
#[must_use]
pub fn classify_with(raw: &str, numeric: NumericGrammar) -> (TokenKind, String) {
    if is_numeric(raw) {
        let kind = if is_integer(raw) {
            TokenKind::Integer
        } else {
            TokenKind::Float
        };
        return (kind, raw.to_owned());
    }

    if let Some(inner) = quoted_body(raw) {
        return (TokenKind::String, unescape(inner));
    }

    if let Some(inner) = query_body(raw) {
        return (TokenKind::QueryString, inner.to_owned());
    }

    if let Some(kind) = TokenKind::from_str(raw) {
        return (kind, raw.to_owned());
    }

    let (relation, field) = match numeric {
        NumericGrammar::Strict => (is_relation_field(raw), is_field_name(raw)),
        NumericGrammar::Compat => (contains_relation_field(raw), contains_field_name(raw)),
    };
    let kind = if relation {
        TokenKind::RelationField
    } else if field {
        TokenKind::FieldName
    } else {
        TokenKind::Unrecognized
    };
    (kind, raw.to_owned())
}

/// Returns the text between matching outer quotes.
fn quoted_body(raw: &str) -> Option<&str> {
    let first = raw.chars().next()?;
    if raw.len() < 2 || !matches!(first, '\'' | '"') || !raw.ends_with(first) {
        return None;
    }
    // Both quote characters are one byte wide.
    Some(&raw[1..raw.len() - 1])
}

/// Collapses doubled quotes. Both quote styles are collapsed whatever the
/// enclosing quote was, each pair exactly once.
fn unescape(inner: &str) -> String {
    inner.replace("''", "'").replace("\"\"", "\"")
}

fn query_body(raw: &str) -> Option<&str> {
    let prefix = raw.get(..QUERY_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(QUERY_PREFIX) {
        return None;
    }
    let rest = &raw[QUERY_PREFIX.len()..];
    Some(rest.strip_suffix(QUERY_SUFFIX).unwrap_or(rest))
}
