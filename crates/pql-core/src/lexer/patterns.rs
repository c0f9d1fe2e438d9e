//! The ordered pattern table.
//!
//! At each cursor position the patterns are tried in table order and the
//! first one that matches wins, even when a later pattern would match a
//! longer lexeme. `like` therefore wins over the field name `likes`, and the
//! relation field pattern must come before the plain field name because the
//! latter is a prefix of the former.
//!
//! The sub-query pattern `query("...")` has the highest priority. It is not a
//! regex in the table but a [`SubQueryScanner`] owned by each lexer, which
//! remembers where the next closing `")` is.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::NumericGrammar;

/// `[A-Za-z_][A-Za-z0-9_]*`
const IDENTIFIER: &str = "[A-Za-z_][A-Za-z0-9_]*";

const STRING_SINGLE_QUOTE: &str = "'(?:[^']|'')*'";
const STRING_DOUBLE_QUOTE: &str = r#""(?:[^"]|"")*""#;
const OPERATOR: &str = ">=|<=|!=|=|>|<|(?i-u:not like)|(?i-u:like)";
const KEYWORD: &str = "(?i-u:null|empty)";
const NUMBER_STRICT: &str = "[0-9]+(?:\\.[0-9]+)?(?:[eE][+-]?[0-9]+)?";
const NUMBER_COMPAT: &str = "[0-9]+(?:\\.[0-9]+)*(?:[eE][+-]?[0-9]+)?";
const PARENTHESES: &str = "[()]";

/// A numeric string: optional sign, digits with optional fraction or a bare
/// fraction, optional exponent.
const NUMERIC_STRING: &str = r"[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";
const INTEGER_STRING: &str = "-?[0-9]+";

/// `identifier(.identifier)*`
fn field_name() -> String {
    format!(r"{IDENTIFIER}(?:\.{IDENTIFIER})*")
}

/// `field_name:identifier(.identifier)+`
fn relation_field() -> String {
    format!(r"{}:{IDENTIFIER}(?:\.{IDENTIFIER})+", field_name())
}

/// Compiles a pattern anchored at the start of the haystack.
fn anchored(source: &str) -> Regex {
    Regex::new(&format!(r"\A(?:{source})")).expect("Invalid lexer pattern regex")
}

/// Compiles a pattern that must match the whole haystack.
fn exact(source: &str) -> Regex {
    Regex::new(&format!(r"\A(?:{source})\z")).expect("Invalid lexer pattern regex")
}

/// Compiles a pattern that may match anywhere in the haystack.
fn search(source: &str) -> Regex {
    Regex::new(source).expect("Invalid lexer pattern regex")
}

/// What a table entry recognizes. Only used for diagnostics; token kinds are
/// decided by classification of the captured lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    QueryString,
    SingleQuotedString,
    DoubleQuotedString,
    Operator,
    Keyword,
    RelationField,
    FieldName,
    Number,
    Parenthesis,
}

impl PatternKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::QueryString => "query_string",
            Self::SingleQuotedString => "single_quoted_string",
            Self::DoubleQuotedString => "double_quoted_string",
            Self::Operator => "operator",
            Self::Keyword => "keyword",
            Self::RelationField => "relation_field",
            Self::FieldName => "field_name",
            Self::Number => "number",
            Self::Parenthesis => "parenthesis",
        }
    }
}

#[derive(Debug)]
struct Pattern {
    kind: PatternKind,
    regex: Regex,
}

/// Compiled, ordered list of the catchable patterns after the sub-query.
#[derive(Debug)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
}

static STRICT_TABLE: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::build(NumericGrammar::Strict));
static COMPAT_TABLE: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::build(NumericGrammar::Compat));

impl PatternTable {
    fn build(numeric: NumericGrammar) -> Self {
        let number = match numeric {
            NumericGrammar::Strict => NUMBER_STRICT,
            NumericGrammar::Compat => NUMBER_COMPAT,
        };
        let relation = relation_field();
        let field = field_name();

        let entries: [(PatternKind, &str); 8] = [
            (PatternKind::SingleQuotedString, STRING_SINGLE_QUOTE),
            (PatternKind::DoubleQuotedString, STRING_DOUBLE_QUOTE),
            (PatternKind::Operator, OPERATOR),
            (PatternKind::Keyword, KEYWORD),
            (PatternKind::RelationField, relation.as_str()),
            (PatternKind::FieldName, field.as_str()),
            (PatternKind::Number, number),
            (PatternKind::Parenthesis, PARENTHESES),
        ];

        let patterns = entries
            .into_iter()
            .map(|(kind, source)| Pattern {
                kind,
                regex: anchored(source),
            })
            .collect();

        Self { patterns }
    }

    /// Returns the shared table for a numeric grammar.
    pub fn get(numeric: NumericGrammar) -> &'static Self {
        match numeric {
            NumericGrammar::Strict => &STRICT_TABLE,
            NumericGrammar::Compat => &COMPAT_TABLE,
        }
    }

    /// Finds the first pattern matching at the start of `rest`.
    ///
    /// Returns the pattern kind and the byte length of the lexeme. Empty
    /// matches are skipped so that a match always advances the cursor.
    pub fn match_at(&self, rest: &str) -> Option<(PatternKind, usize)> {
        self.patterns.iter().find_map(|pattern| {
            pattern
                .regex
                .find(rest)
                .filter(|m| !m.is_empty())
                .map(|m| (pattern.kind, m.end()))
        })
    }
}

/// Offset of the next occurrence of a needle, remembered between searches.
#[derive(Debug, Clone, Copy, Default)]
struct NextOccurrence {
    /// Where the last search started and what it found.
    cache: Option<(usize, Option<usize>)>,
}

impl NextOccurrence {
    /// Returns the first occurrence of `needle` at or after `from`.
    ///
    /// A cached answer stays valid while `from` has not moved past it, so a
    /// cursor that only moves forward searches each byte at most once.
    fn find(&mut self, haystack: &str, needle: &str, from: usize) -> Option<usize> {
        match self.cache {
            Some((start, found)) if start <= from && !found.is_some_and(|at| at < from) => found,
            _ => {
                let found = haystack
                    .get(from..)
                    .and_then(|rest| rest.find(needle))
                    .map(|at| from + at);
                self.cache = Some((from, found));
                found
            }
        }
    }
}

/// Matches sub-queries: `query` in any ASCII case, `("`, the shortest run of
/// characters other than a newline, then `")`.
#[derive(Debug, Clone, Default)]
pub struct SubQueryScanner {
    close: NextOccurrence,
    newline: NextOccurrence,
}

impl SubQueryScanner {
    const OPEN: &'static [u8] = b"query(\"";

    /// Returns the byte length of the sub-query starting at `pos`, if any.
    ///
    /// Successive calls must not move `pos` backwards over the same input.
    pub fn match_at(&mut self, input: &str, pos: usize) -> Option<usize> {
        let head = input.as_bytes().get(pos..pos + Self::OPEN.len())?;
        if !head.eq_ignore_ascii_case(Self::OPEN) {
            return None;
        }
        let body = pos + Self::OPEN.len();
        let close = self.close.find(input, "\")", body)?;
        if self
            .newline
            .find(input, "\n", body)
            .is_some_and(|newline| newline < close)
        {
            return None;
        }
        Some(close + 2 - pos)
    }
}

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| exact(NUMERIC_STRING));
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| exact(INTEGER_STRING));
static RELATION_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| exact(&relation_field()));
static FIELD_NAME_RE: LazyLock<Regex> = LazyLock::new(|| exact(&field_name()));
static RELATION_FIELD_SEARCH_RE: LazyLock<Regex> =
    LazyLock::new(|| search(&relation_field()));
static FIELD_NAME_SEARCH_RE: LazyLock<Regex> = LazyLock::new(|| search(&field_name()));

pub fn is_numeric(lexeme: &str) -> bool {
    NUMERIC_RE.is_match(lexeme)
}

pub fn is_integer(lexeme: &str) -> bool {
    INTEGER_RE.is_match(lexeme)
}

pub fn is_relation_field(lexeme: &str) -> bool {
    RELATION_FIELD_RE.is_match(lexeme)
}

pub fn is_field_name(lexeme: &str) -> bool {
    FIELD_NAME_RE.is_match(lexeme)
}

pub fn contains_relation_field(lexeme: &str) -> bool {
    RELATION_FIELD_SEARCH_RE.is_match(lexeme)
}

pub fn contains_field_name(lexeme: &str) -> bool {
    FIELD_NAME_SEARCH_RE.is_match(lexeme)
}
