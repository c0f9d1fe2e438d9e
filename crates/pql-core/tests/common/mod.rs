#![allow(dead_code)]

use pql_core::{Lexer, LexerConfig, NumericGrammar, Token, TokenKind, tokenize};

/// Queries that exercise every pattern, the priority rules and the fallback.
pub const CORPUS: &[&str] = &[
    "",
    "   ",
    "age > 10",
    "name = 'O''Brien'",
    r#"QUERY("hello world")"#,
    "asset:relation.path = '/a/b'",
    "x NOT LIKE 'foo'",
    "3.14e10",
    "a = 1 AND (b = 2 OR c = NULL)",
    "age > 10 AND (city = 'Paris' OR QUERY(\"some text\"))",
    "likes nullable emptyish",
    "not  like",
    "'unterminated",
    "\"also unterminated",
    r#"query("never closed"#,
    "1.2.3 4.5.6e7",
    "-5 +5 #? @ ; , ~",
    "a:b c:d.e f.g:h.i.j",
    "é = 'ü' AND ß != \"ø\"",
    "field\t=\n'multi\nline'",
    "'a''''b' \"\"\"\"",
    "((((x))))",
    "a=1and b=2",
    "QUERY(\"a\") query(\"b\")QUERY(\"c\")",
];

pub fn kinds(query: &str) -> Vec<TokenKind> {
    tokenize(query).into_iter().map(|t| t.kind).collect()
}

pub fn values(query: &str) -> Vec<String> {
    tokenize(query).into_iter().map(|t| t.value).collect()
}

pub fn pairs(query: &str) -> Vec<(TokenKind, String)> {
    tokenize(query).into_iter().map(|t| (t.kind, t.value)).collect()
}

pub fn tokenize_with(query: &str, numeric: NumericGrammar) -> Vec<Token> {
    Lexer::with_config(query, LexerConfig::new().numeric(numeric)).tokenize()
}

/// Asserts that the tokens tile `query`: ordered, non-overlapping, each raw
/// lexeme equal to its span, and only whitespace between tokens.
pub fn assert_covers(query: &str, tokens: &[Token]) {
    let mut cursor = 0;
    for token in tokens {
        assert!(
            token.span.start >= cursor,
            "Token {token:?} overlaps the previous one in {query:?}"
        );
        let gap = &query[cursor..token.span.start];
        assert!(
            gap.chars().all(char::is_whitespace),
            "Non-whitespace gap {gap:?} before {token:?} in {query:?}"
        );
        assert!(!token.is_empty(), "Empty token {token:?} in {query:?}");
        assert_eq!(token.span.slice(query), Some(token.raw.as_str()));
        cursor = token.span.end;
    }
    let tail = &query[cursor..];
    assert!(
        tail.chars().all(char::is_whitespace),
        "Unconsumed tail {tail:?} in {query:?}"
    );
}
