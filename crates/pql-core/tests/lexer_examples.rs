//! Tokenization of representative PQL queries.

mod common;
use common::*;

use pretty_assertions::assert_eq;
use pql_core::{NumericGrammar, TokenKind};

fn s(value: &str) -> String {
    String::from(value)
}

#[test]
fn comparison_with_integer() {
    assert_eq!(
        pairs("age > 10"),
        vec![
            (TokenKind::FieldName, s("age")),
            (TokenKind::Gt, s(">")),
            (TokenKind::Integer, s("10")),
        ]
    );
}

#[test]
fn doubled_single_quote_is_unescaped() {
    assert_eq!(
        pairs("name = 'O''Brien'"),
        vec![
            (TokenKind::FieldName, s("name")),
            (TokenKind::Eq, s("=")),
            (TokenKind::String, s("O'Brien")),
        ]
    );
}

#[test]
fn sub_query_keeps_inner_text() {
    assert_eq!(
        pairs(r#"QUERY("hello world")"#),
        vec![(TokenKind::QueryString, s("hello world"))]
    );
}

#[test]
fn relation_field_comparison() {
    assert_eq!(
        pairs("asset:relation.path = '/a/b'"),
        vec![
            (TokenKind::RelationField, s("asset:relation.path")),
            (TokenKind::Eq, s("=")),
            (TokenKind::String, s("/a/b")),
        ]
    );
}

#[test]
fn not_like_is_one_token() {
    assert_eq!(
        pairs("x NOT LIKE 'foo'"),
        vec![
            (TokenKind::FieldName, s("x")),
            (TokenKind::NotLike, s("NOT LIKE")),
            (TokenKind::String, s("foo")),
        ]
    );
}

#[test]
fn float_with_exponent() {
    assert_eq!(pairs("3.14e10"), vec![(TokenKind::Float, s("3.14e10"))]);
}

#[test]
fn nested_condition() {
    assert_eq!(
        kinds("a = 1 AND (b = 2 OR c = NULL)"),
        vec![
            TokenKind::FieldName,
            TokenKind::Eq,
            TokenKind::Integer,
            TokenKind::And,
            TokenKind::LeftParen,
            TokenKind::FieldName,
            TokenKind::Eq,
            TokenKind::Integer,
            TokenKind::Or,
            TokenKind::FieldName,
            TokenKind::Eq,
            TokenKind::Null,
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn unescaping_applies_once() {
    assert_eq!(values("'a''''b'"), vec![s("a''b")]);
    assert_eq!(values("''''"), vec![s("'")]);
}

#[test]
fn mixed_condition_with_sub_query() {
    assert_eq!(
        pairs("age > 10 AND (city = 'Paris' OR QUERY(\"some text\"))"),
        vec![
            (TokenKind::FieldName, s("age")),
            (TokenKind::Gt, s(">")),
            (TokenKind::Integer, s("10")),
            (TokenKind::And, s("AND")),
            (TokenKind::LeftParen, s("(")),
            (TokenKind::FieldName, s("city")),
            (TokenKind::Eq, s("=")),
            (TokenKind::String, s("Paris")),
            (TokenKind::Or, s("OR")),
            (TokenKind::QueryString, s("some text")),
            (TokenKind::RightParen, s(")")),
        ]
    );
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(
        kinds("a Not Like 'x' and b like 'y' OR c = nUlL or d = EMPTY"),
        vec![
            TokenKind::FieldName,
            TokenKind::NotLike,
            TokenKind::String,
            TokenKind::And,
            TokenKind::FieldName,
            TokenKind::Like,
            TokenKind::String,
            TokenKind::Or,
            TokenKind::FieldName,
            TokenKind::Eq,
            TokenKind::Null,
            TokenKind::Or,
            TokenKind::FieldName,
            TokenKind::Eq,
            TokenKind::Empty,
        ]
    );
}

#[test]
fn dotted_field_paths() {
    assert_eq!(
        pairs("standardFields.en.title = \"x\""),
        vec![
            (TokenKind::FieldName, s("standardFields.en.title")),
            (TokenKind::Eq, s("=")),
            (TokenKind::String, s("x")),
        ]
    );
}

#[test]
fn relation_path_may_start_with_dotted_field() {
    assert_eq!(
        kinds("parent.asset:relation.fields.name = 1"),
        vec![TokenKind::RelationField, TokenKind::Eq, TokenKind::Integer]
    );
}

#[test]
fn and_glued_to_number_is_a_field() {
    // `1and` is a number followed by the field name `and`, classified as AND.
    assert_eq!(
        kinds("a=1and b=2"),
        vec![
            TokenKind::FieldName,
            TokenKind::Eq,
            TokenKind::Integer,
            TokenKind::And,
            TokenKind::FieldName,
            TokenKind::Eq,
            TokenKind::Integer,
        ]
    );
}

#[test]
fn adjacent_sub_queries() {
    assert_eq!(
        values("QUERY(\"a\") query(\"b\")QUERY(\"c\")"),
        vec![s("a"), s("b"), s("c")]
    );
}

#[test]
fn unrecognized_characters_are_emitted_one_by_one() {
    assert_eq!(
        pairs("a # b @@"),
        vec![
            (TokenKind::FieldName, s("a")),
            (TokenKind::Unrecognized, s("#")),
            (TokenKind::FieldName, s("b")),
            (TokenKind::Unrecognized, s("@")),
            (TokenKind::Unrecognized, s("@")),
        ]
    );
}

#[test]
fn compat_numeric_grammar_keeps_multi_dot_lexeme() {
    let tokens = tokenize_with("v = 1.2.3", NumericGrammar::Compat);
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Unrecognized);
    assert_eq!(last.raw, "1.2.3");

    let tokens = tokenize_with("v = 1.2.3", NumericGrammar::Strict);
    assert_eq!(tokens.len(), 5);
}
