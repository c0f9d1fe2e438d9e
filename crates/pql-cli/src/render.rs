//! Output formatting for the CLI.

use std::fmt::Write;

use pql_core::{Span, Token};

/// Renders one token per line: kind, span, raw lexeme and, when it differs,
/// the normalized value.
pub fn text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = write!(
            out,
            "{:<16} {:<9} {}",
            token.kind.as_str(),
            token.span.to_string(),
            token.raw
        );
        if token.value != token.raw {
            let _ = write!(out, " => {:?}", token.value);
        }
        out.push('\n');
    }
    out
}

/// Renders the tokens as a pretty-printed JSON array.
pub fn json(tokens: &[Token]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tokens)
}

/// Renders an error pointing at `token` inside `query`.
///
/// ```text
/// error: unrecognized token '#' at 1:5
///   age # 10
///       ^
/// ```
pub fn diagnostic(query: &str, token: &Token) -> String {
    let start = token.span.start;
    let line_start = query[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = query[start..]
        .find('\n')
        .map_or(query.len(), |i| start + i);
    let line = &query[line_start..line_end];
    let line_number = query[..start].matches('\n').count() + 1;
    let column = Span::new(start - line_start, start - line_start).column(line);

    let visible_end = token.span.end.min(line_end);
    let width = query[start..visible_end].chars().count().max(1);

    format!(
        "error: unrecognized token '{}' at {}:{}\n  {}\n  {}{}",
        token.raw,
        line_number,
        column,
        line,
        " ".repeat(column - 1),
        "^".repeat(width)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pql_core::{TokenKind, tokenize};

    #[test]
    fn test_text_lists_each_token() {
        let out = text(&tokenize("name = 'O''Brien'"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("FIELDNAME"));
        assert!(lines[0].ends_with("name"));
        assert!(lines[1].starts_with('='));
        assert!(lines[2].starts_with("STRING"));
        assert!(lines[2].ends_with("'O''Brien' => \"O'Brien\""));
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(text(&[]), "");
    }

    #[test]
    fn test_json_uses_kind_names() {
        let out = json(&tokenize("a != 1")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["kind"], "FIELDNAME");
        assert_eq!(value[1]["kind"], "NEQ");
        assert_eq!(value[2]["value"], "1");
        assert_eq!(value[2]["span"]["start"], 5);
    }

    #[test]
    fn test_diagnostic_single_line() {
        let query = "age # 10";
        let token = tokenize(query)
            .into_iter()
            .find(|t| t.kind == TokenKind::Unrecognized)
            .unwrap();
        assert_eq!(
            diagnostic(query, &token),
            "error: unrecognized token '#' at 1:5\n  age # 10\n      ^"
        );
    }

    #[test]
    fn test_diagnostic_second_line() {
        let query = "a = 1\nAND b @ 2";
        let token = tokenize(query)
            .into_iter()
            .find(|t| t.kind == TokenKind::Unrecognized)
            .unwrap();
        assert_eq!(
            diagnostic(query, &token),
            "error: unrecognized token '@' at 2:7\n  AND b @ 2\n        ^"
        );
    }

    #[test]
    fn test_diagnostic_counts_characters() {
        let query = "é ~";
        let tokens = tokenize(query);
        assert_eq!(
            diagnostic(query, &tokens[1]),
            "error: unrecognized token '~' at 1:3\n  é ~\n    ^"
        );
    }
}
