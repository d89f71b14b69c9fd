//! Tests for `tokenize`.

use crate::token::GraphQLTokenKind;
use crate::token_source::tokenize;

#[test]
fn tokenize_ends_with_eof() {
    let tokens = tokenize("query Q { a }").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens.last().map(|t| &t.kind), Some(GraphQLTokenKind::Eof)));
}

#[test]
fn tokenize_returns_first_lex_error() {
    let err = tokenize("{ a ? b ^ }").unwrap_err();
    assert_eq!(err.message(), "Unexpected character `?`");
    assert_eq!(err.span().start_inclusive.col_utf8(), 4);
    assert_eq!(err.format_oneline(), "<input>:1:5: error: Unexpected character `?`");
}

#[test]
fn tokenize_error_keeps_notes() {
    let err = tokenize("{ ..a }").unwrap_err();
    assert_eq!(err.notes().len(), 1);
}
