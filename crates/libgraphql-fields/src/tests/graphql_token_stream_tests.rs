//! Tests for GraphQLTokenStream.

use crate::GraphQLTokenStream;
use crate::tests::utils;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;

#[test]
fn peek_does_not_consume() {
    let tokens = vec![
        utils::mock_name_token("query"),
        utils::mock_name_token("Hero"),
        utils::mock_eof_token(),
    ];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));

    let first_peek = stream.peek().map(|t| t.kind.clone());
    let second_peek = stream.peek().map(|t| t.kind.clone());
    assert_eq!(first_peek, second_peek);
    assert!(matches!(first_peek, Some(GraphQLTokenKind::Name(ref name)) if name == "query"));

    let consumed = stream.consume().map(|t| t.kind);
    assert_eq!(first_peek, consumed);
}

#[test]
fn consume_advances() {
    let tokens = vec![
        utils::mock_name_token("query"),
        utils::mock_name_token("Hero"),
        utils::mock_eof_token(),
    ];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));

    stream.consume();
    let next = stream.peek().map(|t| t.kind.clone());
    assert!(matches!(next, Some(GraphQLTokenKind::Name(name)) if name == "Hero"));
}

#[test]
fn peek_nth_fills_lazily() {
    let tokens = vec![
        utils::mock_name_token("a"),
        utils::mock_name_token("b"),
        utils::mock_name_token("c"),
        utils::mock_eof_token(),
    ];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));
    assert_eq!(stream.current_buffer_len(), 0);

    let third = stream.peek_nth(2).map(|t| t.kind.clone());
    assert!(matches!(third, Some(GraphQLTokenKind::Name(name)) if name == "c"));
    assert_eq!(stream.current_buffer_len(), 3);

    stream.consume();
    assert_eq!(stream.current_buffer_len(), 2);
}

#[test]
fn peek_nth_past_end_is_none() {
    let tokens = vec![utils::mock_name_token("a"), utils::mock_eof_token()];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));
    assert!(stream.peek_nth(5).is_none());
    assert_eq!(stream.current_buffer_len(), 2);
}

#[test]
fn is_at_end_on_eof_and_exhaustion() {
    let tokens = vec![utils::mock_name_token("a"), utils::mock_eof_token()];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));
    assert!(!stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    assert!(stream.consume().is_none());

    let mut empty = GraphQLTokenStream::new(utils::MockTokenSource::new(vec![]));
    assert!(empty.is_at_end());
}

#[test]
fn over_str_token_source() {
    let mut stream = GraphQLTokenStream::new(StrGraphQLTokenSource::new("{ hero }"));
    assert!(matches!(stream.consume().map(|t| t.kind), Some(GraphQLTokenKind::CurlyBraceOpen)));
    assert!(matches!(
        stream.peek_nth(1).map(|t| &t.kind),
        Some(GraphQLTokenKind::CurlyBraceClose)
    ));
    stream.consume();
    stream.consume();
    assert!(stream.is_at_end());
}
