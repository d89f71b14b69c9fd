//! Helpers shared by the crate-level tests.

use crate::FieldMap;
use crate::FieldSelection;
use crate::GraphQLParseError;
use crate::GraphQLParser;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::SourcePosition;
use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Creates a token with the given kind and a zero-width span at the start
/// of input.
pub fn mock_token(kind: GraphQLTokenKind<'static>) -> GraphQLToken<'static> {
    GraphQLToken::new(kind, GraphQLSourceSpan::empty_at(SourcePosition::START))
}

pub fn mock_name_token(name: &str) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::name_owned(name.to_string()))
}

pub fn mock_eof_token() -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof)
}

/// A token source that replays a fixed list of tokens.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<GraphQLToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = GraphQLToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}

pub fn parse(source: &str) -> ast::Document<'_> {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => doc,
        Err(err) => panic!("unexpected parse error:\n{}", err.format_detailed(Some(source))),
    }
}

pub fn parse_err(source: &str) -> GraphQLParseError {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => panic!("expected a parse error, got {doc:#?}"),
        Err(err) => err,
    }
}

pub fn parse_syntax_err(source: &str) -> GraphQLSyntaxError {
    match parse_err(source) {
        GraphQLParseError::Syntax(err) => err,
        GraphQLParseError::Lex(err) => panic!("expected a syntax error, got lex error {err:?}"),
    }
}

/// Selection set of the first operation.
pub fn first_selection_set<'a, 'src>(doc: &'a ast::Document<'src>) -> &'a ast::SelectionSet<'src> {
    &doc.first_operation().expect("document has an operation").selection_set
}

pub fn field_at<'a, 'src>(
    selection_set: &'a ast::SelectionSet<'src>,
    index: usize,
) -> &'a ast::Field<'src> {
    match &selection_set.selections[index] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field at {index}, got {other:?}"),
    }
}

/// Builds a `FieldMap` from a JSON-ish literal, e.g.
/// `field_map(&[("hero", nested(&[("name", leaf())]))])`.
pub fn field_map(entries: &[(&str, FieldSelection)]) -> FieldMap {
    entries
        .iter()
        .map(|(name, selection)| (*name, selection.clone()))
        .collect()
}

pub fn leaf() -> FieldSelection {
    FieldSelection::Leaf
}

pub fn nested(entries: &[(&str, FieldSelection)]) -> FieldSelection {
    FieldSelection::Nested(field_map(entries))
}
