use crate::token::GraphQLToken;

/// Marker trait for GraphQL lexers: iterators that produce [`GraphQLToken`]s.
///
/// [`GraphQLParser`](crate::GraphQLParser) is generic over this trait so it
/// can run over [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource)
/// or any pre-built token sequence (tests use a `Vec`). Lookahead and
/// buffering live in [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// Implementors must:
/// - skip whitespace, commas and comments,
/// - emit [`GraphQLTokenKind::Error`](crate::token::GraphQLTokenKind::Error)
///   for input they cannot tokenize,
/// - finish with exactly one
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof).
pub trait GraphQLTokenSource<'src>: Iterator<Item = GraphQLToken<'src>> {}

impl<'src, T> GraphQLTokenSource<'src> for T where T: Iterator<Item = GraphQLToken<'src>> {}
