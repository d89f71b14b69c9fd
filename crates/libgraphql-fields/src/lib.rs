//! Reduces a GraphQL query document to the set of fields it selects.
//!
//! The pipeline runs text -> tokens -> AST -> [`FieldMap`]:
//! [`StrGraphQLTokenSource`](token_source::StrGraphQLTokenSource) lexes,
//! [`GraphQLParser`] builds an [`ast::Document`], and
//! [`selection_reducer`] collapses the first operation into an alphabetically
//! ordered map. [`query_to_field_map`] runs all three.
//!
//! No schema is consulted and nothing is executed: arguments, variables,
//! directives and aliases are parsed but never influence the result.

pub mod ast;
mod diagnostic;
mod field_map;
mod field_map_error;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_lex_error;
mod graphql_parse_error;
mod graphql_parser;
mod graphql_source_span;
mod graphql_syntax_error;
mod graphql_syntax_error_kind;
mod graphql_token_stream;
mod query_to_field_map;
pub mod selection_reducer;
mod source_position;
pub mod token;
pub mod token_source;

pub use field_map::FieldMap;
pub use field_map::FieldSelection;
pub use field_map_error::FieldMapError;
pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_lex_error::GraphQLLexError;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_syntax_error::GraphQLSyntaxError;
pub use graphql_syntax_error_kind::GraphQLSyntaxErrorKind;
pub use graphql_token_stream::GraphQLTokenStream;
pub use query_to_field_map::query_to_field_map;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use token_source::tokenize;

#[cfg(test)]
mod tests;
