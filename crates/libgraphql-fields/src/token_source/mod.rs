//! Token source trait and the `&str` lexer.

mod graphql_token_source;
mod str_graphql_token_source;
mod string_literal;

pub use graphql_token_source::GraphQLTokenSource;
pub use str_graphql_token_source::StrGraphQLTokenSource;
pub use str_graphql_token_source::tokenize;

#[cfg(test)]
mod tests;
