use crate::GraphQLLexError;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;

/// The first error [`GraphQLParser`](crate::GraphQLParser) ran into.
///
/// Lexer failures reach the parser as `Error` tokens and are surfaced here
/// unchanged as [`GraphQLParseError::Lex`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseError {
    #[error(transparent)]
    Lex(#[from] GraphQLLexError),

    #[error(transparent)]
    Syntax(#[from] GraphQLSyntaxError),
}

impl GraphQLParseError {
    pub fn message(&self) -> &str {
        match self {
            GraphQLParseError::Lex(e) => e.message(),
            GraphQLParseError::Syntax(e) => e.message(),
        }
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        match self {
            GraphQLParseError::Lex(e) => e.span(),
            GraphQLParseError::Syntax(e) => e.span(),
        }
    }

    pub fn format_detailed(&self, source: Option<&str>) -> String {
        match self {
            GraphQLParseError::Lex(e) => e.format_detailed(source),
            GraphQLParseError::Syntax(e) => e.format_detailed(source),
        }
    }
}
