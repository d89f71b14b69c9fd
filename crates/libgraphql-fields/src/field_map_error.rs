use crate::diagnostic;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLLexError;
use crate::GraphQLParseError;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxError;
use crate::smallvec;

/// Everything that can make [`query_to_field_map`](crate::query_to_field_map)
/// fail. Every variant aborts the whole call; there are no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldMapError {
    /// Invalid character, unterminated string, bad escape or malformed number.
    #[error(transparent)]
    Lex(#[from] GraphQLLexError),

    /// The token stream does not match the supported grammar.
    #[error(transparent)]
    Syntax(#[from] GraphQLSyntaxError),

    /// The document parsed, but contains only fragment definitions.
    #[error("document contains no operation definition")]
    NoOperation,

    /// A fragment spread (`...Name`) was reached while reducing the selected
    /// operation. Named fragments are never resolved, even when defined in
    /// the same document.
    #[error(
        "<input>:{}:{}: error: cannot resolve fragment spread `...{name}`",
        span.start_inclusive.line() + 1,
        span.start_inclusive.col_utf8() + 1,
    )]
    UnresolvedFragmentReference {
        name: String,
        span: GraphQLSourceSpan,
    },
}

impl FieldMapError {
    /// The source location the error points at, if it has one.
    pub fn span(&self) -> Option<&GraphQLSourceSpan> {
        match self {
            FieldMapError::Lex(e) => Some(e.span()),
            FieldMapError::Syntax(e) => Some(e.span()),
            FieldMapError::NoOperation => None,
            FieldMapError::UnresolvedFragmentReference { span, .. } => Some(span),
        }
    }

    /// Formats a multi-line diagnostic suitable for CLI output.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        match self {
            FieldMapError::Lex(e) => e.format_detailed(source),
            FieldMapError::Syntax(e) => e.format_detailed(source),
            FieldMapError::NoOperation => format!(
                "error: {self}\n   = help: add a `query`, `mutation` or \
                 `subscription` operation, or a `{{ ... }}` shorthand query\n",
            ),
            FieldMapError::UnresolvedFragmentReference { name, span } => {
                let notes: GraphQLErrorNotes = smallvec![GraphQLErrorNote::help(
                    "named fragments are not supported; inline the fragment's \
                     fields or use an inline fragment (`... on Type { ... }`)",
                )];
                diagnostic::format_detailed(
                    &format!("cannot resolve fragment spread `...{name}`"),
                    span,
                    &notes,
                    source,
                )
            },
        }
    }
}

impl From<GraphQLParseError> for FieldMapError {
    fn from(err: GraphQLParseError) -> Self {
        match err {
            GraphQLParseError::Lex(e) => FieldMapError::Lex(e),
            GraphQLParseError::Syntax(e) => FieldMapError::Syntax(e),
        }
    }
}
