use crate::diagnostic;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;

/// The lexer could not turn some part of the source into a token.
///
/// Produced for invalid characters, unterminated strings, bad escape
/// sequences, malformed numbers and stray dots.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLLexError {
    message: String,
    span: GraphQLSourceSpan,
    notes: GraphQLErrorNotes,
}

impl GraphQLLexError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        notes: GraphQLErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            notes,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The span of the offending source text.
    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn format_oneline(&self) -> String {
        diagnostic::format_oneline(&self.message, &self.span)
    }

    /// Formats a multi-line diagnostic. Pass the original source text to
    /// include a snippet with the offending text underlined.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        diagnostic::format_detailed(&self.message, &self.span, &self.notes, source)
    }
}
