use crate::diagnostic;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use crate::GraphQLSyntaxErrorKind;

/// The token stream does not match the supported query grammar.
///
/// `span` points at the unexpected token (or at the end of the last consumed
/// token for unexpected end of input).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLSyntaxError {
    message: String,
    span: GraphQLSourceSpan,
    kind: GraphQLSyntaxErrorKind,
    notes: GraphQLErrorNotes,
}

impl GraphQLSyntaxError {
    pub fn new(
        message: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLSyntaxErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn kind(&self) -> &GraphQLSyntaxErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub(crate) fn with_note_at(
        mut self,
        message: impl Into<String>,
        span: GraphQLSourceSpan,
    ) -> Self {
        self.notes.push(GraphQLErrorNote::general_with_span(message, span));
        self
    }

    pub(crate) fn with_help(mut self, message: impl Into<String>) -> Self {
        self.notes.push(GraphQLErrorNote::help(message));
        self
    }

    pub(crate) fn with_spec(mut self, url: impl Into<String>) -> Self {
        self.notes.push(GraphQLErrorNote::spec(url));
        self
    }

    pub fn format_oneline(&self) -> String {
        diagnostic::format_oneline(&self.message, &self.span)
    }

    /// Formats a multi-line diagnostic. Pass the original source text to
    /// include a snippet with the offending token underlined.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        diagnostic::format_detailed(&self.message, &self.span, &self.notes, source)
    }
}
