/// The kind of an error note (determines how the note is rendered).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// Context or explanation. Rendered as `= note: ...`.
    General,

    /// Actionable suggestion. Rendered as `= help: ...`.
    Help,

    /// Link to the relevant section of the GraphQL specification. Rendered as
    /// `= spec: ...`.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            GraphQLErrorNoteKind::General => "note",
            GraphQLErrorNoteKind::Help => "help",
            GraphQLErrorNoteKind::Spec => "spec",
        }
    }
}
