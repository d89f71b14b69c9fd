/// Categorizes syntax errors for programmatic handling.
///
/// The human-readable message lives on
/// [`GraphQLSyntaxError`](crate::GraphQLSyntaxError); variants carry only the
/// data a tool would match on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLSyntaxErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// ```text
    /// { hero(episode EMPIRE) { name } }
    ///                ^^^^^^ expected `:`, found `EMPIRE`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// A `{`, `(` or `[` was never closed.
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A construct that must be non-empty was empty, e.g. `{ }` or `()`.
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// A name was used where it is reserved, e.g. `fragment on on User`.
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// A type system definition (`type`, `schema`, `directive`, ...) appeared
    /// in a query document.
    #[error("unsupported definition: `{keyword}`")]
    UnsupportedDefinition {
        keyword: String,
    },

    /// Selection sets, values or type annotations nested too deeply.
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,
}
