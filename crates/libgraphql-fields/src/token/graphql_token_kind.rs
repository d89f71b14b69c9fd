use crate::GraphQLErrorNotes;
use std::borrow::Cow;
use std::fmt;

/// The kind of a GraphQL token.
///
/// Payload-carrying variants borrow from the source text through
/// `Cow<'src, str>` and only own their text when the lexer had to rewrite it
/// (string escapes, block string dedenting).
///
/// Negative numbers like `-123` are lexed as a single `IntValue("-123")`, not
/// as a minus followed by a number.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@`
    At,
    /// `!`
    Bang,
    /// `:`
    Colon,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `$`
    Dollar,
    /// `...`
    Ellipsis,
    /// `=`
    Equals,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,
    /// `|`
    Pipe,
    /// `]`
    SquareBracketClose,
    /// `[`
    SquareBracketOpen,

    // =========================================================================
    // Literals
    // =========================================================================
    /// A name: `/[_A-Za-z][_0-9A-Za-z]*/`, excluding `true`, `false` and
    /// `null`.
    Name(Cow<'src, str>),

    /// Raw source text of an integer literal, sign included (e.g. `"-123"`).
    IntValue(Cow<'src, str>),

    /// Raw source text of a float literal, sign included (e.g. `"1.5e-3"`).
    FloatValue(Cow<'src, str>),

    /// The unescaped content of a string or block string literal, without
    /// its quotes.
    StringValue {
        value: Cow<'src, str>,
        is_block: bool,
    },

    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    /// End of input. Always the last token a lexer produces.
    Eof,

    /// Something the lexer could not tokenize. The parser turns this into a
    /// [`GraphQLLexError`](crate::GraphQLLexError).
    Error {
        message: String,
        error_notes: GraphQLErrorNotes,
    },
}

impl<'src> GraphQLTokenKind<'src> {
    #[inline]
    pub fn name_borrowed(s: &'src str) -> Self {
        GraphQLTokenKind::Name(Cow::Borrowed(s))
    }

    #[inline]
    pub fn name_owned(s: String) -> Self {
        GraphQLTokenKind::Name(Cow::Owned(s))
    }

    #[inline]
    pub fn error(message: impl Into<String>, error_notes: GraphQLErrorNotes) -> Self {
        GraphQLTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the text of this token if it is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            GraphQLTokenKind::At => Some("@"),
            GraphQLTokenKind::Bang => Some("!"),
            GraphQLTokenKind::Colon => Some(":"),
            GraphQLTokenKind::CurlyBraceClose => Some("}"),
            GraphQLTokenKind::CurlyBraceOpen => Some("{"),
            GraphQLTokenKind::Dollar => Some("$"),
            GraphQLTokenKind::Ellipsis => Some("..."),
            GraphQLTokenKind::Equals => Some("="),
            GraphQLTokenKind::ParenClose => Some(")"),
            GraphQLTokenKind::ParenOpen => Some("("),
            GraphQLTokenKind::Pipe => Some("|"),
            GraphQLTokenKind::SquareBracketClose => Some("]"),
            GraphQLTokenKind::SquareBracketOpen => Some("["),

            GraphQLTokenKind::Name(_)
            | GraphQLTokenKind::IntValue(_)
            | GraphQLTokenKind::FloatValue(_)
            | GraphQLTokenKind::StringValue { .. }
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof
            | GraphQLTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` for tokens that can start a value literal (excluding
    /// `$variable`, `[` and `{`).
    pub fn is_scalar_literal(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::IntValue(_)
                | GraphQLTokenKind::FloatValue(_)
                | GraphQLTokenKind::StringValue { .. }
                | GraphQLTokenKind::True
                | GraphQLTokenKind::False
                | GraphQLTokenKind::Null
        )
    }

    pub fn is_error(&self) -> bool {
        matches!(self, GraphQLTokenKind::Error { .. })
    }

    /// If this token can be used as a name, returns the name.
    ///
    /// `true`, `false` and `null` match the Name grammar, so they are valid
    /// field, argument and alias names even though the lexer gives them
    /// their own kinds for use in value position.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            GraphQLTokenKind::Name(name) => Some(name.as_ref()),
            GraphQLTokenKind::True => Some("true"),
            GraphQLTokenKind::False => Some("false"),
            GraphQLTokenKind::Null => Some("null"),
            _ => None,
        }
    }

    /// Whether `self` and `other` are the same variant, ignoring payloads.
    ///
    /// Matches exhaustively on `self` so that adding a variant forces this to
    /// be revisited.
    pub fn same_kind_as(&self, other: &GraphQLTokenKind) -> bool {
        match self {
            GraphQLTokenKind::Name(_) => matches!(other, GraphQLTokenKind::Name(_)),
            GraphQLTokenKind::IntValue(_) => matches!(other, GraphQLTokenKind::IntValue(_)),
            GraphQLTokenKind::FloatValue(_) => {
                matches!(other, GraphQLTokenKind::FloatValue(_))
            },
            GraphQLTokenKind::StringValue { .. } => {
                matches!(other, GraphQLTokenKind::StringValue { .. })
            },
            GraphQLTokenKind::Error { .. } => matches!(other, GraphQLTokenKind::Error { .. }),
            GraphQLTokenKind::At
            | GraphQLTokenKind::Bang
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::CurlyBraceClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::True
            | GraphQLTokenKind::False
            | GraphQLTokenKind::Null
            | GraphQLTokenKind::Eof => self == other,
        }
    }
}

/// Renders the token the way error messages quote it: punctuators and names
/// verbatim, strings as `string`, end of input as `end of input`.
impl fmt::Display for GraphQLTokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(punct) = self.as_punctuator_str() {
            return f.write_str(punct);
        }
        match self {
            GraphQLTokenKind::Name(s)
            | GraphQLTokenKind::IntValue(s)
            | GraphQLTokenKind::FloatValue(s) => f.write_str(s),
            GraphQLTokenKind::StringValue { is_block: false, .. } => f.write_str("string"),
            GraphQLTokenKind::StringValue { is_block: true, .. } => f.write_str("block string"),
            GraphQLTokenKind::True => f.write_str("true"),
            GraphQLTokenKind::False => f.write_str("false"),
            GraphQLTokenKind::Null => f.write_str("null"),
            GraphQLTokenKind::Eof => f.write_str("end of input"),
            GraphQLTokenKind::Error { message, .. } => {
                write!(f, "tokenization error: {message}")
            },
            _ => unreachable!("punctuators are handled above"),
        }
    }
}
