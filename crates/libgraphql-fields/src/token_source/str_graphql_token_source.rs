//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str`.
//!
//! Names and numbers borrow from the source. String literals borrow too
//! unless escape processing or block-string dedenting had to rewrite them.
//!
//! Whitespace, commas and `#` comments are skipped and never become tokens.
//! Input that cannot be tokenized produces a
//! [`GraphQLTokenKind::Error`] token and lexing continues after it, so a
//! caller that wants every problem can keep pulling tokens.
//!
//! ```rust
//! use libgraphql_fields::token::GraphQLTokenKind;
//! use libgraphql_fields::token_source::StrGraphQLTokenSource;
//!
//! let kinds: Vec<_> = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.kind)
//!     .collect();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::name_borrowed("name"),
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLLexError;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::string_literal;
use std::borrow::Cow;

const SPREAD_HELP: &str =
    "These dots may have been intended to form a `...` spread operator. Try \
     removing the extra spacing between the dots.";

/// Lexes GraphQL tokens out of a string slice.
pub struct StrGraphQLTokenSource<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    curr_line: usize,

    /// Counts characters, not bytes.
    curr_col_utf8: usize,

    /// Characters outside the BMP advance this by 2.
    curr_col_utf16: usize,

    /// Set after a `\r` so that the `\n` of a `\r\n` pair does not start a
    /// second line.
    last_char_was_cr: bool,

    /// Whether `Eof` has been emitted.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            curr_col_utf16: 0,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_col_utf8,
            self.curr_col_utf16,
            self.curr_byte_offset,
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one character, keeping line and column counters current.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.start_new_line();
            },
            '\r' => {
                self.start_new_line();
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_col_utf8 += 1;
                self.curr_col_utf16 += ch.len_utf16();
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_n(&mut self, n: usize) {
        for _ in 0..n {
            self.consume();
        }
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if !pred(ch) {
                break;
            }
            self.consume();
        }
    }

    fn start_new_line(&mut self) {
        self.curr_line += 1;
        self.curr_col_utf8 = 0;
        self.curr_col_utf16 = 0;
    }

    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    fn token_from(
        &self,
        start: SourcePosition,
        kind: GraphQLTokenKind<'src>,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, self.make_span(start))
    }

    fn error_from(
        &self,
        start: SourcePosition,
        message: impl Into<String>,
        error_notes: GraphQLErrorNotes,
    ) -> GraphQLToken<'src> {
        self.token_from(start, GraphQLTokenKind::error(message, error_notes))
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> GraphQLToken<'src> {
        loop {
            self.skip_whitespace();
            let start = self.curr_position();

            let punctuator = match self.peek_char() {
                None => return self.token_from(start, GraphQLTokenKind::Eof),
                Some('#') => {
                    self.skip_comment();
                    continue;
                },
                Some(',') => {
                    self.consume();
                    continue;
                },
                Some('!') => GraphQLTokenKind::Bang,
                Some('$') => GraphQLTokenKind::Dollar,
                Some('(') => GraphQLTokenKind::ParenOpen,
                Some(')') => GraphQLTokenKind::ParenClose,
                Some(':') => GraphQLTokenKind::Colon,
                Some('=') => GraphQLTokenKind::Equals,
                Some('@') => GraphQLTokenKind::At,
                Some('[') => GraphQLTokenKind::SquareBracketOpen,
                Some(']') => GraphQLTokenKind::SquareBracketClose,
                Some('{') => GraphQLTokenKind::CurlyBraceOpen,
                Some('}') => GraphQLTokenKind::CurlyBraceClose,
                Some('|') => GraphQLTokenKind::Pipe,
                Some('.') => return self.lex_dot_or_ellipsis(start),
                Some('"') => return self.lex_string(start),
                Some(c) if is_name_start(c) => return self.lex_name(start),
                Some(c) if c == '-' || c.is_ascii_digit() => {
                    return self.lex_number(start);
                },
                Some(_) => return self.lex_invalid_character(start),
            };

            self.consume();
            return self.token_from(start, punctuator);
        }
    }

    /// Skips space, tab, line terminators and the BOM.
    ///
    /// Commas are insignificant too but are handled in
    /// [`Self::next_token`].
    fn skip_whitespace(&mut self) {
        self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\u{FEFF}'));
    }

    /// Skips a `#` comment up to (not including) the line terminator.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let comment_len =
            memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        let comment = &rest[..comment_len];

        // A comment never contains a line terminator, so only the columns
        // move.
        self.curr_col_utf8 += comment.chars().count();
        self.curr_col_utf16 += comment.encode_utf16().count();
        self.curr_byte_offset += comment_len;
        self.last_char_was_cr = false;
    }

    // =========================================================================
    // Dots
    // =========================================================================

    /// `...` becomes an `Ellipsis`. Anything else made of dots on one line
    /// (`.`, `..`, `. .`, `.. .`, `. ..`, `. . .`) is an error; the
    /// two-or-more dot cases get a help note pointing at `...`.
    fn lex_dot_or_ellipsis(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("...") {
            self.consume_n(3);
            return self.token_from(start, GraphQLTokenKind::Ellipsis);
        }

        let line = self.curr_line;
        let mut text = String::from(".");
        self.consume();
        let mut last_dot_end = self.curr_position();
        while text.matches('.').count() < 3 {
            self.skip_whitespace_same_line();
            if self.peek_char() != Some('.') || self.curr_line != line {
                break;
            }
            if self.curr_byte_offset != last_dot_end.byte_offset() {
                text.push(' ');
            }
            text.push('.');
            self.consume();
            last_dot_end = self.curr_position();
        }

        let (message, error_notes): (String, GraphQLErrorNotes) = match text.as_str() {
            "." => ("Unexpected `.`".to_string(), smallvec![]),
            ".." => (
                "Unexpected `..` (use `...` for spread operator)".to_string(),
                smallvec![GraphQLErrorNote::help(
                    "Add one more `.` to form the spread operator `...`",
                )],
            ),
            _ => (
                format!("Unexpected `{text}`"),
                smallvec![GraphQLErrorNote::help(SPREAD_HELP)],
            ),
        };
        // The span stops at the last dot, not at the whitespace after it.
        GraphQLToken::new(
            GraphQLTokenKind::error(message, error_notes),
            GraphQLSourceSpan::new(start, last_dot_end),
        )
    }

    fn skip_whitespace_same_line(&mut self) {
        self.consume_while(|ch| matches!(ch, ' ' | '\t' | '\u{FEFF}'));
    }

    // =========================================================================
    // Names
    // =========================================================================

    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let name_start = self.curr_byte_offset;
        self.consume();
        self.consume_while(is_name_continue);

        let name = &self.source[name_start..self.curr_byte_offset];
        let kind = match name {
            "true" => GraphQLTokenKind::True,
            "false" => GraphQLTokenKind::False,
            "null" => GraphQLTokenKind::Null,
            _ => GraphQLTokenKind::name_borrowed(name),
        };
        self.token_from(start, kind)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
    fn lex_number(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    return self.lex_number_error(
                        start,
                        num_start,
                        "Invalid number: leading zeros are not allowed",
                        Some("https://spec.graphql.org/September2025/#sec-Int-Value"),
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => {
                self.consume_while(|ch| ch.is_ascii_digit());
            },
            _ => return self.error_from(start, "Unexpected `-`", smallvec![]),
        }

        if self.peek_char() == Some('.') {
            if !self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: expected a digit after `.`",
                    Some("https://spec.graphql.org/September2025/#sec-Float-Value"),
                );
            }
            is_float = true;
            self.consume();
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.lex_number_error(
                    start,
                    num_start,
                    "Invalid number: exponent must have at least one digit",
                    Some("https://spec.graphql.org/September2025/#sec-Float-Value"),
                );
            }
            self.consume_while(|ch| ch.is_ascii_digit());
        }

        // `123abc` and `1.5.` are not two tokens.
        if let Some(ch) = self.peek_char()
            && (is_name_start(ch) || ch == '.')
        {
            return self.lex_number_error(
                start,
                num_start,
                &format!("Invalid number: unexpected `{ch}` after a number"),
                None,
            );
        }

        let text = Cow::Borrowed(&self.source[num_start..self.curr_byte_offset]);
        let kind = if is_float {
            GraphQLTokenKind::FloatValue(text)
        } else {
            GraphQLTokenKind::IntValue(text)
        };
        self.token_from(start, kind)
    }

    /// Consumes the rest of a malformed number so lexing resumes after it.
    fn lex_number_error(
        &mut self,
        start: SourcePosition,
        num_start: usize,
        message: &str,
        spec_url: Option<&str>,
    ) -> GraphQLToken<'src> {
        self.consume_while(|ch| {
            is_name_continue(ch) || matches!(ch, '.' | '+' | '-')
        });

        let invalid_text = &self.source[num_start..self.curr_byte_offset];
        let mut error_notes = GraphQLErrorNotes::new();
        if let Some(url) = spec_url {
            error_notes.push(GraphQLErrorNote::spec(url));
        }
        self.error_from(start, format!("{message}: `{invalid_text}`"), error_notes)
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        self.consume();
        let content_start = self.curr_byte_offset;
        loop {
            match self.peek_char() {
                None => {
                    return self.error_from(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                GraphQLSourceSpan::empty_at(start),
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    );
                },
                Some('\n' | '\r') => {
                    return self.error_from(
                        start,
                        "Unterminated string literal",
                        smallvec![
                            GraphQLErrorNote::general(
                                "Single-line strings cannot contain unescaped newlines",
                            ),
                            GraphQLErrorNote::help(
                                "Use a block string (triple quotes) for multi-line \
                                 strings, or escape the newline with `\\n`",
                            ),
                        ],
                    );
                },
                Some('"') => break,
                Some('\\') => {
                    self.consume();
                    if self.peek_char().is_some_and(|ch| ch != '\n' && ch != '\r') {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }

        let content = &self.source[content_start..self.curr_byte_offset];
        self.consume();

        match string_literal::cook_string(content) {
            Ok(value) => self.token_from(
                start,
                GraphQLTokenKind::StringValue {
                    value,
                    is_block: false,
                },
            ),
            Err(message) => self.error_from(
                start,
                message,
                smallvec![GraphQLErrorNote::spec(
                    "https://spec.graphql.org/September2025/#EscapedCharacter",
                )],
            ),
        }
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        self.consume_n(3);
        let content_start = self.curr_byte_offset;
        loop {
            let rest = self.remaining();
            if rest.is_empty() {
                return self.error_from(
                    start,
                    "Unterminated block string",
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "Block string started here",
                            GraphQLSourceSpan::empty_at(start),
                        ),
                        GraphQLErrorNote::help("Add closing `\"\"\"`"),
                    ],
                );
            }
            if rest.starts_with("\\\"\"\"") {
                self.consume_n(4);
            } else if rest.starts_with("\"\"\"") {
                break;
            } else {
                self.consume();
            }
        }

        let content = &self.source[content_start..self.curr_byte_offset];
        self.consume_n(3);
        self.token_from(
            start,
            GraphQLTokenKind::StringValue {
                value: string_literal::cook_block_string(content),
                is_block: true,
            },
        )
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    fn lex_invalid_character(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let description = self.consume().map(describe_char).unwrap_or_default();
        self.error_from(start, format!("Unexpected character {description}"), smallvec![])
    }
}

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if matches!(token.kind, GraphQLTokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Lexes all of `source`, stopping at the first lexer error.
///
/// The returned tokens always end with [`GraphQLTokenKind::Eof`].
pub fn tokenize(source: &str) -> Result<Vec<GraphQLToken<'_>>, GraphQLLexError> {
    let mut tokens = Vec::new();
    for token in StrGraphQLTokenSource::new(source) {
        if let GraphQLTokenKind::Error { message, error_notes } = token.kind {
            return Err(GraphQLLexError::new(message, token.span, error_notes));
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// <https://spec.graphql.org/September2025/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// <https://spec.graphql.org/September2025/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Printable characters are quoted as-is; invisible ones also get their
/// code point and, when known, their Unicode name.
fn describe_char(ch: char) -> String {
    let invisible = ch.is_control()
        || (ch.is_whitespace() && ch != ' ')
        || unicode_char_name(ch).is_some();
    if !invisible {
        return format!("`{ch}`");
    }
    match unicode_char_name(ch) {
        Some(name) => format!("`{ch}` (U+{:04X}: {name})", ch as u32),
        None => format!("`{ch}` (U+{:04X})", ch as u32),
    }
}

/// Names of the invisible characters most likely to sneak into a pasted
/// query.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{00AD}' => Some("SOFT HYPHEN"),
        '\u{2002}' => Some("EN SPACE"),
        '\u{2003}' => Some("EM SPACE"),
        '\u{2009}' => Some("THIN SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{200E}' => Some("LEFT-TO-RIGHT MARK"),
        '\u{200F}' => Some("RIGHT-TO-LEFT MARK"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{202F}' => Some("NARROW NO-BREAK SPACE"),
        '\u{2060}' => Some("WORD JOINER"),
        '\u{3000}' => Some("IDEOGRAPHIC SPACE"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
