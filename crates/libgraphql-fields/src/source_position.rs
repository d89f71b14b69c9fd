/// A location within GraphQL source text.
///
/// All values are 0-based. Two column representations are tracked:
///
/// - **`col_utf8`**: number of characters from the start of the line. This is
///   what most editors display as "column" and what diagnostics print.
/// - **`col_utf16`**: UTF-16 code units from the start of the line, which is
///   what LSP-speaking tools expect. Characters outside the Basic
///   Multilingual Plane (e.g. most emoji) advance this by 2.
///
/// For ASCII text both columns are equal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Position of the first byte of a document.
    pub const START: SourcePosition = SourcePosition {
        line: 0,
        col_utf8: 0,
        col_utf16: 0,
        byte_offset: 0,
    };

    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
