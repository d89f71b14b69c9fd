//! Shared rendering for lex and syntax error diagnostics.

use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;
use std::fmt::Write;

/// Formats a single-line summary:
///
/// ```text
/// <input>:5:12: error: expected `:`, found `String`
/// ```
pub(crate) fn format_oneline(message: &str, span: &GraphQLSourceSpan) -> String {
    let line = span.start_inclusive.line() + 1;
    let column = span.start_inclusive.col_utf8() + 1;
    format!("<input>:{line}:{column}: error: {message}")
}

/// Formats a multi-line diagnostic:
///
/// ```text
/// error: unclosed `{`
///   --> <input>:3:1
///    |
///  3 | }
///    | ^
///    = note: opening `{` in selection set here
///      1 | { hero {
///        |        -
/// ```
///
/// Snippets are omitted when `source` is `None`.
pub(crate) fn format_detailed(
    message: &str,
    span: &GraphQLSourceSpan,
    notes: &GraphQLErrorNotes,
    source: Option<&str>,
) -> String {
    let mut output = String::new();
    let line = span.start_inclusive.line() + 1;
    let column = span.start_inclusive.col_utf8() + 1;
    let _ = writeln!(output, "error: {message}");
    let _ = writeln!(output, "  --> <input>:{line}:{column}");

    if let Some(src) = source
        && let Some(snippet) = primary_snippet(src, span)
    {
        output.push_str(&snippet);
    }

    for note in notes {
        let _ = writeln!(output, "   = {}: {}", note.kind.label(), note.message);
        if let (Some(note_span), Some(src)) = (&note.span, source)
            && let Some(snippet) = note_snippet(src, note_span)
        {
            output.push_str(&snippet);
        }
    }

    output
}

fn primary_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line_idx = span.start_inclusive.line();
    let line_content = source.lines().nth(line_idx)?;
    let display_line = line_idx + 1;
    let width = display_line.to_string().len().max(2);

    let col_start = span.start_inclusive.col_utf8();
    let underline_len = if span.end_exclusive.line() == line_idx
        && span.end_exclusive.col_utf8() > col_start
    {
        span.end_exclusive.col_utf8() - col_start
    } else {
        1
    };

    let mut output = String::new();
    let _ = writeln!(output, "{:>width$} |", "");
    let _ = writeln!(output, "{display_line:>width$} | {line_content}");
    let _ = writeln!(
        output,
        "{:>width$} | {:>col_start$}{}",
        "",
        "",
        "^".repeat(underline_len),
    );
    Some(output)
}

fn note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line_idx = span.start_inclusive.line();
    let line_content = source.lines().nth(line_idx)?;
    let display_line = line_idx + 1;
    let width = display_line.to_string().len().max(2);
    let col_start = span.start_inclusive.col_utf8();

    let mut output = String::new();
    let _ = writeln!(output, "     {display_line:>width$} | {line_content}");
    let _ = writeln!(output, "     {:>width$} | {:>col_start$}-", "", "");
    Some(output)
}
