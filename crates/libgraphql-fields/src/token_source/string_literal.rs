//! Cooking of string literal contents: escape processing for `"..."` strings
//! and indentation removal for `"""..."""` block strings.
//!
//! See <https://spec.graphql.org/September2025/#sec-String-Value>.

use std::borrow::Cow;

/// Processes escape sequences in the content of a single-line string (the
/// text between the quotes).
///
/// Borrows `content` unchanged when it contains no escapes. On failure,
/// returns a message describing the offending escape.
pub(crate) fn cook_string(content: &str) -> Result<Cow<'_, str>, String> {
    if !content.contains('\\') {
        return Ok(Cow::Borrowed(content));
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') => {
                let code_point = if chars.peek() == Some(&'{') {
                    chars.next();
                    read_braced_unicode_escape(&mut chars)?
                } else {
                    read_fixed_unicode_escape(&mut chars)?
                };
                result.push(code_point);
            },
            Some(other) => {
                return Err(format!("Invalid escape sequence `\\{other}`"));
            },
            None => return Err("Invalid escape sequence `\\`".to_string()),
        }
    }
    Ok(Cow::Owned(result))
}

/// Reads `X...}` after `\u{`.
fn read_braced_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<char, String> {
    let mut hex = String::new();
    loop {
        match chars.next() {
            Some('}') => break,
            Some(c) if c.is_ascii_hexdigit() && hex.len() < 8 => hex.push(c),
            Some(c) => {
                return Err(format!("Invalid unicode escape `\\u{{{hex}{c}`"));
            },
            None => return Err(format!("Invalid unicode escape `\\u{{{hex}`")),
        }
    }
    if hex.is_empty() {
        return Err("Invalid unicode escape `\\u{}`".to_string());
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("Invalid unicode escape `\\u{{{hex}}}`"))
}

/// Reads `XXXX` after `\u`, combining a following `\uXXXX` low surrogate
/// when the first escape is a high surrogate.
fn read_fixed_unicode_escape(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<char, String> {
    let high = read_four_hex_digits(chars)?;
    if let Some(c) = char::from_u32(high) {
        return Ok(c);
    }
    if !(0xD800..=0xDBFF).contains(&high) {
        return Err(format!("Invalid unicode escape `\\u{high:04X}` (lone surrogate)"));
    }

    let mut lookahead = chars.clone();
    if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
        let low = read_four_hex_digits(&mut lookahead)?;
        if (0xDC00..=0xDFFF).contains(&low) {
            *chars = lookahead;
            let combined = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            if let Some(c) = char::from_u32(combined) {
                return Ok(c);
            }
        }
    }
    Err(format!("Invalid unicode escape `\\u{high:04X}` (lone surrogate)"))
}

fn read_four_hex_digits(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> Result<u32, String> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(c) if c.is_ascii_hexdigit() => hex.push(c),
            Some(c) => return Err(format!("Invalid unicode escape `\\u{hex}{c}`")),
            None => return Err(format!("Invalid unicode escape `\\u{hex}`")),
        }
    }
    u32::from_str_radix(&hex, 16).map_err(|_| format!("Invalid unicode escape `\\u{hex}`"))
}

/// Computes the value of a block string from its raw content (the text
/// between the triple quotes).
///
/// Replaces `\"""` with `"""`, removes the common indentation of every line
/// but the first, and drops leading and trailing blank lines.
pub(crate) fn cook_block_string(content: &str) -> Cow<'_, str> {
    let has_line_terminator = content.contains(['\n', '\r']);
    if !has_line_terminator
        && !content.contains("\\\"\"\"")
        && !content.trim_matches([' ', '\t']).is_empty()
    {
        return Cow::Borrowed(content);
    }

    let unescaped = content.replace("\\\"\"\"", "\"\"\"");
    let lines = split_lines(&unescaped);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace_len(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| match common_indent {
            Some(indent) if idx > 0 => line.get(indent..).unwrap_or(""),
            _ => line,
        })
        .collect();

    while dedented.first().is_some_and(|line| is_blank(line)) {
        dedented.remove(0);
    }
    while dedented.last().is_some_and(|line| is_blank(line)) {
        dedented.pop();
    }

    Cow::Owned(dedented.join("\n"))
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            },
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            },
            _ => {},
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}
