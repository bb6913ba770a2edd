//! Lexical extraction of file headers and comments.
//!
//! Comments never reach the AST, so this pass works directly on source lines
//! with a small string-tracking scanner: a `#` inside a string literal is not
//! a comment, and the lines of a triple-quoted string are not comment chunk
//! boundaries in the way code lines are.

use crate::config::ExtractorConfig;
use crate::filter::{ignorable_comment, strip_comment_char};

/// Prose extracted without parsing: the file header and body comments.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LexicalElements {
    /// Leading comment block plus the module docstring, joined by newlines.
    pub header: Option<String>,
    /// Contiguous comment runs from the file body, one string per run.
    pub comments: Vec<String>,
}

/// Extracts the header and comment chunks from `source`.
///
/// The header is everything before the first code statement: blank lines are
/// skipped, comment lines addressed to humans are kept, and a module
/// docstring is folded in. The remainder of the file is scanned for comment
/// runs; a run is closed by a code line, not by a blank line, so a spaced-out
/// explanation stays one chunk.
#[must_use]
pub fn scan_source(source: &str, config: &ExtractorConfig) -> LexicalElements {
    let lines: Vec<&str> = source.lines().collect();
    let mut header_parts: Vec<String> = Vec::new();

    let mut idx = 0;
    while idx < lines.len() {
        let trimmed = lines[idx].trim();
        if trimmed.is_empty() {
            idx += 1;
        } else if trimmed.starts_with('#') {
            if !ignorable_comment(trimmed, config) {
                let text = strip_comment_char(trimmed);
                if !text.is_empty() {
                    header_parts.push(text.to_owned());
                }
            }
            idx += 1;
        } else {
            break;
        }
    }

    if idx < lines.len() {
        if let Some((docstring, next)) = read_docstring(&lines, idx) {
            let text = docstring.trim();
            if !text.is_empty() {
                header_parts.push(text.to_owned());
            }
            idx = next;
        }
    }

    let header = if header_parts.is_empty() {
        None
    } else {
        Some(header_parts.join("\n"))
    };

    let mut comments = Vec::new();
    let mut chunk: Vec<&str> = Vec::new();
    let mut state = StringState::default();
    for line in &lines[idx..] {
        let scan = scan_line(line, &mut state);
        if scan.has_code {
            flush_chunk(&mut chunk, &mut comments);
        }
        if let Some(start) = scan.comment_start {
            let comment = line[start..].trim();
            // Noise rejection happens per line, so a separator rule in the
            // middle of an explanation does not poison the whole chunk.
            if ignorable_comment(comment, config) {
                continue;
            }
            let text = strip_comment_char(comment);
            if scan.has_code {
                // Inline comment: its own single-line chunk.
                comments.push(text.to_owned());
            } else {
                chunk.push(text);
            }
        }
    }
    flush_chunk(&mut chunk, &mut comments);

    LexicalElements { header, comments }
}

fn flush_chunk(chunk: &mut Vec<&str>, comments: &mut Vec<String>) {
    if !chunk.is_empty() {
        comments.push(chunk.join("\n"));
        chunk.clear();
    }
}

/// Reads a module docstring starting at line `idx`.
///
/// Returns the docstring text and the index of the first line after it, or
/// `None` when the line does not open a string literal.
fn read_docstring(lines: &[&str], idx: usize) -> Option<(String, usize)> {
    let line = lines[idx].trim_start();
    let (quote, triple, content_start) = string_open(line)?;
    let rest = &line[content_start..];

    if triple {
        let delim = quote.to_string().repeat(3);
        if let Some(end) = rest.find(&delim) {
            return Some((rest[..end].to_owned(), idx + 1));
        }
        let mut parts = vec![rest.to_owned()];
        for (offset, line) in lines[idx + 1..].iter().enumerate() {
            if let Some(end) = line.find(&delim) {
                parts.push(line[..end].to_owned());
                return Some((parts.join("\n"), idx + offset + 2));
            }
            parts.push((*line).to_owned());
        }
        // Unterminated docstring swallows the rest of the file.
        Some((parts.join("\n"), lines.len()))
    } else {
        let end = rest.find(quote)?;
        Some((rest[..end].to_owned(), idx + 1))
    }
}

/// Checks whether `line` begins a string literal, skipping r/b/u/f prefixes.
/// Returns the quote character, whether it is triple-quoted, and the byte
/// offset of the string content.
fn string_open(line: &str) -> Option<(char, bool, usize)> {
    let mut chars = line.char_indices().peekable();
    let mut prefix_len = 0;
    while let Some((_, c)) = chars.peek().copied() {
        if prefix_len < 2 && matches!(c, 'r' | 'R' | 'b' | 'B' | 'u' | 'U' | 'f' | 'F') {
            chars.next();
            prefix_len += 1;
        } else {
            break;
        }
    }
    let (i, quote) = chars.next()?;
    if quote != '\'' && quote != '"' {
        return None;
    }
    let mut offset = i + 1;
    let bytes = line.as_bytes();
    let triple =
        bytes.get(offset) == Some(&(quote as u8)) && bytes.get(offset + 1) == Some(&(quote as u8));
    if triple {
        offset += 2;
    }
    Some((quote, triple, offset))
}

#[derive(Debug, Default)]
struct StringState {
    /// Quote character of an open triple-quoted string, if any.
    open_delimiter: Option<char>,
}

#[derive(Debug)]
struct LineScan {
    /// Byte offset where a `#` comment starts, if the line has one.
    comment_start: Option<usize>,
    /// Whether the line contains code (string continuations count as code).
    has_code: bool,
}

/// Scans one line, tracking triple-quoted strings across lines, and reports
/// where a real comment starts and whether the line holds any code.
fn scan_line(line: &str, state: &mut StringState) -> LineScan {
    let bytes = line.as_bytes();
    let mut has_code = false;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(quote) = state.open_delimiter {
            // Inside a triple-quoted string: look for the closing delimiter.
            has_code = true;
            let delim = [quote as u8; 3];
            match find_subslice(&bytes[i..], &delim) {
                Some(pos) => {
                    state.open_delimiter = None;
                    i += pos + 3;
                }
                None => return LineScan { comment_start: None, has_code },
            }
            continue;
        }

        let b = bytes[i];
        match b {
            b'#' => {
                return LineScan {
                    comment_start: Some(i),
                    has_code,
                };
            }
            b'\'' | b'"' => {
                has_code = true;
                if bytes.get(i + 1) == Some(&b) && bytes.get(i + 2) == Some(&b) {
                    state.open_delimiter = Some(b as char);
                    i += 3;
                } else {
                    // Single-quoted string: skip to the closing quote,
                    // honoring backslash escapes.
                    i += 1;
                    while i < bytes.len() {
                        if bytes[i] == b'\\' {
                            i += 2;
                        } else if bytes[i] == b {
                            i += 1;
                            break;
                        } else {
                            i += 1;
                        }
                    }
                }
            }
            b' ' | b'\t' | b'\x0c' => i += 1,
            _ => {
                has_code = true;
                i += 1;
            }
        }
    }

    LineScan {
        comment_start: None,
        has_code,
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
