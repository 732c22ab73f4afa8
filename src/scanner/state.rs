//! Scan modes and their transition functions.
//!
//! `Normal` is handled by [`find_opening`]; each literal mode runs to its close
//! marker (or end of input) in one call to [`Mode::run`].

use std::borrow::Cow;

use crate::language::{LanguageRule, QuoteRule};

use super::SpanKind;

/// What the scanner is currently inside of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'r> {
    Normal,
    InString {
        quote: &'r QuoteRule,
        close: Cow<'r, str>,
        /// A docstring scans like a string but is classified as a comment.
        docstring: bool,
    },
    InLineComment,
    InBlockComment {
        /// The literal open marker when nesting applies.
        nested_open: Option<&'r str>,
        close: Cow<'r, str>,
        anchored: bool,
    },
}

/// Where a literal mode stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closed {
    pub end: usize,
    pub close_len: usize,
    pub unterminated: bool,
}

/// A literal mode starting at `at`, `len` bytes of opening marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening<'r> {
    pub at: usize,
    pub len: usize,
    pub mode: Mode<'r>,
}

impl Mode<'_> {
    #[must_use]
    pub const fn kind(&self) -> SpanKind {
        match self {
            Self::Normal => SpanKind::Code,
            Self::InString {
                docstring: false, ..
            } => SpanKind::String,
            Self::InString { .. } | Self::InLineComment | Self::InBlockComment { .. } => {
                SpanKind::Comment
            }
        }
    }

    /// Run this mode from `from` (just past the opening marker) to its end.
    #[must_use]
    pub fn run(&self, text: &str, from: usize) -> Closed {
        match self {
            Self::Normal => Closed {
                end: text.len(),
                close_len: 0,
                unterminated: false,
            },
            Self::InString { quote, close, .. } => run_string(text, from, quote, close),
            Self::InLineComment => Closed {
                end: line_end(text, from),
                close_len: 0,
                unterminated: false,
            },
            Self::InBlockComment {
                nested_open,
                close,
                anchored,
            } => run_block(text, from, *nested_open, close, *anchored),
        }
    }
}

/// Per-byte lookup tables for one rule.
#[derive(Debug, Clone)]
pub struct StarterTable {
    /// Bytes that can begin some marker.
    first: [bool; 256],
    /// Bytes that begin nothing but a fenced opening made of their own repeats
    /// (Swift `#"…"#`). A failed opening on one of them fails for the whole run.
    pad_run: [bool; 256],
}

impl StarterTable {
    #[must_use]
    pub fn new(rule: &LanguageRule) -> Self {
        let mut first = [false; 256];
        let mut pad_run = [false; 256];
        let mut other = [false; 256];

        // Bounded quotes decide by their close, which varies along a run.
        let delimiters = rule
            .quotes
            .iter()
            .map(|q| (&q.delimiter, q.max_len.is_none()))
            .chain(rule.block_comments.iter().map(|b| (&b.delimiter, true)));
        for (delimiter, unbounded) in delimiters {
            let Some(byte) = delimiter.first_byte() else {
                continue;
            };
            first[usize::from(byte)] = true;
            if unbounded && delimiter.pad_prefixed() {
                pad_run[usize::from(byte)] = true;
            } else {
                other[usize::from(byte)] = true;
            }
        }
        for byte in rule.line_comments.iter().filter_map(|m| m.as_bytes().first()) {
            first[usize::from(*byte)] = true;
            other[usize::from(*byte)] = true;
        }
        for (pad, other) in pad_run.iter_mut().zip(other) {
            *pad &= !other;
        }

        Self { first, pad_run }
    }

    #[must_use]
    pub const fn starts(&self, byte: u8) -> bool {
        self.first[byte as usize]
    }

    #[must_use]
    pub const fn skips_run(&self, byte: u8) -> bool {
        self.pad_run[byte as usize]
    }
}

/// Find the first literal opening at or after `from`.
///
/// Candidates at one position are considered quotes first, then line comments,
/// then block comments. The longest opening wins; ties keep that order.
#[must_use]
pub fn find_opening<'r>(
    text: &str,
    from: usize,
    rule: &'r LanguageRule,
    starters: &StarterTable,
) -> Option<Opening<'r>> {
    let bytes = text.as_bytes();
    let mut at = from;
    while at < bytes.len() {
        let byte = bytes[at];
        if starters.starts(byte) {
            if let Some(opening) = opening_at(text, at, rule) {
                return Some(opening);
            }
            if starters.skips_run(byte) {
                at += bytes[at..].iter().take_while(|&&b| b == byte).count();
                continue;
            }
        }
        at += 1;
    }
    None
}

fn opening_at<'r>(text: &str, at: usize, rule: &'r LanguageRule) -> Option<Opening<'r>> {
    let mut best: Option<Opening<'r>> = None;
    let mut consider = |candidate: Opening<'r>| {
        if best.as_ref().is_none_or(|b| candidate.len > b.len) {
            best = Some(candidate);
        }
    };

    for quote in &rule.quotes {
        if let Some(m) = quote.delimiter.match_open(text, at)
            && quote
                .max_len
                .is_none_or(|max| closes_within(text, at + m.len, &m.close, quote, max))
        {
            consider(Opening {
                at,
                len: m.len,
                mode: Mode::InString {
                    quote,
                    close: m.close,
                    docstring: quote.docstring && opens_line(text, at),
                },
            });
        }
    }

    if !rule.line_comments_at_word_start || at_word_start(text, at) {
        for marker in &rule.line_comments {
            if !marker.is_empty() && text.as_bytes()[at..].starts_with(marker.as_bytes()) {
                consider(Opening {
                    at,
                    len: marker.len(),
                    mode: Mode::InLineComment,
                });
            }
        }
    }

    for block in &rule.block_comments {
        if block.anchored && !at_line_start(text, at) {
            continue;
        }
        if let Some(m) = block.delimiter.match_open(text, at) {
            consider(Opening {
                at,
                len: m.len,
                mode: Mode::InBlockComment {
                    nested_open: rule
                        .nested
                        .then(|| block.delimiter.fixed_open())
                        .flatten(),
                    close: m.close,
                    anchored: block.anchored,
                },
            });
        }
    }

    best
}

/// Bounded lookahead for character literals: the body is one character, or an
/// escape sequence of at most `max` characters, and closes on the same line.
fn closes_within(text: &str, from: usize, close: &str, quote: &QuoteRule, max: usize) -> bool {
    let bytes = text.as_bytes();
    let limit = if escape_len(text, from, quote).is_some() {
        max
    } else {
        1
    };
    let mut i = from;
    let mut chars = 0;
    while i < bytes.len() && chars <= limit {
        if bytes[i..].starts_with(close.as_bytes()) {
            return chars > 0;
        }
        if bytes[i] == b'\n' {
            return false;
        }
        i += escape_len(text, i, quote).unwrap_or_else(|| utf8_width(bytes[i]));
        chars += 1;
    }
    false
}

fn run_string(text: &str, from: usize, quote: &QuoteRule, close: &str) -> Closed {
    let bytes = text.as_bytes();
    let close_bytes = close.as_bytes();
    let mut i = from;

    while i < bytes.len() {
        if let Some(len) = escape_len(text, i, quote) {
            i += len;
            continue;
        }
        if bytes[i..].starts_with(close_bytes) {
            let after = i + close_bytes.len();
            if quote.doubled_close && bytes[after..].starts_with(close_bytes) {
                i = after + close_bytes.len();
                continue;
            }
            return Closed {
                end: after,
                close_len: close_bytes.len(),
                unterminated: false,
            };
        }
        if !quote.multiline && bytes[i] == b'\n' {
            return Closed {
                end: trim_carriage_return(bytes, from, i),
                close_len: 0,
                unterminated: true,
            };
        }
        i += 1;
    }

    Closed {
        end: bytes.len(),
        close_len: 0,
        unterminated: true,
    }
}

fn run_block(
    text: &str,
    from: usize,
    nested_open: Option<&str>,
    close: &str,
    anchored: bool,
) -> Closed {
    let bytes = text.as_bytes();
    let close_bytes = close.as_bytes();
    let mut depth = 0usize;
    let mut i = from;

    while i < bytes.len() {
        if bytes[i..].starts_with(close_bytes) && (!anchored || at_line_start(text, i)) {
            if depth == 0 {
                return Closed {
                    end: i + close_bytes.len(),
                    close_len: close_bytes.len(),
                    unterminated: false,
                };
            }
            depth -= 1;
            i += close_bytes.len();
            continue;
        }
        if let Some(open) = nested_open
            && bytes[i..].starts_with(open.as_bytes())
        {
            depth += 1;
            i += open.len();
            continue;
        }
        i += 1;
    }

    Closed {
        end: bytes.len(),
        close_len: 0,
        unterminated: true,
    }
}

/// Byte length of an escape sequence at `at`: the escape character plus exactly
/// one following character.
fn escape_len(text: &str, at: usize, quote: &QuoteRule) -> Option<usize> {
    let escape = quote.escape?;
    let bytes = text.as_bytes();
    let mut buf = [0u8; 4];
    let escape_bytes = escape.encode_utf8(&mut buf).as_bytes();
    if !bytes[at..].starts_with(escape_bytes) {
        return None;
    }
    let next = at + escape_bytes.len();
    let escaped = bytes.get(next).map_or(0, |&b| utf8_width(b));
    Some(escape_bytes.len() + escaped)
}

/// End of the line starting the search at `from`, excluding `\n` or `\r\n`.
fn line_end(text: &str, from: usize) -> usize {
    let bytes = text.as_bytes();
    text[from..]
        .find('\n')
        .map_or(bytes.len(), |offset| trim_carriage_return(bytes, from, from + offset))
}

const fn trim_carriage_return(bytes: &[u8], floor: usize, newline: usize) -> usize {
    if newline > floor && bytes[newline - 1] == b'\r' {
        newline - 1
    } else {
        newline
    }
}

fn at_line_start(text: &str, at: usize) -> bool {
    at == 0 || text.as_bytes()[at - 1] == b'\n'
}

/// Line start, or whitespace or a shell metacharacter just before `at`.
fn at_word_start(text: &str, at: usize) -> bool {
    at == 0
        || matches!(
            text.as_bytes()[at - 1],
            b' ' | b'\t' | b'\n' | b'\r' | b';' | b'|' | b'&' | b'(' | b')' | b'<' | b'>'
        )
}

/// Only spaces or tabs between the previous line break and `at`.
fn opens_line(text: &str, at: usize) -> bool {
    text.as_bytes()[..at]
        .iter()
        .rev()
        .take_while(|&&b| b != b'\n')
        .all(|&b| b == b' ' || b == b'\t')
}

/// Width of the UTF-8 sequence introduced by `lead`.
const fn utf8_width(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
