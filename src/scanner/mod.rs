//! Single-pass lexical scanner that splits text into comment, string and code spans.

mod state;

pub use state::{Closed, Mode, Opening, StarterTable};

use serde::Serialize;
use tracing::trace;

use crate::language::LanguageRule;

use state::find_opening;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Comment,
    String,
    Code,
}

impl SpanKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Code => "code",
        }
    }
}

/// A maximal run of text with one classification.
///
/// `text` includes the delimiters; `open_len` and `close_len` are their byte
/// lengths. An unterminated span has `close_len == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
    #[serde(skip)]
    pub open_len: usize,
    #[serde(skip)]
    pub close_len: usize,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unterminated: bool,
}

impl<'a> Span<'a> {
    fn code(text: &'a str, start: usize, end: usize) -> Self {
        Self {
            kind: SpanKind::Code,
            start,
            end,
            text: &text[start..end],
            open_len: 0,
            close_len: 0,
            unterminated: false,
        }
    }

    /// The span text without its opening and closing delimiters.
    #[must_use]
    pub fn body(&self) -> &'a str {
        &self.text[self.open_len..self.text.len() - self.close_len]
    }

    #[must_use]
    pub const fn is_comment(&self) -> bool {
        matches!(self.kind, SpanKind::Comment)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lazy iterator over the spans of one text.
///
/// Re-scanning the same text with the same rule yields the same spans.
pub struct Scanner<'a, 'r> {
    text: &'a str,
    rule: &'r LanguageRule,
    starters: StarterTable,
    pos: usize,
    queued: Option<Span<'a>>,
}

impl<'a, 'r> Scanner<'a, 'r> {
    #[must_use]
    pub fn new(text: &'a str, rule: &'r LanguageRule) -> Self {
        Self {
            text,
            rule,
            starters: StarterTable::new(rule),
            pos: 0,
            queued: None,
        }
    }

    /// Run the literal mode of `opening` to its end and build its span.
    fn enter(&mut self, opening: &Opening<'r>) -> Span<'a> {
        trace!(at = opening.at, mode = ?opening.mode, "enter");
        let closed = opening.mode.run(self.text, opening.at + opening.len);
        self.pos = closed.end;
        Span {
            kind: opening.mode.kind(),
            start: opening.at,
            end: closed.end,
            text: &self.text[opening.at..closed.end],
            open_len: opening.len,
            close_len: closed.close_len,
            unterminated: closed.unterminated,
        }
    }
}

impl<'a> Iterator for Scanner<'a, '_> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(span) = self.queued.take() {
            return Some(span);
        }

        let start = self.pos;
        if start >= self.text.len() {
            return None;
        }

        match find_opening(self.text, start, self.rule, &self.starters) {
            Some(opening) if opening.at == start => Some(self.enter(&opening)),
            Some(opening) => {
                let literal = self.enter(&opening);
                self.queued = Some(literal);
                Some(Span::code(self.text, start, opening.at))
            }
            None => {
                self.pos = self.text.len();
                Some(Span::code(self.text, start, self.text.len()))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_, '_> {}

/// Scan `text` with `rule`.
#[must_use]
pub fn scan<'a, 'r>(text: &'a str, rule: &'r LanguageRule) -> Scanner<'a, 'r> {
    Scanner::new(text, rule)
}

#[cfg(test)]
#[path = "scanner_tests/mod.rs"]
mod tests;
