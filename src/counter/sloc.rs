use std::ops::AddAssign;

use serde::Serialize;

use crate::language::LanguageRule;
use crate::scanner::{Span, SpanKind, scan};

/// Per-line classification of a file.
///
/// A line holding both code and a comment counts in both columns, so
/// `code + comment + blank` can exceed `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct LineFlags {
    code: bool,
    comment: bool,
}

impl LineFlags {
    /// Mark the part of a span that falls on this line. Every line touched by a
    /// comment or string counts, even if that part is whitespace.
    fn mark(&mut self, kind: SpanKind, segment: &str) {
        match kind {
            SpanKind::Comment => self.comment = true,
            SpanKind::String => self.code = true,
            SpanKind::Code => self.code |= !segment.trim().is_empty(),
        }
    }
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }

    /// Fold a complete span sequence into line statistics.
    ///
    /// Lines follow `str::lines`: a trailing line break does not start a new line.
    #[must_use]
    pub fn from_spans<'a>(spans: impl IntoIterator<Item = Span<'a>>) -> Self {
        let mut stats = Self::new();
        let mut line = LineFlags::default();
        let mut line_has_text = false;

        for span in spans {
            let mut segments = span.text.split('\n');
            if let Some(first) = segments.next() {
                line.mark(span.kind, first);
                line_has_text |= !first.is_empty();
            }
            for segment in segments {
                stats.push(line);
                line = LineFlags::default();
                line.mark(span.kind, segment);
                line_has_text = !segment.is_empty();
            }
        }

        if line_has_text {
            stats.push(line);
        }
        stats
    }

    fn push(&mut self, line: LineFlags) {
        self.total += 1;
        if line.code {
            self.code += 1;
        }
        if line.comment {
            self.comment += 1;
        }
        if !line.code && !line.comment {
            self.blank += 1;
        }
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// Scan `source` with `rule` and count its lines.
#[must_use]
pub fn count_lines(source: &str, rule: &LanguageRule) -> LineStats {
    LineStats::from_spans(scan(source, rule))
}

#[cfg(test)]
#[path = "sloc_tests/mod.rs"]
mod tests;
