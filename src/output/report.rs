//! Per-file results handed to the formatters.

use std::path::PathBuf;

use crate::counter::LineStats;
use crate::extractor::Comment;
use crate::scanner::Span;

#[derive(Debug, Clone)]
pub struct FileSpans<'a> {
    pub path: PathBuf,
    pub language: String,
    pub spans: Vec<Span<'a>>,
}

#[derive(Debug, Clone)]
pub struct FileComments<'a> {
    pub path: PathBuf,
    pub language: String,
    pub comments: Vec<Comment<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCount {
    pub path: PathBuf,
    pub language: String,
    pub stats: LineStats,
    /// Number of literals that ran into end of input.
    pub unterminated: usize,
}

/// Line statistics for a set of files plus their totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSummary {
    pub files: Vec<FileCount>,
    pub total: LineStats,
    /// Files skipped because no language matched their extension.
    pub skipped: usize,
}

impl CountSummary {
    #[must_use]
    pub fn new(files: Vec<FileCount>, skipped: usize) -> Self {
        let mut total = LineStats::new();
        for file in &files {
            total += file.stats;
        }
        Self {
            files,
            total,
            skipped,
        }
    }

    #[must_use]
    pub fn unterminated(&self) -> usize {
        self.files.iter().map(|f| f.unterminated).sum()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
