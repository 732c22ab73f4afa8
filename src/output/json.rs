use serde::Serialize;

use crate::counter::LineStats;
use crate::error::Result;
use crate::extractor::Comment;
use crate::language::LanguageRule;
use crate::scanner::Span;

use super::path::display_path;
use super::{CountSummary, FileComments, FileCount, FileSpans, ReportFormatter};

/// Pretty-printed JSON output.
pub struct JsonFormatter;

#[derive(Serialize)]
struct FilesOutput<T> {
    files: Vec<T>,
}

#[derive(Serialize)]
struct SpansEntry<'s, 'a> {
    path: String,
    language: &'s str,
    spans: &'s [Span<'a>],
}

#[derive(Serialize)]
struct CommentsEntry<'s, 'a> {
    path: String,
    language: &'s str,
    comments: &'s [Comment<'a>],
}

#[derive(Serialize)]
struct CountOutput<'s> {
    summary: CountTotals,
    files: Vec<CountEntry<'s>>,
}

#[derive(Serialize)]
struct CountTotals {
    files: usize,
    skipped: usize,
    unterminated: usize,
    #[serde(flatten)]
    lines: LineStats,
}

#[derive(Serialize)]
struct CountEntry<'s> {
    path: String,
    language: &'s str,
    #[serde(flatten)]
    lines: LineStats,
    unterminated: usize,
}

#[derive(Serialize)]
struct LanguageEntry<'s> {
    name: &'s str,
    extensions: &'s [String],
    aliases: &'s [String],
    line_comments: &'s [String],
    nested: bool,
}

impl<'s> From<&'s FileCount> for CountEntry<'s> {
    fn from(file: &'s FileCount) -> Self {
        Self {
            path: display_path(&file.path),
            language: &file.language,
            lines: file.stats,
            unterminated: file.unterminated,
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_spans(&self, files: &[FileSpans<'_>]) -> Result<String> {
        let output = FilesOutput {
            files: files
                .iter()
                .map(|f| SpansEntry {
                    path: display_path(&f.path),
                    language: &f.language,
                    spans: &f.spans,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_comments(&self, files: &[FileComments<'_>]) -> Result<String> {
        let output = FilesOutput {
            files: files
                .iter()
                .map(|f| CommentsEntry {
                    path: display_path(&f.path),
                    language: &f.language,
                    comments: &f.comments,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_counts(&self, summary: &CountSummary) -> Result<String> {
        let output = CountOutput {
            summary: CountTotals {
                files: summary.files.len(),
                skipped: summary.skipped,
                unterminated: summary.unterminated(),
                lines: summary.total,
            },
            files: summary.files.iter().map(CountEntry::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    fn format_languages(&self, languages: &[LanguageRule]) -> Result<String> {
        let output: Vec<_> = languages
            .iter()
            .map(|l| LanguageEntry {
                name: &l.name,
                extensions: &l.extensions,
                aliases: &l.aliases,
                line_comments: &l.line_comments,
                nested: l.nested,
            })
            .collect();
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
