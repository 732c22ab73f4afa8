use std::fmt::Write;

use crate::error::Result;
use crate::language::LanguageRule;

use super::path::display_path;
use super::{CountSummary, FileComments, FileSpans, ReportFormatter};

/// Plain text output, one span, comment or file per line.
pub struct TextFormatter;

impl TextFormatter {
    fn header(output: &mut String, path: &std::path::Path, language: &str) {
        writeln!(output, "==> {} ({language}) <==", display_path(path)).ok();
    }
}

impl ReportFormatter for TextFormatter {
    fn format_spans(&self, files: &[FileSpans<'_>]) -> Result<String> {
        let mut output = String::new();
        for (i, file) in files.iter().enumerate() {
            if files.len() > 1 {
                if i > 0 {
                    writeln!(output).ok();
                }
                Self::header(&mut output, &file.path, &file.language);
            }
            for span in &file.spans {
                let marker = if span.unterminated {
                    " [unterminated]"
                } else {
                    ""
                };
                writeln!(
                    output,
                    "{:>6}..{:<6} {:<7} {:?}{marker}",
                    span.start,
                    span.end,
                    span.kind.as_str(),
                    span.text
                )
                .ok();
            }
        }
        Ok(output)
    }

    fn format_comments(&self, files: &[FileComments<'_>]) -> Result<String> {
        let mut output = String::new();
        for file in files {
            let path = display_path(&file.path);
            for comment in &file.comments {
                writeln!(output, "{path}:{}: {comment}", comment.line).ok();
            }
        }
        Ok(output)
    }

    fn format_counts(&self, summary: &CountSummary) -> Result<String> {
        let mut output = String::new();
        for file in &summary.files {
            write!(
                output,
                "{}: {} lines (code={}, comment={}, blank={})",
                display_path(&file.path),
                file.stats.total,
                file.stats.code,
                file.stats.comment,
                file.stats.blank
            )
            .ok();
            if file.unterminated > 0 {
                write!(output, " [{} unterminated]", file.unterminated).ok();
            }
            writeln!(output).ok();
        }
        if !summary.files.is_empty() {
            writeln!(output).ok();
        }

        writeln!(output, "Summary:").ok();
        writeln!(output, "  Files: {}", summary.files.len()).ok();
        writeln!(output, "  Total lines: {}", summary.total.total).ok();
        writeln!(output, "  Code: {}", summary.total.code).ok();
        writeln!(output, "  Comments: {}", summary.total.comment).ok();
        writeln!(output, "  Blank: {}", summary.total.blank).ok();
        if summary.skipped > 0 {
            writeln!(output, "  Skipped (unknown language): {}", summary.skipped).ok();
        }
        let unterminated = summary.unterminated();
        if unterminated > 0 {
            writeln!(output, "  Unterminated literals: {unterminated}").ok();
        }
        Ok(output)
    }

    fn format_languages(&self, languages: &[LanguageRule]) -> Result<String> {
        let width = languages.iter().map(|l| l.name.len()).max().unwrap_or(0);
        let mut output = String::new();
        for language in languages {
            write!(output, "{:<width$}  {}", language.name, language.extensions.join(", ")).ok();
            if !language.aliases.is_empty() {
                write!(output, "  (aliases: {})", language.aliases.join(", ")).ok();
            }
            writeln!(output).ok();
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
