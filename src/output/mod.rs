mod json;
mod path;
mod report;
mod text;

pub use json::JsonFormatter;
pub use path::display_path;
pub use report::{CountSummary, FileComments, FileCount, FileSpans};
pub use text::TextFormatter;

use crate::error::Result;
use crate::language::LanguageRule;

/// Trait for rendering command results.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_spans(&self, files: &[FileSpans<'_>]) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_comments(&self, files: &[FileComments<'_>]) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_counts(&self, summary: &CountSummary) -> Result<String>;

    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_languages(&self, languages: &[LanguageRule]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn formatter(self) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
