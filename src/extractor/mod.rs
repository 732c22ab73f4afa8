//! Comment extraction on top of the scanner.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::language::{LanguageRegistry, LanguageRule};
use crate::scanner::{Span, scan};

static DEFAULT_REGISTRY: LazyLock<LanguageRegistry> = LazyLock::new(LanguageRegistry::default);

/// A comment with its delimiters stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Comment<'a> {
    /// Comment body without the opening and closing markers.
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// 1-based line of the opening marker.
    pub line: usize,
    /// The comment ran into end of input before its close marker.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub unterminated: bool,
}

impl<'a> Comment<'a> {
    fn from_span(span: &Span<'a>, line: usize) -> Self {
        Self {
            text: span.body(),
            start: span.start,
            end: span.end,
            line,
            unterminated: span.unterminated,
        }
    }
}

impl fmt::Display for Comment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unterminated {
            write!(f, "[unterminated] {}", self.text)
        } else {
            f.write_str(self.text)
        }
    }
}

pub struct CommentExtractor<'r> {
    registry: &'r LanguageRegistry,
}

impl<'r> CommentExtractor<'r> {
    #[must_use]
    pub const fn new(registry: &'r LanguageRegistry) -> Self {
        Self { registry }
    }

    /// Comments of `text` in the language registered as `language_id`.
    ///
    /// # Errors
    /// Returns `SieveError::UnknownLanguage` if `language_id` is not registered.
    pub fn extract<'a>(&self, text: &'a str, language_id: &str) -> Result<Vec<Comment<'a>>> {
        let rule = self.registry.rules_for(language_id)?;
        Ok(extract_with_rule(text, rule))
    }
}

/// Comments of `text` scanned with `rule`.
#[must_use]
pub fn extract_with_rule<'a>(text: &'a str, rule: &LanguageRule) -> Vec<Comment<'a>> {
    let mut comments = Vec::new();
    let mut line = 1;
    for span in scan(text, rule) {
        if span.is_comment() {
            comments.push(Comment::from_span(&span, line));
        }
        line += span.text.bytes().filter(|&b| b == b'\n').count();
    }
    debug!(language = %rule.name, comments = comments.len(), "extracted comments");
    comments
}

/// Comments of `text`, looked up in the built-in languages.
///
/// # Errors
/// Returns `SieveError::UnknownLanguage` if `language_id` is not built in.
pub fn extract_comments<'a>(text: &'a str, language_id: &str) -> Result<Vec<Comment<'a>>> {
    CommentExtractor::new(&DEFAULT_REGISTRY).extract(text, language_id)
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
