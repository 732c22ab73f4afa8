use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Contents of a `.comment-sieve.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Extra languages keyed by display name, in file order.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,
}

/// A `[languages.<Name>]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub aliases: Vec<String>,

    #[serde(default)]
    pub line_comments: Vec<String>,

    /// Line comment markers only count at the start of a word (shell `#`).
    #[serde(default)]
    pub line_comments_at_word_start: bool,

    /// `(open, close)` pairs.
    #[serde(default)]
    pub block_comments: Vec<(String, String)>,

    #[serde(default)]
    pub nested: bool,

    #[serde(default)]
    pub quotes: Vec<QuoteConfig>,
}

/// One entry of a language's `quotes` array.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteConfig {
    pub open: String,

    /// Defaults to `open`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escape: Option<char>,

    #[serde(default)]
    pub multiline: bool,

    /// A doubled close marker (`''` in SQL) is part of the literal.
    #[serde(default)]
    pub doubled_close: bool,

    /// At the start of a line the literal is documentation, counted as a comment.
    #[serde(default)]
    pub docstring: bool,
}

impl QuoteConfig {
    #[must_use]
    pub fn close_marker(&self) -> &str {
        self.close.as_deref().unwrap_or(&self.open)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
