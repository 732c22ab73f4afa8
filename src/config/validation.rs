//! Semantic checks on a parsed configuration.

use super::Config;
use crate::{Result, SieveError};

/// Validates every custom language in `config`.
///
/// # Errors
/// Returns a `Config` error if a language has an empty name, no markers at all,
/// an empty marker, or a quote whose escape character starts its close marker.
pub fn validate_config(config: &Config) -> Result<()> {
    for (name, language) in &config.languages {
        if name.trim().is_empty() {
            return Err(SieveError::Config(
                "language name must not be empty".to_string(),
            ));
        }
        if language.line_comments.is_empty()
            && language.block_comments.is_empty()
            && language.quotes.is_empty()
        {
            return Err(SieveError::Config(format!(
                "languages.{name} defines no comment or quote markers"
            )));
        }
        if language.line_comments.iter().any(String::is_empty) {
            return Err(SieveError::Config(format!(
                "languages.{name}.line_comments contains an empty marker"
            )));
        }
        if let Some(i) = language
            .block_comments
            .iter()
            .position(|(open, close)| open.is_empty() || close.is_empty())
        {
            return Err(SieveError::Config(format!(
                "languages.{name}.block_comments[{i}] needs a non-empty open and close"
            )));
        }
        if let Some(i) = language
            .quotes
            .iter()
            .position(|q| q.open.is_empty() || q.close_marker().is_empty())
        {
            return Err(SieveError::Config(format!(
                "languages.{name}.quotes[{i}] needs a non-empty open and close"
            )));
        }
        if let Some(i) = language
            .quotes
            .iter()
            .position(|q| q.escape.is_some_and(|e| q.close_marker().starts_with(e)))
        {
            return Err(SieveError::Config(format!(
                "languages.{name}.quotes[{i}] escape would swallow its own close; \
                 use doubled_close for doubled quotes"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
