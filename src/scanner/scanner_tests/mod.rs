//! Scanner test suite.
//!
//! Tests are organized into submodules by category:
//! - `basic_tests`: span boundaries, offsets, round-trip
//! - `string_context_tests`: comment markers inside string literals (decoys)
//! - `nested_comment_tests`: nesting on and off
//! - `unterminated_tests`: literals running into end of input
//! - `language_tests`: per-language raw strings, anchored blocks, doubled quotes
//! - `repetition_tests`: decoy repetitions and linear-time scanning

use super::*;
use crate::language::LanguageRegistry;

mod basic_tests;
mod string_context_tests;

/// Built-in rule by name.
pub(super) fn rule(name: &str) -> LanguageRule {
    LanguageRegistry::default()
        .rules_for(name)
        .unwrap_or_else(|e| panic!("{e}"))
        .clone()
}

/// `(kind, text)` pairs for every span.
pub(super) fn spans<'a>(text: &'a str, rule: &'a LanguageRule) -> Vec<(SpanKind, &'a str)> {
    scan(text, rule).map(|s| (s.kind, s.text)).collect()
}

/// Texts of the comment spans only.
pub(super) fn comments<'a>(text: &'a str, rule: &'a LanguageRule) -> Vec<&'a str> {
    scan(text, rule)
        .filter(Span::is_comment)
        .map(|s| s.text)
        .collect()
}

/// Concatenated spans must reproduce the input, with contiguous offsets.
pub(super) fn assert_round_trip(text: &str, rule: &LanguageRule) {
    let mut rebuilt = String::with_capacity(text.len());
    let mut expected_start = 0;
    for span in scan(text, rule) {
        assert_eq!(span.start, expected_start, "gap or overlap before {span:?}");
        assert_eq!(&text[span.start..span.end], span.text);
        assert!(!span.is_empty(), "empty span {span:?}");
        rebuilt.push_str(span.text);
        expected_start = span.end;
    }
    assert_eq!(expected_start, text.len());
    assert_eq!(rebuilt, text);
}
