pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod extractor;
pub mod language;
pub mod output;
pub mod scanner;

pub use commands::count_paths;
pub use counter::{LineStats, count_lines};
pub use error::{Result, SieveError};
pub use extractor::{Comment, CommentExtractor, extract_comments, extract_with_rule};
pub use language::{LanguageRegistry, LanguageRule};
pub use scanner::{Scanner, Span, SpanKind, scan};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_UNTERMINATED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
