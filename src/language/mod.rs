mod delimiter;
mod registry;

pub use delimiter::{Delimiter, Fence, OpenMatch, Tag};
pub use registry::{BlockComment, LanguageRegistry, LanguageRule, QuoteRule};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
