mod comments;
pub mod context;
mod count;
mod languages;
mod spans;

pub use comments::{run_comments, run_comments_impl};
pub use count::{count_paths, run_count, run_count_impl};
pub use languages::{run_languages, run_languages_impl};
pub use spans::{run_spans, run_spans_impl};
