use crate::cli::{Cli, ScanArgs};
use crate::extractor::extract_with_rule;
use crate::output::FileComments;
use crate::{EXIT_SUCCESS, EXIT_UNTERMINATED};

use super::context::{load_registry, load_sources, report_error};

#[must_use]
pub fn run_comments(args: &ScanArgs, cli: &Cli) -> i32 {
    run_comments_impl(args, cli).unwrap_or_else(|e| report_error(&e))
}

/// # Errors
/// Returns an error if config loading, language lookup or reading fails.
pub fn run_comments_impl(args: &ScanArgs, cli: &Cli) -> crate::Result<i32> {
    let registry = load_registry(cli)?;
    let sources = load_sources(&registry, &args.files, args.lang.as_deref())?;

    let files: Vec<FileComments<'_>> = sources
        .iter()
        .map(|source| FileComments {
            path: source.path.clone(),
            language: source.rule.name.clone(),
            comments: extract_with_rule(&source.text, source.rule),
        })
        .collect();

    let output = args.format.formatter().format_comments(&files)?;
    print!("{output}");

    let unterminated = files
        .iter()
        .flat_map(|f| &f.comments)
        .any(|comment| comment.unterminated);
    Ok(if args.strict && unterminated {
        EXIT_UNTERMINATED
    } else {
        EXIT_SUCCESS
    })
}
