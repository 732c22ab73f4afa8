use tracing::debug;

use crate::cli::{Cli, ScanArgs};
use crate::output::FileSpans;
use crate::scanner::scan;
use crate::{EXIT_SUCCESS, EXIT_UNTERMINATED};

use super::context::{load_registry, load_sources, report_error};

#[must_use]
pub fn run_spans(args: &ScanArgs, cli: &Cli) -> i32 {
    run_spans_impl(args, cli).unwrap_or_else(|e| report_error(&e))
}

/// # Errors
/// Returns an error if config loading, language lookup or reading fails.
pub fn run_spans_impl(args: &ScanArgs, cli: &Cli) -> crate::Result<i32> {
    let registry = load_registry(cli)?;
    let sources = load_sources(&registry, &args.files, args.lang.as_deref())?;

    let files: Vec<FileSpans<'_>> = sources
        .iter()
        .map(|source| {
            debug!(path = %source.path.display(), language = %source.rule.name, "scanning");
            FileSpans {
                path: source.path.clone(),
                language: source.rule.name.clone(),
                spans: scan(&source.text, source.rule).collect(),
            }
        })
        .collect();

    let output = args.format.formatter().format_spans(&files)?;
    print!("{output}");

    let unterminated = files
        .iter()
        .flat_map(|f| &f.spans)
        .any(|span| span.unterminated);
    Ok(if args.strict && unterminated {
        EXIT_UNTERMINATED
    } else {
        EXIT_SUCCESS
    })
}
