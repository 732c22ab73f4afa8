use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cli::{Cli, CountArgs};
use crate::counter::LineStats;
use crate::language::LanguageRegistry;
use crate::output::{CountSummary, FileCount};
use crate::scanner::{Span, scan};
use crate::{EXIT_SUCCESS, EXIT_UNTERMINATED, SieveError};

use super::context::{collect_files, detect_language, load_registry, read_source, report_error};

#[must_use]
pub fn run_count(args: &CountArgs, cli: &Cli) -> i32 {
    run_count_impl(args, cli).unwrap_or_else(|e| report_error(&e))
}

/// # Errors
/// Returns an error if config loading, traversal or reading fails.
pub fn run_count_impl(args: &CountArgs, cli: &Cli) -> crate::Result<i32> {
    let registry = load_registry(cli)?;
    let summary = count_paths(&registry, &args.paths, args.lang.as_deref())?;

    let output = args.format.formatter().format_counts(&summary)?;
    print!("{output}");

    Ok(if args.strict && summary.unterminated() > 0 {
        EXIT_UNTERMINATED
    } else {
        EXIT_SUCCESS
    })
}

/// Count every file under `paths` in parallel, in path order.
///
/// Files without a known language, and files that are not UTF-8, are skipped.
///
/// # Errors
/// Returns an error if `lang` is unknown or a file cannot be read.
pub fn count_paths(
    registry: &LanguageRegistry,
    paths: &[PathBuf],
    lang: Option<&str>,
) -> crate::Result<CountSummary> {
    if let Some(id) = lang {
        registry.rules_for(id)?;
    }
    let files = collect_files(paths)?;

    let counted: Vec<Option<FileCount>> = files
        .par_iter()
        .map(|path| count_file(registry, path, lang))
        .collect::<crate::Result<_>>()?;

    let skipped = counted.iter().filter(|c| c.is_none()).count();
    Ok(CountSummary::new(counted.into_iter().flatten().collect(), skipped))
}

fn count_file(
    registry: &LanguageRegistry,
    path: &Path,
    lang: Option<&str>,
) -> crate::Result<Option<FileCount>> {
    let Some(rule) = detect_language(registry, path, lang)? else {
        debug!(path = %path.display(), "skipping file with unknown language");
        return Ok(None);
    };

    let text = match read_source(path) {
        Ok(text) => text,
        Err(SieveError::FileRead { source, .. }) if source.kind() == ErrorKind::InvalidData => {
            warn!(path = %path.display(), "skipping file that is not valid UTF-8");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let spans: Vec<Span<'_>> = scan(&text, rule).collect();
    let unterminated = spans.iter().filter(|s| s.unterminated).count();
    let stats = LineStats::from_spans(spans);
    debug!(path = %path.display(), language = %rule.name, total = stats.total, "counted");

    Ok(Some(FileCount {
        path: path.to_path_buf(),
        language: rule.name.clone(),
        stats,
        unterminated,
    }))
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
