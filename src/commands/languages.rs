use crate::EXIT_SUCCESS;
use crate::cli::{Cli, LanguagesArgs};

use super::context::{load_registry, report_error};

#[must_use]
pub fn run_languages(args: &LanguagesArgs, cli: &Cli) -> i32 {
    run_languages_impl(args, cli).unwrap_or_else(|e| report_error(&e))
}

/// # Errors
/// Returns an error if the configuration cannot be loaded.
pub fn run_languages_impl(args: &LanguagesArgs, cli: &Cli) -> crate::Result<i32> {
    let registry = load_registry(cli)?;
    let output = args.format.formatter().format_languages(registry.all())?;
    print!("{output}");
    Ok(EXIT_SUCCESS)
}
