//! Shared setup for the subcommands: config, language lookup and input.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::language::{LanguageRegistry, LanguageRule};
use crate::output::display_path;
use crate::{EXIT_ERROR, Result, SieveError};

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Load configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the config file cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Built-in languages plus those defined in the loaded configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded.
pub fn load_registry(cli: &Cli) -> Result<LanguageRegistry> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    Ok(LanguageRegistry::with_custom_languages(&config.languages))
}

/// Language for `path`: the `--lang` override if given, else its extension.
///
/// # Errors
/// Returns `UnknownLanguage` if the override names no registered language.
pub fn detect_language<'r>(
    registry: &'r LanguageRegistry,
    path: &Path,
    lang: Option<&str>,
) -> Result<Option<&'r LanguageRule>> {
    if let Some(id) = lang {
        return registry.rules_for(id).map(Some);
    }
    Ok(path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| registry.by_extension(ext)))
}

/// One input file with its text and the rule used to scan it.
#[derive(Debug)]
pub struct Source<'r> {
    pub path: PathBuf,
    pub text: String,
    pub rule: &'r LanguageRule,
}

/// Read every file named on the command line.
///
/// Unlike `count`, an explicit file with no known language is an error here.
///
/// # Errors
/// Returns an error if a file cannot be read or its language is unknown.
pub fn load_sources<'r>(
    registry: &'r LanguageRegistry,
    files: &[PathBuf],
    lang: Option<&str>,
) -> Result<Vec<Source<'r>>> {
    files
        .iter()
        .map(|path| {
            if path.as_os_str() == STDIN_PATH && lang.is_none() {
                return Err(SieveError::Config(
                    "--lang is required when reading standard input".to_string(),
                ));
            }
            let rule = detect_language(registry, path, lang)?
                .ok_or_else(|| SieveError::UnknownLanguage(display_path(path)))?;
            Ok(Source {
                path: path.clone(),
                text: read_source(path)?,
                rule,
            })
        })
        .collect()
}

/// Read a file, or standard input for `-`.
///
/// # Errors
/// Returns `FileRead` if the file cannot be read as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    let result = if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| SieveError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Expand directories into the files below them, sorted by name.
///
/// Hidden entries inside a walked directory are skipped.
///
/// # Errors
/// Returns an error if a directory cannot be traversed.
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }
        let walker = WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));
        for entry in walker {
            let entry = entry.map_err(|e| SieveError::Io(e.into()))?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
    }
    debug!(files = files.len(), "collected input files");
    Ok(files)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Print a command error and map it to the error exit code.
pub fn report_error(error: &SieveError) -> i32 {
    debug!(kind = error.error_type(), "command failed");
    eprintln!("Error: {error}");
    EXIT_ERROR
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
