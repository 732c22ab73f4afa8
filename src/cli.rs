use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "comment-sieve")]
#[command(author, version, about = "Find comments in source code without being fooled by string literals")]
#[command(long_about = "Splits source files into comment, string and code spans using \
    per-language rules.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Unterminated literal found (with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (default: .comment-sieve.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every comment, string and code span
    Spans(ScanArgs),

    /// Print comments with their markers stripped
    Comments(ScanArgs),

    /// Count code, comment and blank lines
    Count(CountArgs),

    /// List the registered languages
    Languages(LanguagesArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Files to scan (`-` reads standard input and requires --lang)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Language name or alias (default: detected from the file extension)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 1 if any literal is unterminated
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct CountArgs {
    /// Files or directories to count
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Treat every file as this language instead of detecting it
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 1 if any literal is unterminated
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct LanguagesArgs {
    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
