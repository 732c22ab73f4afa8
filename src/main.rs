use clap::Parser;
use tracing_subscriber::EnvFilter;

use comment_sieve::cli::{Cli, Commands};
use comment_sieve::commands::{run_comments, run_count, run_languages, run_spans};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Spans(args) => run_spans(args, &cli),
        Commands::Comments(args) => run_comments(args, &cli),
        Commands::Count(args) => run_count(args, &cli),
        Commands::Languages(args) => run_languages(args, &cli),
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr. `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
