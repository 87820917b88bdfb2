//! Datalens CLI - statistical profiling for tabular data.

mod cli;
mod commands;
mod ingest;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Profile { data, json, output } => {
            commands::profile::run(data, json, output, cli.verbose)
        }

        Commands::Digest { data } => commands::digest::run(data),

        Commands::Ask {
            data,
            query,
            explain,
        } => commands::ask::run(data, query, explain),

        Commands::Aggregate {
            file,
            by,
            metric,
            op,
        } => commands::aggregate::run(file, by, metric, op),

        Commands::Correlate { file, x, y } => commands::correlate::run(file, x, y, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` or the verbosity flag.
fn init_logging(verbose: bool) {
    let default = if verbose { "datalens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
