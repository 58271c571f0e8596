//! Octoseek main entry point
//!
//! Command-line interface for the proxied GitHub search crawler.

use anyhow::Context;
use clap::Parser;
use octoseek::config::load_input;
use octoseek::crawler::Crawler;
use octoseek::output::write_results;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Octoseek: a proxied GitHub search crawler
///
/// Reads a JSON input file (keywords, result kind, proxy endpoints), runs
/// one search against the GitHub search endpoint, and writes the extracted
/// results to a JSON output file.
#[derive(Parser, Debug)]
#[command(name = "octoseek")]
#[command(version = "1.0.0")]
#[command(about = "A proxied GitHub search crawler", long_about = None)]
struct Cli {
    /// Path to the JSON input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to write the JSON results to
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,

    /// Include owner and language statistics for repository results
    #[arg(long)]
    full: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Input problems are the only fatal class; everything past this point
    // degrades to an empty result file instead of a non-zero exit.
    tracing::info!("Loading input from: {}", cli.input.display());
    let input = load_input(&cli.input)
        .with_context(|| format!("failed to load input file {}", cli.input.display()))?;

    tracing::info!(
        "Searching for {:?} ({}) through {} proxies",
        input.keywords,
        input.kind,
        input.proxies.len()
    );

    let mut crawler = Crawler::new(&input.proxies).context("failed to build crawler")?;
    let records = crawler.search(&input.keywords, input.kind).await;

    write_results(&records, &cli.output, cli.full)
        .with_context(|| format!("failed to write results to {}", cli.output.display()))?;

    println!(
        "{} result(s) written to {}",
        records.len(),
        cli.output.display()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("octoseek=info,warn"),
            1 => EnvFilter::new("octoseek=debug,info"),
            2 => EnvFilter::new("octoseek=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
