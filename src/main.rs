//! UDdup main entry point
//!
//! This is the command-line interface for the UDdup URL deduplicator.

use anyhow::Context;
use clap::Parser;
use std::io::BufReader;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uddup::config::{read_config, validate, CliOverrides, Config};
use uddup::dedup::{Deduplicator, KeptSet};
use uddup::{input, output};

/// UDdup: remove URL pattern duplications
///
/// Reads a list of URLs and keeps one representative per structural
/// pattern, dropping static assets along the way. Results are printed
/// sorted, one per line.
#[derive(Parser, Debug)]
#[command(name = "uddup")]
#[command(version)]
#[command(about = "Remove URL pattern duplications", long_about = None)]
struct Cli {
    /// File with a list of urls (reads stdin when omitted)
    #[arg(short = 'u', long = "urls", value_name = "FILE")]
    urls_file: Option<PathBuf>,

    /// Save results to a file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print only the result URLs
    #[arg(short, long)]
    silent: bool,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "silent")]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_settings(&cli)?;
    let silent = config.output.silent;

    setup_logging(cli.verbose, silent);

    if !silent {
        output::print_banner();
    }

    let mut kept = KeptSet::new();
    let mut dedup = Deduplicator::new(&mut kept);

    match &config.input.urls_file {
        Some(path) => {
            input::feed_file(path, &mut dedup)
                .with_context(|| format!("failed to read URLs from {}", path.display()))?;
        }
        None => {
            tracing::info!("Reading URLs from stdin");
            let stdin = std::io::stdin();
            input::feed_reader(BufReader::new(stdin.lock()), &mut dedup)
                .context("failed to read URLs from stdin")?;
        }
    }

    let results = dedup.snapshot();
    let stats = *dedup.stats();
    tracing::info!(
        "Kept {} of {} URLs",
        results.len(),
        stats.urls_processed()
    );

    output::emit_results(&results, config.output.path.as_deref());

    if !silent {
        output::print_summary(&stats, results.len());
    }

    Ok(())
}

/// Loads the optional configuration file and applies command-line flags
fn load_settings(cli: &Cli) -> anyhow::Result<Config> {
    let base = match &cli.config {
        Some(path) => read_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    let config = base.merge_cli(CliOverrides {
        urls_file: cli.urls_file.clone(),
        output: cli.output.clone(),
        silent: cli.silent,
    });

    validate(&config).context("invalid settings")?;
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the banner and results.
fn setup_logging(verbose: u8, silent: bool) {
    let filter = if silent {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("uddup=info,warn"),
            1 => EnvFilter::new("uddup=debug,info"),
            2 => EnvFilter::new("uddup=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
