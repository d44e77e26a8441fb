//! Podharvest main entry point
//!
//! Command-line interface for the podcast episode harvester and feed
//! generator.

use clap::Parser;
use podharvest::config::{load_config, Config};
use podharvest::crawler::Coordinator;
use podharvest::feed::assemble;
use podharvest::records::{read_csv, write_csv, write_json, EpisodeRecord};
use podharvest::CrawlSummary;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Podharvest: a podcast episode harvester and feed generator
///
/// Podharvest crawls a podcast episode index, extracts audio URLs and
/// metadata from each episode page, and assembles the results into an
/// RSS feed consumable by podcast players.
#[derive(Parser, Debug)]
#[command(name = "podharvest")]
#[command(version = "1.0.0")]
#[command(about = "A podcast episode harvester and feed generator", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Harvest episodes and write the interchange files, skip feed assembly
    #[arg(long, conflicts_with = "assemble_only")]
    harvest_only: bool,

    /// Assemble the feed from an existing CSV file, skip crawling
    #[arg(long, conflicts_with = "harvest_only")]
    assemble_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.assemble_only {
        let records = read_csv(Path::new(&config.output.csv_path))?;
        tracing::info!(
            "Loaded {} episodes from {}",
            records.len(),
            config.output.csv_path
        );
        write_feed(&records, &config)?;
        return Ok(());
    }

    let records = run_harvest(&config).await?;

    if !cli.harvest_only {
        write_feed(&records, &config)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("podharvest=info,warn"),
            1 => EnvFilter::new("podharvest=debug,info"),
            2 => EnvFilter::new("podharvest=trace,debug"),
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

/// Runs the harvest stage and persists the interchange files
async fn run_harvest(config: &Config) -> anyhow::Result<Vec<EpisodeRecord>> {
    let coordinator = Coordinator::new(config.crawler.clone())?;

    let report = match coordinator.run().await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    print_summary(&report.summary);

    if report.records.is_empty() {
        tracing::warn!("No episodes extracted");
    } else {
        write_csv(&report.records, Path::new(&config.output.csv_path))?;
        write_json(&report.records, Path::new(&config.output.json_path))?;
    }

    Ok(report.records)
}

/// Assembles the feed document and writes it to the configured path
fn write_feed(records: &[EpisodeRecord], config: &Config) -> anyhow::Result<()> {
    let feed = assemble(records, &config.channel)?;

    let path = Path::new(&config.output.feed_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, feed)?;

    println!(
        "Generated feed with {} episodes at {}",
        records.len(),
        config.output.feed_path
    );
    Ok(())
}

/// Prints the end-of-run harvest summary
fn print_summary(summary: &CrawlSummary) {
    println!("=== Harvest Summary ===");
    println!("  Links discovered:    {}", summary.links_discovered);
    println!("  Records extracted:   {}", summary.records_extracted);
    println!("  Duplicates skipped:  {}", summary.duplicates_skipped);
    println!("  Pages failed:        {}", summary.pages_failed);
    println!("  Pages without audio: {}", summary.pages_without_audio);
}
