//! Geoscan CLI - find geotagged photos and report their coordinates.
//!
//! Geoscan walks one or more directories, reads the EXIF block of every
//! image it finds, and writes `lat_long.csv` (and optionally `lat_long.html`)
//! into each scanned directory.
//!
//! # Usage
//!
//! ```bash
//! # CSV report for one directory
//! geoscan scan ~/Pictures/trip
//!
//! # CSV and HTML for several directories
//! geoscan scan ./2023 ./2024 --html
//!
//! # View configuration
//! geoscan config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// Geoscan - report the GPS coordinates embedded in your photos.
#[derive(Parser, Debug)]
#[command(name = "geoscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, env = "GEOSCAN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan directories and write coordinate reports
    Scan(cli::scan::ScanArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match &cli.config {
        Some(path) => geoscan_core::Config::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => match geoscan_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `geoscan config path`."
                );
                geoscan_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Geoscan v{}", geoscan_core::VERSION);

    match cli.command {
        Commands::Scan(args) => cli::scan::execute(args, config),
        Commands::Config(args) => cli::config::execute(args, cli.config.as_deref(), &config),
    }
}
