use std::time::Instant;

use crate::enumerator::{Enumerator, SearchConfig};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Bruteforge - exhaustive string search over a charset
#[derive(Parser, Debug)]
#[command(name = "bruteforge")]
#[command(about = "Search every string over a charset, shortest first, for literal targets")]
#[command(version)]
pub struct CliArgs {
    /// Target strings to search for
    #[arg(required = true)]
    pub targets: Vec<String>,

    /// Maximum candidate length (default: length of the longest target)
    #[arg(short = 'x', long)]
    pub max_length: Option<usize>,

    /// Minimum candidate length
    #[arg(short = 'n', long, default_value_t = 1)]
    pub min_length: usize,

    /// Charset to draw candidate symbols from (default: letters, digits and punctuation)
    #[arg(short, long)]
    pub charset: Option<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub targets: Vec<String>,
    pub max_length: usize,
    pub min_length: usize,
    pub charset: Option<String>,
    pub log_level: LogLevel,
}

fn default_max_length(targets: &[String]) -> usize {
    targets
        .iter()
        .map(|target| target.chars().count())
        .max()
        .unwrap_or(1)
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    let max_length = args
        .max_length
        .unwrap_or_else(|| default_max_length(&args.targets));

    Ok(CliConfig {
        targets: args.targets,
        max_length,
        min_length: args.min_length,
        charset: args.charset,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let mut search_config = SearchConfig {
        min_length: config.min_length,
        ..SearchConfig::default()
    };
    if let Some(charset) = config.charset {
        search_config.charset = charset;
    }

    let enumerator = Enumerator::checked(config.max_length, search_config)
        .context("Invalid search configuration")?;

    info!(
        "Searching for {} target(s), up to {} candidates per search",
        config.targets.len(),
        enumerator.space_size()
    );

    let total_start = Instant::now();
    for target in &config.targets {
        let search_start = Instant::now();
        match enumerator.search(|candidate| candidate == target.as_str()) {
            Some(found) => {
                println!(
                    "String {} found in {:.2} seconds!",
                    found,
                    search_start.elapsed().as_secs_f64()
                );
            }
            None => {
                warn!("No candidate matched '{}'", target);
                println!(
                    "String {} not found after {:.2} seconds.",
                    target,
                    search_start.elapsed().as_secs_f64()
                );
            }
        }
    }
    println!(
        "Total execute time {:.2}s.",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
