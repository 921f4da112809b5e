//! collection CLI - Command Line Front End for collection_core
//!
//! # Commands
//!
//! - `collection shuffle [--seed N] [--lazy]` - Print the input tokens in random order
//! - `collection split --group-size N` - Print the input tokens in fixed-size groups
//! - `collection extrema` - Print the indices of the smallest and largest integers
//! - `collection check` - Print the effective configuration
//!
//! Tokens are read from `--input <file>` or stdin, separated by whitespace
//! and/or commas.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;

pub use error::{CliError, Result};

use crate::config::OutputFormat;

/// Sequence shuffling and chunking tool
#[derive(Parser)]
#[command(name = "collection")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "collection.toml")]
    config: String,

    /// Output format (overrides the configuration)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the input tokens in a random order
    Shuffle {
        /// Input file (stdin when absent)
        #[arg(short, long)]
        input: Option<String>,

        /// Seed for a reproducible order
        #[arg(short, long)]
        seed: Option<u64>,

        /// Yield tokens one at a time instead of shuffling a buffer in place
        #[arg(long)]
        lazy: bool,
    },

    /// Print the input tokens in fixed-size groups
    Split {
        /// Input file (stdin when absent)
        #[arg(short, long)]
        input: Option<String>,

        /// Number of tokens per group; must be strictly positive
        #[arg(short, long, allow_negative_numbers = true)]
        group_size: Option<i64>,
    },

    /// Print the indices of the smallest and largest integers
    Extrema {
        /// Input file (stdin when absent)
        #[arg(short, long)]
        input: Option<String>,
    },

    /// Print the effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; logs go to stderr so stdout carries only results
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mut settings = config::load(&cli.config)?;
    if let Some(format) = cli.format {
        settings.format = format;
    }
    debug!(?settings, "effective configuration");

    match cli.command {
        Commands::Shuffle { input, seed, lazy } => commands::shuffle::run(
            input.as_deref(),
            seed.or(settings.seed),
            lazy,
            settings.format,
        ),
        Commands::Split { input, group_size } => commands::split::run(
            input.as_deref(),
            group_size.unwrap_or(settings.group_size),
            settings.format,
        ),
        Commands::Extrema { input } => commands::extrema::run(input.as_deref(), settings.format),
        Commands::Check => commands::check::run(&settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_group_size_parses() {
        let cli = Cli::try_parse_from(["collection", "split", "--group-size", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Split {
                group_size: Some(-5),
                ..
            }
        ));
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["collection", "shuffle", "--seed", "666", "-f", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Shuffle {
                seed: Some(666),
                lazy: false,
                ..
            }
        ));
    }
}
