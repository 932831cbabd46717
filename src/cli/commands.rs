//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Tweetline timeline fetcher CLI
#[derive(Parser, Debug)]
#[command(name = "tweetline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch an account's full post history
    Timeline {
        /// Account handle, without the leading @
        handle: String,

        /// Safety cap on pages fetched
        #[arg(long, default_value = "15")]
        max_pages: u32,
    },

    /// Generate post suggestions in the account's style
    Suggest {
        /// Account handle, without the leading @
        handle: String,

        /// Number of suggestions to request
        #[arg(long, default_value = "3")]
        count: usize,

        /// Safety cap on pages fetched for the style sample
        #[arg(long, default_value = "15")]
        max_pages: u32,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
