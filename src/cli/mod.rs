//! CLI module
//!
//! Command-line interface over the retrieval pipeline.
//!
//! # Commands
//!
//! - `timeline` - Fetch an account's full post history
//! - `suggest` - Generate post suggestions in the account's style

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
