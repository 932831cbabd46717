// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Tweetline
//!
//! Fetch a social account's complete post history through a paginated,
//! rate-limited REST API, with optional AI-assisted post suggestions.
//!
//! ## Features
//!
//! - **Rate-limited fetching**: bounded 429 retry honoring `Retry-After`
//! - **Cursor pagination**: full-history collection with a safety page cap
//! - **Partial results**: a mid-run failure returns what was gathered
//! - **Post suggestions**: style-matched drafts from a chat-completion model
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tweetline::api::TimelineApi;
//! use tweetline::config::AppConfig;
//! use tweetline::timeline::Collector;
//! use tweetline::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_env();
//!     let api = TimelineApi::new(&config)?;
//!
//!     if let Some(account) = api.account_by_handle("ada").await? {
//!         let collector = Collector::new(api);
//!         let timeline = collector.collect_all(&account.id).await;
//!         println!("{} posts", timeline.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        CLI / caller                     │
//! │   account_by_handle()    collect_all()    suggest()     │
//! └─────────────────────────────────────────────────────────┘
//!                │                │                │
//! ┌──────────────┴───┬────────────┴──────┬─────────┴────────┐
//! │       api        │     timeline      │     suggest      │
//! ├──────────────────┼───────────────────┼──────────────────┤
//! │ envelope parsing │ cursor threading  │ prompt building  │
//! │ absence vs error │ three stop rules  │ list parsing     │
//! └──────────────────┴───────────────────┴──────────────────┘
//!                          │
//!               ┌──────────┴──────────┐
//!               │        http         │
//!               │ 429 retry + pacing  │
//!               └─────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and wire shapes
pub mod types;

/// Application configuration
pub mod config;

/// Authentication at the request seam
pub mod auth;

/// HTTP client with 429 retry and pacing
pub mod http;

/// Upstream API endpoint layer
pub mod api;

/// Paginated timeline collection
pub mod timeline;

/// AI-assisted post suggestions
pub mod suggest;

/// Transient-message notification service
pub mod notify;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
