//! HTTP module
//!
//! Provides the rate-limited fetcher and the inter-page pacer.
//!
//! # Features
//!
//! - **Bounded 429 retry**: honors `Retry-After`, falls back to a stepped wait
//! - **Caller-classified statuses**: any non-429 response is returned as-is
//! - **Pacing**: token-bucket interval pacer for sequential page fetches

mod client;
mod rate_limit;

pub use client::{fallback_backoff, HttpClient, HttpClientConfig, RequestConfig};
pub use rate_limit::{Pacer, PacerConfig};

#[cfg(test)]
mod tests;
