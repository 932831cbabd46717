//! Timeline collection
//!
//! Drives the endpoint layer through cursor pagination and assembles a
//! complete post history for one account.

mod collector;

pub use collector::{Collector, CollectorConfig};

#[cfg(test)]
mod tests;
