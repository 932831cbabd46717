//! Inter-page pacing
//!
//! Uses the governor crate for token bucket pacing. The collector acquires a
//! permit before each page fetch; with a burst of one the first acquisition
//! is immediate and every later one waits out the configured interval, which
//! is exactly the "pause between pages, not before the first" behavior the
//! retrieval pipeline wants.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter as Governor};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the pacer
#[derive(Debug, Clone, Copy)]
pub struct PacerConfig {
    /// Minimum interval between consecutive permits
    pub interval: Duration,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

impl PacerConfig {
    /// Create a pacer config with the given interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

/// Token bucket pacer with a burst of one
#[derive(Clone)]
pub struct Pacer {
    limiter: Arc<Governor<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl Pacer {
    /// Create a new pacer with the given config
    pub fn new(config: PacerConfig) -> Self {
        let one = NonZeroU32::new(1).expect("1 is non-zero");
        let interval = config.interval.max(Duration::from_millis(1));
        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(one))
            .allow_burst(one);

        Self {
            limiter: Arc::new(Governor::direct(quota)),
        }
    }

    /// Wait until the next permit is available
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Try to acquire a permit without waiting
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(PacerConfig::default())
    }
}

impl std::fmt::Debug for Pacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pacer").finish()
    }
}
