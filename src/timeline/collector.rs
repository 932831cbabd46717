//! Paginated collector
//!
//! Fetches pages strictly sequentially (the cursor for page N+1 only exists
//! once page N has arrived) and accumulates posts in delivery order. Three
//! independent conditions stop the loop: a fetch failure, an empty page, or
//! the page cap / missing cursor. Any one of them is sufficient; the
//! upstream's "no more data" signal is not trusted to be the only one.
//!
//! Fetch failures never propagate: the collector returns whatever it has
//! gathered so far. Partial history beats no history.

use crate::api::{TimelineApi, DEFAULT_PAGE_SIZE};
use crate::http::{Pacer, PacerConfig};
use crate::types::Timeline;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{info, warn};

/// Configuration for timeline collection
#[derive(Debug, Clone, Copy)]
pub struct CollectorConfig {
    /// Safety cap on the number of pages fetched per run
    pub max_pages: u32,
    /// Posts requested per page
    pub page_size: u32,
    /// Pause between consecutive page fetches (not before the first)
    pub page_interval: Duration,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_pages: 15,
            page_size: DEFAULT_PAGE_SIZE,
            page_interval: Duration::from_secs(1),
        }
    }
}

impl CollectorConfig {
    /// Create a config with a custom page cap
    pub fn with_max_pages(max_pages: u32) -> Self {
        Self {
            max_pages,
            ..Self::default()
        }
    }
}

/// Collects an account's full post history across pages
#[derive(Debug)]
pub struct Collector {
    api: TimelineApi,
    config: CollectorConfig,
}

impl Collector {
    /// Create a collector with default configuration
    pub fn new(api: TimelineApi) -> Self {
        Self::with_config(api, CollectorConfig::default())
    }

    /// Create a collector with custom configuration
    pub fn with_config(api: TimelineApi, config: CollectorConfig) -> Self {
        Self { api, config }
    }

    /// Collect all available posts for an account
    ///
    /// Never fails: a fetch error terminates the loop early and the posts
    /// gathered up to that point are returned. Each call owns its own cursor
    /// and accumulator, so concurrent collections for distinct accounts need
    /// no coordination.
    pub async fn collect_all(&self, account_id: &str) -> Timeline {
        // Fresh pacer per run: the first permit is free, every later one
        // waits out the interval, independent of the fetcher's 429 backoff.
        let pacer = Pacer::new(PacerConfig::new(self.config.page_interval));
        let mut timeline = Timeline::default();
        let mut cursor: Option<String> = None;

        while timeline.pages_fetched < self.config.max_pages {
            pacer.wait().await;

            let page = match self
                .api
                .posts_page(account_id, cursor.as_deref(), self.config.page_size)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!(
                        "Collection for account {} stopped after {} pages: {}",
                        account_id, timeline.pages_fetched, e
                    );
                    break;
                }
            };

            // An empty page means no more data, even if a cursor came along.
            if page.is_empty() {
                break;
            }

            timeline.posts.extend(page.posts);
            timeline.pages_fetched += 1;

            match page.next_token {
                Some(token) => cursor = Some(token),
                None => break,
            }
        }

        info!(
            "Collected {} posts for account {} across {} pages",
            timeline.len(),
            account_id,
            timeline.pages_fetched
        );
        timeline
    }

    /// Collect posts created within the inclusive `[start, end]` range
    ///
    /// Collects the full history first, then filters by creation timestamp.
    /// Posts with unparseable timestamps are dropped.
    pub async fn collect_range(
        &self,
        account_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Timeline {
        let mut timeline = self.collect_all(account_id).await;
        timeline.posts.retain(|post| {
            DateTime::parse_from_rfc3339(&post.created_at)
                .map(|t| {
                    let t = t.with_timezone(&Utc);
                    t >= start && t <= end
                })
                .unwrap_or(false)
        });
        timeline
    }
}
