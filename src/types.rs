//! Common types used throughout tweetline
//!
//! Wire-shape value objects for the upstream API plus the collection types
//! the retrieval pipeline hands back to callers. Field names follow the
//! vendor's JSON exactly so serde can map responses without rename glue.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Account
// ============================================================================

/// An account profile, fetched once per session and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Stable account identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Handle, without the leading `@`
    pub username: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    /// Profile bio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Account creation timestamp (RFC 3339)
    pub created_at: String,
    /// Aggregate counters, when the API includes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<AccountMetrics>,
}

/// Aggregate counters attached to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountMetrics {
    pub followers_count: u64,
    pub following_count: u64,
    pub tweet_count: u64,
    pub listed_count: u64,
}

// ============================================================================
// Post
// ============================================================================

/// One item in an account's content history. Immutable once fetched;
/// uniqueness is by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable post identifier
    pub id: String,
    /// Body text
    pub text: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Engagement counters, when the API includes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_metrics: Option<PostMetrics>,
    /// Attached media references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Attachments>,
}

/// Engagement counters attached to a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostMetrics {
    pub retweet_count: u64,
    pub reply_count: u64,
    pub like_count: u64,
    pub quote_count: u64,
}

/// Media references hanging off a post
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Attachments {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_keys: Option<Vec<String>>,
}

/// A media object delivered through the `includes` envelope when media
/// expansions are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub media_key: String,
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
}

// ============================================================================
// Page
// ============================================================================

/// One batch of posts returned by a single API call, plus the continuation
/// cursor when more data is available. Consumed immediately by the collector.
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Posts in API-delivery order
    pub posts: Vec<Post>,
    /// Opaque continuation token for the next page, if any
    pub next_token: Option<String>,
}

impl Page {
    /// Check whether this page carried no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// The full ordered sequence of posts gathered for one account in one
/// retrieval run, in API-delivery order (newest first). Built incrementally
/// by the collector; immutable once returned.
///
/// No deduplication is performed across pages: the upstream API is trusted
/// not to repeat items. `ids()` lets callers check that assumption.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    /// Collected posts
    pub posts: Vec<Post>,
    /// Number of pages that contributed posts
    pub pages_fetched: u32,
}

impl Timeline {
    /// Number of posts collected
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check whether nothing was collected
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The set of distinct post identifiers in this timeline
    pub fn ids(&self) -> HashSet<&str> {
        self.posts.iter().map(|p| p.id.as_str()).collect()
    }

    /// Iterate over the collected posts in delivery order
    pub fn iter(&self) -> std::slice::Iter<'_, Post> {
        self.posts.iter()
    }
}

impl IntoIterator for Timeline {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.posts.into_iter()
    }
}

// ============================================================================
// Response Envelopes
// ============================================================================

/// Envelope for the account-lookup endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AccountEnvelope {
    #[serde(default)]
    pub data: Option<Account>,
    #[serde(default)]
    pub errors: Option<Vec<ApiErrorDetail>>,
}

/// Envelope for the post-listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PostsEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Post>>,
    #[serde(default)]
    pub includes: Option<Includes>,
    #[serde(default)]
    pub meta: Option<ResponseMeta>,
}

/// Expanded objects referenced by the main payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Includes {
    #[serde(default)]
    pub media: Option<Vec<Media>>,
}

/// Pagination metadata on a post-listing response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseMeta {
    #[serde(default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// One entry in the vendor's in-band `errors` array
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
