//! AI-assisted post suggestions
//!
//! Summarizes stylistic features of a sample of posts (recent texts plus the
//! account's most frequent hashtags), asks a text-generation service for new
//! candidates, and parses the numbered-list reply. The helper degrades
//! rather than fails: any error along the way yields a single human-readable
//! message instead of propagating.

mod generator;

pub use generator::OpenAiGenerator;

use crate::error::Result;
use crate::types::Post;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::error;

/// Hard cap on suggestion length, in characters
pub const MAX_POST_LEN: usize = 280;

/// How many recent posts feed the style sample
pub const SAMPLE_SIZE: usize = 15;

/// How many top hashtags feed the prompt
pub const TOP_HASHTAG_COUNT: usize = 5;

/// Default number of suggestions requested
pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Message returned when generation degrades
const FAILURE_MESSAGE: &str = "Failed to generate post suggestions. Please try again.";

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\w+)").expect("hashtag regex is valid"));

static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s+").expect("list item regex is valid"));

/// A text-generation service
///
/// The seam between the suggestion logic and whatever model backs it, so
/// tests can substitute a canned generator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Suggests new posts in an account's style
pub struct Suggester<G> {
    generator: G,
}

impl<G: TextGenerator> Suggester<G> {
    /// Create a suggester over a text-generation service
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Produce up to `count` suggestions in the account's style
    ///
    /// Valid suggestions are those the model numbered and that fit in
    /// [`MAX_POST_LEN`] characters; fewer than `count` may come back. On any
    /// failure the result is a single failure message, never an error.
    pub async fn suggest(&self, posts: &[Post], handle: &str, count: usize) -> Vec<String> {
        match self.try_suggest(posts, handle, count).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                error!("Suggestion generation for @{} failed: {}", handle, e);
                vec![FAILURE_MESSAGE.to_string()]
            }
        }
    }

    async fn try_suggest(&self, posts: &[Post], handle: &str, count: usize) -> Result<Vec<String>> {
        let prompt = build_prompt(posts, handle, count);
        let text = self.generator.generate(&prompt).await?;
        Ok(parse_suggestions(&text))
    }
}

/// The most frequent hashtags across the given posts, most frequent first
///
/// Ties break alphabetically so the prompt is stable for a given history.
pub fn extract_top_hashtags(posts: &[Post], limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for m in HASHTAG_RE.find_iter(&post.text) {
            *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
        }
    }

    let mut tags: Vec<(String, usize)> = counts.into_iter().collect();
    tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tags.into_iter().take(limit).map(|(tag, _)| tag).collect()
}

/// Build the generation prompt from a tail sample of posts
pub fn build_prompt(posts: &[Post], handle: &str, count: usize) -> String {
    let sample_start = posts.len().saturating_sub(SAMPLE_SIZE);
    let sample = posts[sample_start..]
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    let top_hashtags = extract_top_hashtags(posts, TOP_HASHTAG_COUNT);
    let hashtag_line = if top_hashtags.is_empty() {
        "None".to_string()
    } else {
        top_hashtags.join(", ")
    };

    format!(
        "You are analyzing posts from user @{handle}.\n\
         \n\
         Here are some recent posts from this user:\n\
         {sample}\n\
         \n\
         Common hashtags used: {hashtag_line}\n\
         \n\
         Based on the writing style, topics, tone, and hashtag usage in these posts, \
         generate {count} new post suggestions that this user might write.\n\
         \n\
         The suggestions should:\n\
         1. Match their typical length, style, and tone\n\
         2. Focus on similar topics they typically discuss\n\
         3. Include relevant hashtags if they commonly use them\n\
         4. Be engaging and likely to generate interaction\n\
         5. Each post must be under 280 characters\n\
         \n\
         Format your response as a numbered list with just the post text.\n\
         Do not include any explanations or additional text."
    )
}

/// Parse a numbered-list completion into individual suggestions
///
/// Splits on `N. ` item markers, trims each piece, and drops empties and
/// anything over [`MAX_POST_LEN`] characters. Malformed model output yields
/// fewer suggestions, never an error.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    LIST_ITEM_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty() && s.chars().count() <= MAX_POST_LEN)
        .map(ToString::to_string)
        .collect()
}
