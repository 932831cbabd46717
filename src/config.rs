//! Application configuration
//!
//! Settings come from the environment (`TWITTER_BEARER_TOKEN`,
//! `OPENAI_API_KEY`) with optional overrides for base URLs, which tests and
//! the CLI use to point at mock servers. Missing required values surface as
//! `Error::MissingConfigField`, never panics.

use crate::error::{Error, Result};
use std::env;

/// Default base URL for the post-retrieval API
pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/2";

/// Default base URL for the text-generation service
pub const DEFAULT_GENERATION_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the retrieval API bearer token
pub const BEARER_TOKEN_VAR: &str = "TWITTER_BEARER_TOKEN";

/// Environment variable holding the generation service API key
pub const GENERATION_KEY_VAR: &str = "OPENAI_API_KEY";

/// Runtime configuration for the retrieval pipeline and suggestion helper
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer token for the retrieval API
    pub bearer_token: Option<String>,
    /// API key for the text-generation service
    pub generation_key: Option<String>,
    /// Base URL for the retrieval API
    pub api_base_url: String,
    /// Base URL for the text-generation service
    pub generation_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bearer_token: None,
            generation_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            generation_base_url: DEFAULT_GENERATION_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new config builder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the environment
    pub fn from_env() -> Self {
        Self {
            bearer_token: env::var(BEARER_TOKEN_VAR).ok().filter(|v| !v.is_empty()),
            generation_key: env::var(GENERATION_KEY_VAR).ok().filter(|v| !v.is_empty()),
            ..Self::default()
        }
    }

    /// The bearer token, or a missing-field error when unset
    pub fn require_bearer_token(&self) -> Result<&str> {
        self.bearer_token
            .as_deref()
            .ok_or_else(|| Error::missing_field(BEARER_TOKEN_VAR))
    }

    /// The generation API key, or a missing-field error when unset
    pub fn require_generation_key(&self) -> Result<&str> {
        self.generation_key
            .as_deref()
            .ok_or_else(|| Error::missing_field(GENERATION_KEY_VAR))
    }
}

/// Builder for application config
#[derive(Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the bearer token
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Set the generation API key
    pub fn generation_key(mut self, key: impl Into<String>) -> Self {
        self.config.generation_key = Some(key.into());
        self
    }

    /// Override the retrieval API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    /// Override the generation service base URL
    pub fn generation_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.generation_base_url = url.into();
        self
    }

    /// Build the config
    pub fn build(self) -> AppConfig {
        self.config
    }
}
