//! Chat-completion backed text generator

use super::TextGenerator;
use crate::auth::AuthConfig;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Model used for suggestion generation
const MODEL: &str = "gpt-4o";

/// Sampling temperature
const TEMPERATURE: f64 = 0.8;

/// Completion token budget
const MAX_TOKENS: u32 = 600;

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Text generator backed by an OpenAI-compatible chat-completion endpoint
#[derive(Debug)]
pub struct OpenAiGenerator {
    client: HttpClient,
    model: String,
}

impl OpenAiGenerator {
    /// Create a generator from application config
    ///
    /// Fails when the generation API key is absent; the suggester turns that
    /// into its degrade message.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let key = config.require_generation_key()?;
        let http_config = HttpClientConfig::builder()
            .base_url(&config.generation_base_url)
            .auth(AuthConfig::bearer(key))
            .build();
        Ok(Self {
            client: HttpClient::with_config(http_config),
            model: MODEL.to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let response = self.client.post("/chat/completions", body).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::generation(format!(
                "generation service returned {status}: {body}"
            )));
        }

        let completion: ChatCompletion = response
            .json()
            .await
            .map_err(|e| Error::generation(format!("unreadable completion: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::generation("completion contained no choices"))
    }
}
