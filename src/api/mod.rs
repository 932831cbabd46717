//! Upstream API endpoint layer
//!
//! Thin layer over [`HttpClient`] that knows the two endpoints the retrieval
//! pipeline needs: account lookup by handle and one page of an account's
//! posts. Classification happens here: a missing account is an explicit
//! absence (`Ok(None)`), any other non-2xx status is an upstream failure.

use crate::auth::AuthConfig;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{Account, AccountEnvelope, Page, PostsEnvelope};
use reqwest::StatusCode;
use tracing::debug;

/// Default number of posts requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Account fields requested on lookup
const USER_FIELDS: &str = "profile_image_url,description,created_at,public_metrics";

/// Post fields requested on listing
const POST_FIELDS: &str = "created_at,public_metrics,attachments";

/// Expansions requested on listing
const EXPANSIONS: &str = "attachments.media_keys";

/// Media fields requested on listing
const MEDIA_FIELDS: &str = "url,preview_image_url";

/// Client for the upstream timeline API
#[derive(Debug)]
pub struct TimelineApi {
    client: HttpClient,
}

impl TimelineApi {
    /// Create an API client from application config
    ///
    /// Fails when the bearer token is absent.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let token = config.require_bearer_token()?;
        let http_config = HttpClientConfig::builder()
            .base_url(&config.api_base_url)
            .auth(AuthConfig::bearer(token))
            .build();
        Ok(Self::with_client(HttpClient::with_config(http_config)))
    }

    /// Create an API client over an existing HTTP client
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Look up an account by handle
    ///
    /// Returns `Ok(None)` when the upstream reports no such account, either
    /// as a 404 or as a 200 carrying an `errors` array and no `data`.
    pub async fn account_by_handle(&self, handle: &str) -> Result<Option<Account>> {
        let path = format!("/users/by/username/{handle}");
        let request = RequestConfig::new().query("user.fields", USER_FIELDS);

        let response = self.client.get_with_config(&path, request).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let envelope: AccountEnvelope = response.json().await.map_err(Error::Http)?;
        if envelope.data.is_none() {
            debug!("Account lookup for '{}' returned no data", handle);
        }
        Ok(envelope.data)
    }

    /// Fetch one page of an account's posts
    ///
    /// The cursor parameter is omitted entirely on the first page. Non-2xx
    /// statuses are upstream failures; an envelope without `data` is an
    /// empty page, not an error.
    pub async fn posts_page(
        &self,
        account_id: &str,
        cursor: Option<&str>,
        max_results: u32,
    ) -> Result<Page> {
        let path = format!("/users/{account_id}/tweets");
        let mut request = RequestConfig::new()
            .query("max_results", max_results.to_string())
            .query("tweet.fields", POST_FIELDS)
            .query("expansions", EXPANSIONS)
            .query("media.fields", MEDIA_FIELDS);
        if let Some(token) = cursor {
            request = request.query("pagination_token", token);
        }

        let response = self.client.get_with_config(&path, request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), body));
        }

        let envelope: PostsEnvelope = response.json().await.map_err(Error::Http)?;
        let posts = envelope.data.unwrap_or_default();
        let next_token = envelope.meta.and_then(|m| m.next_token);

        debug!(
            "Fetched page for account {}: {} posts, cursor {}",
            account_id,
            posts.len(),
            if next_token.is_some() { "present" } else { "absent" }
        );

        Ok(Page { posts, next_token })
    }
}
