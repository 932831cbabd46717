//! Authentication applied at the request seam
//!
//! The retrieval API uses a static bearer credential, so the auth layer is a
//! small enum applied to each outgoing request builder. There is no token
//! refresh or caching; the credential lives for the process lifetime.

use reqwest::RequestBuilder;

/// Authentication configuration
#[derive(Debug, Clone, Default)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },
}

impl AuthConfig {
    /// Create a bearer config
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Apply authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        match self {
            Self::None => req,
            Self::Bearer { token } => req.bearer_auth(token),
        }
    }
}
