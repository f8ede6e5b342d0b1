//! HTTP transport for the GitHub API
//!
//! `GithubClient` is the shared collaborator every resource service goes
//! through: it builds requests against the configured base URL, attaches
//! authentication, executes them, and decodes JSON responses. It holds no
//! per-request state, so a single instance can be shared freely across
//! tasks.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::orgs::OrgsService;
use crate::response::{ApiResponse, ResponseMeta};

// ============================================================================
// Client Constants
// ============================================================================

/// Public GitHub API base URL, used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Default timeout for API requests in seconds.
/// Can be overridden via the GITHUB_API_TIMEOUT_SECS environment variable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request; GitHub rejects anonymous clients.
pub const DEFAULT_USER_AGENT: &str = concat!("octoapi-client/", env!("CARGO_PKG_VERSION"));

/// Media type for the v3 REST API.
const MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Shared transport for the GitHub API
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    user_agent: String,
}

impl GithubClient {
    /// Create a client against the public GitHub API with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> GithubClientBuilder {
        GithubClientBuilder::default()
    }

    /// Create a client from environment variables
    ///
    /// - `GITHUB_API_URL`: API base URL (default: public API)
    /// - `GITHUB_TOKEN`: auth token, sent as `Authorization: token <value>`
    /// - `GITHUB_API_TIMEOUT_SECS`: request timeout (default: 30)
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();

        if let Ok(url) = std::env::var("GITHUB_API_URL") {
            builder = builder.base_url(url);
        }

        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                builder = builder.token(token);
            }
        }

        let timeout_secs = std::env::var("GITHUB_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        builder = builder.timeout(Duration::from_secs(timeout_secs));

        builder.build()
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Access the organization endpoints
    pub fn orgs(&self) -> OrgsService<'_> {
        OrgsService::new(self)
    }

    /// Build a request against a path relative to the base URL.
    ///
    /// The path may carry a query string. A body, when given, is serialized
    /// as JSON. Fails without touching the network if the path cannot be
    /// resolved or the body cannot be serialized.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Request>
    where
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path).map_err(|source| Error::Url {
            path: path.to_string(),
            source,
        })?;

        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, MEDIA_TYPE)
            .header(USER_AGENT, &self.user_agent);

        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, format!("token {}", token));
        }

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Body)?;
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        Ok(builder.build()?)
    }

    /// Execute a request and decode the JSON response into `T`.
    ///
    /// Response metadata is captured from the headers before the body is
    /// consumed, so API errors still carry whatever the server reported.
    /// Exactly one network call is made; there are no retries.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::Request,
    ) -> Result<ApiResponse<T>> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "dispatching API request");

        let response = self.http.execute(request).await?;
        let meta = ResponseMeta::from_response(&response);

        if !response.status().is_success() {
            let status = meta.status;
            let body = response.text().await.unwrap_or_default();
            let decoded: Option<ApiErrorBody> = serde_json::from_str(&body).ok();
            let (message, documentation_url) = match decoded {
                Some(err_body) => (err_body.message, err_body.documentation_url),
                None => (
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string(),
                    None,
                ),
            };
            warn!(%status, %url, %message, "API request failed");
            return Err(Error::Api {
                status,
                message,
                documentation_url,
                meta,
            });
        }

        let bytes = response.bytes().await?;
        let data = serde_json::from_slice(&bytes).map_err(Error::Decode)?;

        Ok(ApiResponse { data, meta })
    }
}

/// Error body shape used by the GitHub API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    documentation_url: Option<String>,
}

/// Builder for [`GithubClient`]
#[derive(Debug, Default)]
pub struct GithubClientBuilder {
    base_url: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl GithubClientBuilder {
    /// Set the API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the auth token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<GithubClient> {
        let raw = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&raw)?;

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(GithubClient {
            http,
            base_url,
            token: self.token,
            user_agent: self
                .user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

/// Parse a base URL, forcing a trailing slash so relative joins keep the
/// full base path.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let candidate = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };

    Url::parse(&candidate)
        .map_err(|err| Error::config(format!("invalid API base URL '{}': {}", raw, err)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = GithubClient::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_normalizes_base_url() {
        let client = GithubClient::builder()
            .base_url("http://localhost:8000/api/v3")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/v3/");
    }

    #[test]
    fn test_builder_rejects_invalid_base_url() {
        let result = GithubClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_new_request_attaches_auth_and_media_type() {
        let client = GithubClient::builder()
            .base_url("http://localhost:8000")
            .token("t0k3n")
            .build()
            .unwrap();

        let request = client
            .new_request(Method::GET, "user/orgs", None::<&()>)
            .unwrap();

        assert_eq!(request.url().as_str(), "http://localhost:8000/user/orgs");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "token t0k3n"
        );
        assert_eq!(request.headers().get(ACCEPT).unwrap(), MEDIA_TYPE);
    }

    #[test]
    fn test_new_request_without_token_has_no_auth_header() {
        let client = GithubClient::builder()
            .base_url("http://localhost:8000")
            .build()
            .unwrap();

        let request = client
            .new_request(Method::GET, "user/orgs", None::<&()>)
            .unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_new_request_rejects_unresolvable_path() {
        let client = GithubClient::new().unwrap();
        let result = client.new_request(Method::GET, "//:", None::<&()>);
        assert!(matches!(result, Err(Error::Url { .. })));
    }

    #[test]
    fn test_new_request_serializes_body() {
        let client = GithubClient::new().unwrap();
        let body = serde_json::json!({"name": "octo"});

        let request = client
            .new_request(Method::PATCH, "orgs/octo", Some(&body))
            .unwrap();

        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let sent = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(sent, br#"{"name":"octo"}"#.as_slice());
    }
}
