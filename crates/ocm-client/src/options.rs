//! # Connection Options
//!
//! Settings used to build a [`Connection`](crate::Connection).
//!
//! Defaults come from the environment:
//!
//! | variable | meaning | default |
//! |----------|---------|---------|
//! | `OCM_URL` | API base URL | `https://api.openshift.com` |
//! | `OCM_TOKEN_URL` | OAuth token endpoint | Red Hat SSO |
//! | `OCM_CLIENT_ID` | OAuth client identifier | unset |
//! | `OCM_CLIENT_SECRET` | OAuth client secret | unset |
//! | `OCM_ACCESS_TOKEN` | bearer token used as-is | unset |
//! | `OCM_TOKEN` | offline or refresh token | unset |
//! | `OCM_RETRY_LIMIT` | retries for transient failures | `2` |
//!
//! ## Example
//!
//! ```rust
//! use ocm_client::ConnectionOptions;
//! use std::time::Duration;
//!
//! let options = ConnectionOptions::default()
//!     .with_url("https://api.stage.openshift.com")
//!     .with_client_credentials("my-client", "my-secret")
//!     .with_timeout(Duration::from_secs(30));
//! ```

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_URL: &str = "https://api.openshift.com";
pub const DEFAULT_TOKEN_URL: &str =
    "https://sso.redhat.com/auth/realms/redhat-external/protocol/openid-connect/token";
pub const DEFAULT_CLIENT_ID: &str = "cloud-services";
pub const DEFAULT_USER_AGENT: &str = concat!("OCM-SDK-Rust/", env!("CARGO_PKG_VERSION"));

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_RETRY_LIMIT: u32 = 2;
const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(1);
const DEFAULT_RETRY_INTERVAL_MAX: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ConnectionOptions {
    /// Base URL of the API server
    pub url: String,
    /// OAuth token endpoint used for refresh and client credentials grants
    pub token_url: String,
    /// OAuth client identifier
    pub client_id: Option<String>,
    /// OAuth client secret, only meaningful together with `client_id`
    pub client_secret: Option<String>,
    /// Bearer token sent as-is, takes precedence over every other credential
    pub access_token: Option<String>,
    /// Offline or refresh token exchanged for access tokens
    pub refresh_token: Option<String>,
    /// Extra headers added to every request
    pub headers: HeaderMap,
    pub user_agent: String,
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub timeout: Duration,
    /// How many times a transient failure is retried
    pub retry_limit: u32,
    /// Delay before the first retry, doubled for every further one
    pub retry_interval: Duration,
    /// Upper bound for the delay between retries
    pub retry_interval_max: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        let url = std::env::var("OCM_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let token_url =
            std::env::var("OCM_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string());

        let retry_limit = std::env::var("OCM_RETRY_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RETRY_LIMIT);

        Self {
            url,
            token_url,
            client_id: non_empty_var("OCM_CLIENT_ID"),
            client_secret: non_empty_var("OCM_CLIENT_SECRET"),
            access_token: non_empty_var("OCM_ACCESS_TOKEN"),
            refresh_token: non_empty_var("OCM_TOKEN"),
            headers: HeaderMap::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
            retry_limit,
            retry_interval: DEFAULT_RETRY_INTERVAL,
            retry_interval_max: DEFAULT_RETRY_INTERVAL_MAX,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl ConnectionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Adds a header sent with every request. Invalid names or values are skipped.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => warn!(header = %name, "Ignoring invalid header"),
        }
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = limit;
        self
    }

    pub fn with_retry_interval(mut self, interval: Duration) -> Self {
        self.retry_interval = interval;
        self
    }

    pub fn with_retry_interval_max(mut self, interval: Duration) -> Self {
        self.retry_interval_max = interval;
        self
    }

    /// Drops every credential so that requests are sent anonymously.
    pub fn anonymous(mut self) -> Self {
        self.client_id = None;
        self.client_secret = None;
        self.access_token = None;
        self.refresh_token = None;
        self
    }
}
