//! # Token Sources
//!
//! Supplies bearer tokens for API requests.
//!
//! * [`StaticToken`] - a fixed access token
//! * [`OAuthTokenSource`] - exchanges a refresh token or client credentials at an
//!   OAuth2 token endpoint and caches the access token until shortly before it expires

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::error::OcmError;

/// Tokens are refreshed this long before the server says they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(30);

/// Used when the token endpoint doesn't report a usable lifetime.
const DEFAULT_LIFETIME: Duration = Duration::from_secs(300);

#[async_trait]
pub trait TokenSource: Send + Sync + std::fmt::Debug {
    /// Returns the bearer token to send, or `None` for anonymous requests.
    async fn token(&self) -> Result<Option<String>, OcmError>;

    /// Forgets any cached token so that the next call fetches a fresh one.
    async fn invalidate(&self) {}
}

#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<Option<String>, OcmError> {
        Ok(Some(self.0.clone()))
    }
}

#[derive(Clone, PartialEq)]
pub enum Grant {
    RefreshToken {
        client_id: String,
        refresh_token: String,
    },
    ClientCredentials {
        client_id: String,
        client_secret: String,
    },
}

impl std::fmt::Debug for Grant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grant::RefreshToken { client_id, .. } => f
                .debug_struct("RefreshToken")
                .field("client_id", client_id)
                .field("refresh_token", &"<redacted>")
                .finish(),
            Grant::ClientCredentials { client_id, .. } => f
                .debug_struct("ClientCredentials")
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
        }
    }
}

impl Grant {
    fn form(&self) -> String {
        let mut form = url::form_urlencoded::Serializer::new(String::new());
        match self {
            Grant::RefreshToken {
                client_id,
                refresh_token,
            } => {
                form.append_pair("grant_type", "refresh_token")
                    .append_pair("client_id", client_id)
                    .append_pair("refresh_token", refresh_token);
            }
            Grant::ClientCredentials {
                client_id,
                client_secret,
            } => {
                form.append_pair("grant_type", "client_credentials")
                    .append_pair("client_id", client_id)
                    .append_pair("client_secret", client_secret);
            }
        }
        form.finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

#[derive(Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

#[derive(Debug)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now()
            .checked_add(EXPIRY_MARGIN)
            .is_some_and(|now| now < self.expires_at)
    }
}

#[derive(Debug)]
pub struct OAuthTokenSource {
    client: Client,
    token_url: Url,
    grant: Grant,
    cached: RwLock<Option<CachedToken>>,
}

impl OAuthTokenSource {
    pub fn new(client: Client, token_url: Url, grant: Grant) -> Self {
        Self {
            client,
            token_url,
            grant,
            cached: RwLock::new(None),
        }
    }

    #[instrument(skip(self), fields(token_url = %self.token_url))]
    async fn request_token(&self) -> Result<CachedToken, OcmError> {
        debug!(grant = ?self.grant, "Requesting access token");

        let response = self
            .client
            .post(self.token_url.clone())
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(self.grant.form())
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to reach token endpoint");
                OcmError::Authentication(format!("Failed to reach token endpoint: {e}"))
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            OcmError::Authentication(format!("Failed to read token response: {e}"))
        })?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<TokenErrorResponse>(&body) {
                Ok(e) => match e.error_description {
                    Some(description) => format!("{}: {}", e.error, description),
                    None => e.error,
                },
                Err(_) => String::from_utf8_lossy(&body).trim().to_string(),
            };
            error!(status = status.as_u16(), "Token endpoint rejected the request");
            return Err(OcmError::Authentication(format!(
                "token endpoint returned status {}: {}",
                status.as_u16(),
                message
            )));
        }

        let token: TokenResponse = serde_json::from_slice(&body).map_err(|e| {
            OcmError::Authentication(format!("Failed to parse token response: {e}"))
        })?;

        let lifetime = token
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_LIFETIME);
        debug!(expires_in = lifetime.as_secs(), "Obtained access token");

        let now = Instant::now();
        let expires_at = match now.checked_add(lifetime) {
            Some(expires_at) => expires_at,
            None => {
                warn!(
                    expires_in = lifetime.as_secs(),
                    "Token lifetime out of range, using the default"
                );
                now + DEFAULT_LIFETIME
            }
        };

        Ok(CachedToken {
            value: token.access_token,
            expires_at,
        })
    }
}

#[async_trait]
impl TokenSource for OAuthTokenSource {
    async fn token(&self) -> Result<Option<String>, OcmError> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
                return Ok(Some(token.value.clone()));
            }
        }

        let mut cached = self.cached.write().await;
        // Another task may have refreshed while we waited for the write lock.
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(Some(token.value.clone()));
        }
        let token = self.request_token().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(Some(value))
    }

    async fn invalidate(&self) {
        self.cached.write().await.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_log::test;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup(grant: Grant) -> (MockServer, OAuthTokenSource) {
        let server = MockServer::start().await;
        let url = Url::parse(&format!("{}/token", server.uri())).unwrap();
        (server, OAuthTokenSource::new(Client::new(), url, grant))
    }

    fn client_credentials() -> Grant {
        Grant::ClientCredentials {
            client_id: "my-client".to_string(),
            client_secret: "my-secret".to_string(),
        }
    }

    #[test]
    fn test_grant_form_encoding() {
        let form = Grant::RefreshToken {
            client_id: "cloud-services".to_string(),
            refresh_token: "a b&c".to_string(),
        }
        .form();
        assert_eq!(
            form,
            "grant_type=refresh_token&client_id=cloud-services&refresh_token=a+b%26c"
        );
    }

    #[test]
    fn test_grant_debug_redacts_secrets() {
        let debug = format!("{:?}", client_credentials());
        assert!(debug.contains("my-client"));
        assert!(!debug.contains("my-secret"));
    }

    #[test(tokio::test)]
    async fn test_static_token() {
        let source = StaticToken::new("abc");
        assert_eq!(source.token().await.unwrap(), Some("abc".to_string()));
    }

    #[test(tokio::test)]
    async fn test_token_is_cached() {
        let (server, source) = setup(client_credentials()).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "token-1",
                "expires_in": 300,
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(source.token().await.unwrap(), Some("token-1".to_string()));
        assert_eq!(source.token().await.unwrap(), Some("token-1".to_string()));
    }

    #[test(tokio::test)]
    async fn test_token_with_huge_lifetime_is_cached() {
        let (server, source) = setup(client_credentials()).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "forever",
                "expires_in": u64::MAX
            })))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(source.token().await.unwrap(), Some("forever".to_string()));
        assert_eq!(source.token().await.unwrap(), Some("forever".to_string()));
    }

    #[test(tokio::test)]
    async fn test_short_lived_token_is_refreshed() {
        let (server, source) = setup(client_credentials()).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "short",
                "expires_in": 10
            })))
            .expect(2)
            .mount(&server)
            .await;

        source.token().await.unwrap();
        source.token().await.unwrap();
    }

    #[test(tokio::test)]
    async fn test_invalidate_forces_new_token() {
        let (server, source) = setup(client_credentials()).await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "token",
                "expires_in": 300
            })))
            .expect(2)
            .mount(&server)
            .await;

        source.token().await.unwrap();
        source.invalidate().await;
        source.token().await.unwrap();
    }

    #[test(tokio::test)]
    async fn test_token_endpoint_error() {
        let (server, source) = setup(Grant::RefreshToken {
            client_id: "cloud-services".to_string(),
            refresh_token: "expired".to_string(),
        })
        .await;

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_grant",
                "error_description": "Offline user session not found"
            })))
            .mount(&server)
            .await;

        let err = source.token().await.unwrap_err();
        match err {
            OcmError::Authentication(msg) => {
                assert!(msg.contains("status 400"));
                assert!(msg.contains("invalid_grant: Offline user session not found"));
            }
            other => panic!("Expected Authentication error, got {other:?}"),
        }
    }
}
