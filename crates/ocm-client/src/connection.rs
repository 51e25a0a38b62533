use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::error::{ApiError, OcmError};
use crate::options::{ConnectionOptions, DEFAULT_CLIENT_ID};
use crate::request::{RawResponse, Request};
use crate::token::{Grant, OAuthTokenSource, StaticToken, TokenSource};

/// Shared handle to the API server. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct Connection {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    base_url: Url,
    client: Client,
    tokens: Option<Arc<dyn TokenSource>>,
    retry_limit: u32,
    retry_interval: Duration,
    retry_interval_max: Duration,
}

enum Attempt {
    Done(RawResponse),
    Retry(OcmError),
    Fail(OcmError),
}

impl Connection {
    /// Creates a connection, picking credentials in this order: access token,
    /// refresh token, client credentials. Without any of them requests are anonymous.
    pub fn new(options: ConnectionOptions) -> Result<Self, OcmError> {
        Self::build(options, None)
    }

    /// Creates a connection that authenticates with the given token source instead of
    /// the credentials in `options`.
    pub fn with_token_source(
        options: ConnectionOptions,
        tokens: Arc<dyn TokenSource>,
    ) -> Result<Self, OcmError> {
        Self::build(options, Some(tokens))
    }

    fn build(
        options: ConnectionOptions,
        tokens: Option<Arc<dyn TokenSource>>,
    ) -> Result<Self, OcmError> {
        let base_url = parse_http_url(&options.url)?;

        let client = ClientBuilder::new()
            .default_headers(options.headers.clone())
            .user_agent(options.user_agent.clone())
            .connect_timeout(options.connect_timeout)
            .timeout(options.timeout)
            .build()
            .map_err(|e| OcmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let tokens = match tokens {
            Some(tokens) => Some(tokens),
            None => Self::token_source(&options, &client)?,
        };

        Ok(Self {
            inner: Arc::new(Inner {
                base_url,
                client,
                tokens,
                retry_limit: options.retry_limit,
                retry_interval: options.retry_interval,
                retry_interval_max: options.retry_interval_max,
            }),
        })
    }

    fn token_source(
        options: &ConnectionOptions,
        client: &Client,
    ) -> Result<Option<Arc<dyn TokenSource>>, OcmError> {
        if options.client_secret.is_some() && options.client_id.is_none() {
            return Err(OcmError::Config(
                "Client secret requires a client identifier".to_string(),
            ));
        }

        if let Some(token) = &options.access_token {
            debug!("Using static access token");
            return Ok(Some(Arc::new(StaticToken::new(token.clone()))));
        }

        let grant = match (
            &options.refresh_token,
            &options.client_id,
            &options.client_secret,
        ) {
            (Some(refresh_token), client_id, _) => Grant::RefreshToken {
                client_id: client_id
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CLIENT_ID.to_string()),
                refresh_token: refresh_token.clone(),
            },
            (None, Some(client_id), Some(client_secret)) => Grant::ClientCredentials {
                client_id: client_id.clone(),
                client_secret: client_secret.clone(),
            },
            _ => {
                debug!("No credentials configured, requests will be anonymous");
                return Ok(None);
            }
        };

        let token_url = parse_http_url(&options.token_url)?;
        Ok(Some(Arc::new(OAuthTokenSource::new(
            client.clone(),
            token_url,
            grant,
        ))))
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    fn url_for(&self, request: &Request) -> Result<Url, OcmError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                OcmError::Config(format!("'{}' can't be a base URL", self.inner.base_url))
            })?
            .pop_if_empty()
            .extend(request.path.segments());
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    /// Sends the request, retrying transient failures. Any non-2xx answer left after
    /// retrying is returned as [`OcmError::Api`].
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn send(&self, request: Request) -> Result<RawResponse, OcmError> {
        let url = self.url_for(&request)?;
        let mut attempt = 0;
        let mut reauthenticated = false;

        loop {
            match self.attempt(&request, &url).await? {
                Attempt::Done(response) => return Ok(response),
                Attempt::Fail(OcmError::Api(e))
                    if e.status == StatusCode::UNAUTHORIZED
                        && !reauthenticated
                        && self.inner.tokens.is_some() =>
                {
                    debug!("Server rejected the token, requesting a new one");
                    reauthenticated = true;
                    if let Some(tokens) = &self.inner.tokens {
                        tokens.invalidate().await;
                    }
                }
                Attempt::Fail(e) => return Err(e),
                Attempt::Retry(e) => {
                    if attempt >= self.inner.retry_limit {
                        error!(attempts = attempt + 1, error = %e, "Giving up");
                        return Err(e);
                    }
                    attempt += 1;
                    let delay = retry_delay(
                        self.inner.retry_interval,
                        self.inner.retry_interval_max,
                        attempt,
                    );
                    warn!(attempt, ?delay, error = %e, "Retrying request");
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn attempt(&self, request: &Request, url: &Url) -> Result<Attempt, OcmError> {
        let mut builder = self
            .inner
            .client
            .request(request.method.clone(), url.clone())
            .headers(request.headers.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(tokens) = &self.inner.tokens {
            if let Some(token) = tokens.token().await? {
                builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
            }
        }

        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body.clone());
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                return Ok(Attempt::Retry(OcmError::Connection(e.to_string())));
            }
            Err(e) => {
                error!(error = %e, "Failed to send request");
                return Ok(Attempt::Fail(OcmError::Connection(e.to_string())));
            }
        };

        let status = response.status();
        let headers = response.headers().clone();
        debug!(status = status.as_u16(), "Received response");

        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "Failed to read response body");
            OcmError::Connection(e.to_string())
        })?;

        if status.is_success() {
            return Ok(Attempt::Done(RawResponse {
                status,
                headers,
                body: body.to_vec(),
            }));
        }

        let error = OcmError::Api(ApiError::from_body(status, &body));
        if is_transient(status) {
            return Ok(Attempt::Retry(error));
        }
        Ok(Attempt::Fail(error))
    }
}

fn is_transient(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

/// Delay before retry number `attempt` (starting at 1): the interval doubled for
/// every previous retry, never more than `max`.
fn retry_delay(interval: Duration, max: Duration, attempt: u32) -> Duration {
    let factor = 2u32
        .checked_pow(attempt.saturating_sub(1))
        .unwrap_or(u32::MAX);
    interval.checked_mul(factor).unwrap_or(max).min(max)
}

fn parse_http_url(value: &str) -> Result<Url, OcmError> {
    let url = Url::parse(value)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(OcmError::Config(format!(
            "Invalid URL scheme '{}'. Only http and https are supported",
            url.scheme()
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ResourcePath;
    use reqwest::Method;

    fn options(url: &str) -> ConnectionOptions {
        ConnectionOptions::default().anonymous().with_url(url)
    }

    #[test]
    fn test_rejects_unsupported_scheme() {
        let err = Connection::new(options("ftp://example.com")).unwrap_err();
        assert!(err.to_string().contains("Invalid URL scheme 'ftp'"));
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let err = Connection::new(options("not a url")).unwrap_err();
        assert!(matches!(err, OcmError::Config(_)));
    }

    #[test]
    fn test_rejects_secret_without_client_id() {
        let mut opts = options("https://api.openshift.com");
        opts.client_secret = Some("secret".to_string());
        let err = Connection::new(opts).unwrap_err();
        assert!(err.to_string().contains("requires a client identifier"));
    }

    #[test]
    fn test_url_for_encodes_segments_and_query() {
        let connection = Connection::new(options("https://api.openshift.com/")).unwrap();
        let mut request = Request::new(
            Method::GET,
            ResourcePath::new(["api", "clusters_mgmt", "v1", "clusters", "a b/c"]),
        );
        request.set_parameter("search", "name = 'x'");

        let url = connection.url_for(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.openshift.com/api/clusters_mgmt/v1/clusters/a%20b%2Fc?search=name+%3D+%27x%27"
        );
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let connection = Connection::new(options("http://localhost:8000/gateway")).unwrap();
        let request = Request::new(Method::GET, ResourcePath::new(["api", "clusters_mgmt"]));
        assert_eq!(
            connection.url_for(&request).unwrap().as_str(),
            "http://localhost:8000/gateway/api/clusters_mgmt"
        );
    }

    #[test]
    fn test_retry_delay_doubles_up_to_max() {
        let interval = Duration::from_millis(100);
        let max = Duration::from_millis(400);
        assert_eq!(retry_delay(interval, max, 1), Duration::from_millis(100));
        assert_eq!(retry_delay(interval, max, 2), Duration::from_millis(200));
        assert_eq!(retry_delay(interval, max, 3), Duration::from_millis(400));
        assert_eq!(retry_delay(interval, max, 4), Duration::from_millis(400));
    }

    #[test]
    fn test_retry_delay_does_not_overflow() {
        let max = Duration::from_secs(30);
        assert_eq!(retry_delay(Duration::MAX, max, 2), max);
        assert_eq!(retry_delay(Duration::from_secs(1), max, 100), max);
    }

    #[test]
    fn test_transient_statuses() {
        assert!(is_transient(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_transient(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_transient(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!is_transient(StatusCode::NOT_FOUND));
    }
}
