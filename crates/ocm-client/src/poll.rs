//! # Polling
//!
//! Repeats a GET until the answer has one of the expected statuses and every
//! predicate holds, or until a deadline passes.
//!
//! Error answers from the server don't stop the loop: they are seen as a response
//! with that status and no body, which is how callers wait for an object to be gone:
//!
//! ```rust,no_run
//! # use ocm_client::{Connection, GetRequest, ResourcePath};
//! # use std::time::Duration;
//! # async fn wait(connection: Connection) -> Result<(), ocm_client::OcmError> {
//! let path = ResourcePath::new(["api", "clusters_mgmt", "v1", "clusters", "123"]);
//! GetRequest::<serde_json::Value>::new(connection, path)
//!     .poll()
//!     .status(404)
//!     .interval(Duration::from_secs(10))
//!     .start(Duration::from_secs(600))
//!     .await?;
//! # Ok(())
//! # }
//! ```

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument, warn};

use crate::error::OcmError;
use crate::resource::{GetRequest, Response};

const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

type Predicate<T> = Box<dyn Fn(&Response<T>) -> bool + Send + Sync>;

pub struct PollRequest<T> {
    request: GetRequest<T>,
    interval: Duration,
    statuses: Vec<StatusCode>,
    predicates: Vec<Predicate<T>>,
}

impl<T> std::fmt::Debug for PollRequest<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PollRequest")
            .field("interval", &self.interval)
            .field("statuses", &self.statuses)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}

impl<T: DeserializeOwned> PollRequest<T> {
    pub fn new(request: GetRequest<T>) -> Self {
        Self {
            request,
            interval: DEFAULT_INTERVAL,
            statuses: Vec::new(),
            predicates: Vec::new(),
        }
    }

    /// Time to wait between two attempts.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Adds an accepted status. When none is given only `200` is accepted.
    pub fn status(mut self, status: u16) -> Self {
        match StatusCode::from_u16(status) {
            Ok(status) => self.statuses.push(status),
            Err(_) => warn!(status, "Ignoring invalid status code"),
        }
        self
    }

    /// Adds a condition the response must satisfy. All predicates must hold.
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Response<T>) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    fn accepts(&self, response: &Response<T>) -> bool {
        let status_ok = if self.statuses.is_empty() {
            response.status == StatusCode::OK
        } else {
            self.statuses.contains(&response.status)
        };
        status_ok && self.predicates.iter().all(|p| p(response))
    }

    async fn attempt(&self) -> Result<Response<T>, OcmError> {
        match self.request.send().await {
            Ok(response) => Ok(response),
            Err(OcmError::Api(e)) => Ok(Response {
                status: e.status,
                headers: Default::default(),
                body: None,
            }),
            Err(e) => Err(e),
        }
    }

    /// Polls until the condition holds or `timeout` elapses.
    /// A timeout too large to be represented as an instant means no deadline.
    #[instrument(skip(self), fields(interval = ?self.interval))]
    pub async fn start(self, timeout: Duration) -> Result<Response<T>, OcmError> {
        if self.interval.is_zero() {
            return Err(OcmError::Config(
                "Poll interval must be greater than zero".to_string(),
            ));
        }

        let deadline = Instant::now().checked_add(timeout);
        let mut attempts = 0u32;
        loop {
            attempts = attempts.saturating_add(1);
            let response = self.attempt().await?;
            if self.accepts(&response) {
                debug!(attempts, status = response.status.as_u16(), "Poll condition met");
                return Ok(response);
            }
            debug!(attempts, status = response.status.as_u16(), "Poll condition not met");

            let next_in_time = match (deadline, Instant::now().checked_add(self.interval)) {
                (None, _) => true,
                (Some(deadline), Some(next)) => next <= deadline,
                (Some(_), None) => false,
            };
            if !next_in_time {
                return Err(OcmError::PollTimeout(format!(
                    "condition not met after {attempts} attempts in {}s, last status {}",
                    timeout.as_secs(),
                    response.status.as_u16()
                )));
            }
            tokio::time::sleep(self.interval).await;
        }
    }
}
