//! # OCM Client
//!
//! Transport layer for the OpenShift Cluster Manager (OCM) REST API.
//!
//! This crate knows nothing about clusters: it owns the [`Connection`] (base URL,
//! credentials, retries), the typed request builders every resource client is made
//! of, polling and pagination. Model types and resource clients live in service
//! crates such as `ocm-clusters-mgmt`.
//!
//! ## Authentication
//!
//! Credentials are picked from [`ConnectionOptions`] in this order:
//!
//! 1. an access token, sent as-is
//! 2. a refresh (offline) token, exchanged at the token endpoint
//! 3. client credentials, exchanged at the token endpoint
//!
//! Without any of them requests are sent anonymously.
//!
//! ## Errors
//!
//! Every non-2xx answer left after retrying becomes [`OcmError::Api`] carrying the
//! decoded [`ApiError`]. A 2xx answer without a body is not an error, its
//! [`Response::body`] is `None`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ocm_client::{Connection, ConnectionOptions, GetRequest, ResourcePath};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ocm_client::OcmError> {
//!     let options = ConnectionOptions::default().with_refresh_token("offline-token");
//!     let connection = Connection::new(options)?;
//!     let path = ResourcePath::new(["api", "clusters_mgmt", "v1", "clusters", "123"]);
//!     let response = GetRequest::<serde_json::Value>::new(connection, path)
//!         .send()
//!         .await?;
//!     println!("{:?}", response.body());
//!     Ok(())
//! }
//! ```

mod connection;
mod error;
mod options;
mod poll;
mod request;
mod resource;
pub mod search;
mod token;

pub use connection::Connection;
pub use error::{ApiError, OcmError};
pub use options::{
    ConnectionOptions, DEFAULT_CLIENT_ID, DEFAULT_TOKEN_URL, DEFAULT_URL, DEFAULT_USER_AGENT,
};
pub use poll::PollRequest;
pub use request::{RawResponse, Request, ResourcePath};
pub use resource::{
    ActionRequest, AddRequest, DeleteRequest, GetRequest, ListRequest, ListResponse,
    Response, UpdateRequest,
};
pub use token::{Grant, OAuthTokenSource, StaticToken, TokenSource};
