//! # Typed Requests
//!
//! Request builders shared by every resource of the API. A resource client only
//! knows its [`ResourcePath`] and the model type it exchanges; these builders add
//! query parameters, headers and the JSON body, send the request through a
//! [`Connection`] and decode the answer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ocm_client::{Connection, ConnectionOptions, ListRequest, ResourcePath};
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() {
//!     let connection = Connection::new(ConnectionOptions::default()).unwrap();
//!     let path = ResourcePath::new(["api", "clusters_mgmt", "v1", "clusters"]);
//!     let response = ListRequest::<Value>::new(connection, path)
//!         .search("state = 'ready'")
//!         .size(10)
//!         .send()
//!         .await
//!         .unwrap();
//!     println!("{} of {} clusters", response.size, response.total);
//! }
//! ```

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use tracing::{debug, instrument};

use crate::connection::Connection;
use crate::error::OcmError;
use crate::poll::PollRequest;
use crate::request::{RawResponse, Request, ResourcePath};

/// Answer to a single-object request.
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `None` when the server sent no body.
    pub body: Option<T>,
}

impl<T> Response<T> {
    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    pub fn into_body(self) -> Option<T> {
        self.body
    }
}

impl<T: DeserializeOwned> Response<T> {
    fn from_raw(raw: RawResponse) -> Result<Self, OcmError> {
        let body = raw.decode()?;
        Ok(Self {
            status: raw.status,
            headers: raw.headers,
            body,
        })
    }
}

/// Answer to a list request, one page of items.
#[derive(Debug, Clone)]
pub struct ListResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub page: u32,
    pub size: u32,
    pub total: u32,
    pub items: Vec<T>,
}

#[derive(serde::Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct ListBody<T> {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    total: u32,
    #[serde(default)]
    items: Vec<T>,
}

// Derived `Clone` would require `T: Clone`, which the marker type never needs.
macro_rules! impl_clone {
    ($($name:ident),*) => {
        $(
            impl<T> Clone for $name<T> {
                fn clone(&self) -> Self {
                    Self {
                        connection: self.connection.clone(),
                        request: self.request.clone(),
                        _type: PhantomData,
                    }
                }
            }
        )*
    };
}

impl_clone!(GetRequest, ListRequest, AddRequest, UpdateRequest);

fn encode_body<B: Serialize>(body: &B) -> Result<Vec<u8>, OcmError> {
    serde_json::to_vec(body).map_err(|e| OcmError::Decode(format!("Failed to encode body: {e}")))
}

#[derive(Debug)]
pub struct GetRequest<T> {
    connection: Connection,
    request: Request,
    _type: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> GetRequest<T> {
    pub fn new(connection: Connection, path: ResourcePath) -> Self {
        Self {
            connection,
            request: Request::new(Method::GET, path),
            _type: PhantomData,
        }
    }

    pub fn parameter(mut self, name: &str, value: impl ToString) -> Self {
        self.request.set_parameter(name, value);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.set_header(name, value);
        self
    }

    #[instrument(skip(self), fields(path = %self.request.path))]
    pub async fn send(&self) -> Result<Response<T>, OcmError> {
        let raw = self.connection.send(self.request.clone()).await?;
        Response::from_raw(raw)
    }

    /// Turns this request into one that is repeated until a condition holds.
    pub fn poll(self) -> PollRequest<T> {
        PollRequest::new(self)
    }
}

#[derive(Debug)]
pub struct ListRequest<T> {
    connection: Connection,
    request: Request,
    _type: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> ListRequest<T> {
    pub fn new(connection: Connection, path: ResourcePath) -> Self {
        Self {
            connection,
            request: Request::new(Method::GET, path),
            _type: PhantomData,
        }
    }

    /// Filter in the SQL-like search language of the API, e.g. `name like 'my%'`.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.request.set_parameter("search", query.into());
        self
    }

    /// Ordering, e.g. `creation_timestamp desc`.
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.request.set_parameter("order", order.into());
        self
    }

    /// Index of the requested page, starting at 1.
    pub fn page(mut self, page: u32) -> Self {
        self.request.set_parameter("page", page);
        self
    }

    /// Maximum number of items per page.
    pub fn size(mut self, size: u32) -> Self {
        self.request.set_parameter("size", size);
        self
    }

    pub fn parameter(mut self, name: &str, value: impl ToString) -> Self {
        self.request.set_parameter(name, value);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.set_header(name, value);
        self
    }

    #[instrument(skip(self), fields(path = %self.request.path))]
    pub async fn send(&self) -> Result<ListResponse<T>, OcmError> {
        let raw = self.connection.send(self.request.clone()).await?;
        let body: Option<ListBody<T>> = raw.decode()?;
        let response = match body {
            Some(body) => ListResponse {
                status: raw.status,
                headers: raw.headers,
                page: body.page,
                size: body.size.unwrap_or(body.items.len() as u32),
                total: body.total,
                items: body.items,
            },
            None => ListResponse {
                status: raw.status,
                headers: raw.headers,
                page: 0,
                size: 0,
                total: 0,
                items: Vec::new(),
            },
        };
        debug!(
            page = response.page,
            size = response.size,
            total = response.total,
            "Received page"
        );
        Ok(response)
    }

    /// Fetches every page, starting at page 1, until a page comes back with fewer
    /// than `page_size` items.
    pub async fn send_all(&self, page_size: u32) -> Result<Vec<T>, OcmError> {
        if page_size == 0 {
            return Err(OcmError::Config(
                "Page size must be greater than zero".to_string(),
            ));
        }

        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let response = self.clone().page(page).size(page_size).send().await?;
            let received = response.items.len() as u32;
            items.extend(response.items);
            if received < page_size {
                break;
            }
            page += 1;
        }
        Ok(items)
    }
}

/// POST of a new object; the server answers with the created object.
#[derive(Debug)]
pub struct AddRequest<T> {
    connection: Connection,
    request: Request,
    _type: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> AddRequest<T> {
    pub fn new(connection: Connection, path: ResourcePath) -> Self {
        Self {
            connection,
            request: Request::new(Method::POST, path),
            _type: PhantomData,
        }
    }

    pub fn body(mut self, body: impl Into<T>) -> Result<Self, OcmError> {
        self.request.body = Some(encode_body(&body.into())?);
        Ok(self)
    }

    pub fn parameter(mut self, name: &str, value: impl ToString) -> Self {
        self.request.set_parameter(name, value);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.set_header(name, value);
        self
    }

    #[instrument(skip(self), fields(path = %self.request.path))]
    pub async fn send(&self) -> Result<Response<T>, OcmError> {
        let raw = self.connection.send(self.request.clone()).await?;
        Response::from_raw(raw)
    }
}

/// PATCH of an existing object with the attributes that are set in the body.
#[derive(Debug)]
pub struct UpdateRequest<T> {
    connection: Connection,
    request: Request,
    _type: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> UpdateRequest<T> {
    pub fn new(connection: Connection, path: ResourcePath) -> Self {
        Self {
            connection,
            request: Request::new(Method::PATCH, path),
            _type: PhantomData,
        }
    }

    pub fn body(mut self, body: impl Into<T>) -> Result<Self, OcmError> {
        self.request.body = Some(encode_body(&body.into())?);
        Ok(self)
    }

    pub fn parameter(mut self, name: &str, value: impl ToString) -> Self {
        self.request.set_parameter(name, value);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.set_header(name, value);
        self
    }

    #[instrument(skip(self), fields(path = %self.request.path))]
    pub async fn send(&self) -> Result<Response<T>, OcmError> {
        let raw = self.connection.send(self.request.clone()).await?;
        Response::from_raw(raw)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteRequest {
    connection: Connection,
    request: Request,
}

impl DeleteRequest {
    pub fn new(connection: Connection, path: ResourcePath) -> Self {
        Self {
            connection,
            request: Request::new(Method::DELETE, path),
        }
    }

    pub fn parameter(mut self, name: &str, value: impl ToString) -> Self {
        self.request.set_parameter(name, value);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.set_header(name, value);
        self
    }

    #[instrument(skip(self), fields(path = %self.request.path))]
    pub async fn send(&self) -> Result<Response<()>, OcmError> {
        let raw = self.connection.send(self.request.clone()).await?;
        Ok(Response {
            status: raw.status,
            headers: raw.headers,
            body: None,
        })
    }
}

/// POST without a body that triggers a server side action, e.g. hibernation.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    connection: Connection,
    request: Request,
}

impl ActionRequest {
    pub fn new(connection: Connection, path: ResourcePath) -> Self {
        Self {
            connection,
            request: Request::new(Method::POST, path),
        }
    }

    pub fn parameter(mut self, name: &str, value: impl ToString) -> Self {
        self.request.set_parameter(name, value);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.set_header(name, value);
        self
    }

    #[instrument(skip(self), fields(path = %self.request.path))]
    pub async fn send(&self) -> Result<Response<()>, OcmError> {
        let raw = self.connection.send(self.request.clone()).await?;
        Ok(Response {
            status: raw.status,
            headers: raw.headers,
            body: None,
        })
    }
}
