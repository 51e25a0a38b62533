use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcmError {
    #[error("{0}")]
    Api(ApiError),
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Authentication error: {0}")]
    Authentication(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Ambiguous: {0}")]
    Ambiguous(String),
    #[error("Poll timeout: {0}")]
    PollTimeout(String),
}

impl OcmError {
    /// HTTP status of the server answer, if this error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            OcmError::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// True for a 404 answer and for lookups that matched nothing.
    pub fn is_not_found(&self) -> bool {
        match self {
            OcmError::Api(e) => e.status == StatusCode::NOT_FOUND,
            OcmError::NotFound(_) => true,
            _ => false,
        }
    }
}

/// Error document returned by the API together with a non-2xx status.
///
/// ```json
/// {
///   "kind": "Error",
///   "id": "404",
///   "href": "/api/clusters_mgmt/v1/errors/404",
///   "code": "CLUSTERS-MGMT-404",
///   "reason": "Cluster '123' not found",
///   "operation_id": "c0ffee"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: Option<String>,
    pub id: Option<String>,
    pub href: Option<String>,
    pub code: Option<String>,
    pub reason: Option<String>,
    pub operation_id: Option<String>,
    pub details: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ErrorBody {
    kind: Option<String>,
    id: Option<String>,
    href: Option<String>,
    code: Option<String>,
    reason: Option<String>,
    operation_id: Option<String>,
    details: Option<serde_json::Value>,
}

impl ApiError {
    /// Builds the error from a status and the raw response body. Bodies that aren't
    /// error documents end up verbatim in `reason`.
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(doc) => ApiError {
                status,
                kind: doc.kind,
                id: doc.id,
                href: doc.href,
                code: doc.code,
                reason: doc.reason,
                operation_id: doc.operation_id,
                details: doc.details,
            },
            Err(_) => {
                let text = String::from_utf8_lossy(body).trim().to_string();
                ApiError {
                    status,
                    kind: None,
                    id: None,
                    href: None,
                    code: None,
                    reason: if text.is_empty() { None } else { Some(text) },
                    operation_id: None,
                    details: None,
                }
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status is {}", self.status.as_u16())?;
        if let Some(id) = &self.id {
            write!(f, ", identifier is '{id}'")?;
        }
        if let Some(code) = &self.code {
            write!(f, ", code is '{code}'")?;
        }
        if let Some(operation_id) = &self.operation_id {
            write!(f, ", operation identifier is '{operation_id}'")?;
        }
        if let Some(reason) = &self.reason {
            write!(f, ": {reason}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for OcmError {
    fn from(error: ApiError) -> Self {
        OcmError::Api(error)
    }
}

impl From<reqwest::Error> for OcmError {
    fn from(error: reqwest::Error) -> Self {
        OcmError::Connection(error.to_string())
    }
}

impl From<serde_json::Error> for OcmError {
    fn from(error: serde_json::Error) -> Self {
        OcmError::Decode(error.to_string())
    }
}

impl From<url::ParseError> for OcmError {
    fn from(error: url::ParseError) -> Self {
        OcmError::Config(format!("Invalid URL: {}", error))
    }
}
