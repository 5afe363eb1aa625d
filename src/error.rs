//! Error types for the StatusGator API client.

use std::fmt;

use thiserror::Error;

/// Base error type for StatusGator operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The client was constructed without an API token.
    #[error("api token is required")]
    TokenRequired,

    /// The configured base URL could not be parsed.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// A required identifier was empty. Raised before any network I/O.
    #[error("{name} cannot be empty")]
    EmptyId { name: &'static str },

    /// An email selector was empty. Raised before any network I/O.
    #[error("email cannot be empty")]
    EmptyEmail,

    /// The response body exceeded the configured maximum size.
    #[error("response body exceeds maximum size")]
    ResponseTooLarge,

    /// The API rejected the token (HTTP 401).
    #[error("unauthorized: invalid or missing token: {0}")]
    Unauthorized(String),

    /// The token lacks permission for the operation (HTTP 403).
    #[error("forbidden: insufficient permissions: {0}")]
    Forbidden(String),

    /// Structured error response from the API (404 and other non-2xx).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Network, DNS, or timeout failure from the underlying transport.
    #[error("executing request: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body failed to decode as the expected payload.
    #[error("decoding {context} response: {source}")]
    Decode {
        context: &'static str,
        source: serde_json::Error,
    },

    /// A request body failed to serialize.
    #[error("encoding request body: {0}")]
    Encode(serde_json::Error),
}

impl Error {
    /// True if the error indicates a 404 response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(e) if e.status == 404)
    }

    /// True if the error indicates a 401 response.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Error::Unauthorized(_) => true,
            Error::Api(e) => e.status == 401,
            _ => false,
        }
    }

    /// True if the error indicates a 403 response.
    pub fn is_forbidden(&self) -> bool {
        match self {
            Error::Forbidden(_) => true,
            Error::Api(e) => e.status == 403,
            _ => false,
        }
    }
}

/// An error response from the StatusGator API.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiError {
    /// HTTP status code of the response.
    #[serde(skip)]
    pub status: u16,
    /// Error message from the response body.
    #[serde(default)]
    pub message: String,
    /// Optional list of sub-errors from the response body.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "statusgator: {} - {}", self.status, self.message)
        } else {
            write!(
                f,
                "statusgator: {} - {}: {:?}",
                self.status, self.message, self.errors
            )
        }
    }
}

impl std::error::Error for ApiError {}

/// Classify a non-2xx response into a typed error.
pub(crate) fn classify(status: u16, body: &[u8]) -> Error {
    let mut api_err: ApiError = serde_json::from_slice(body).unwrap_or_else(|_| ApiError {
        status: 0,
        message: String::from_utf8_lossy(body).into_owned(),
        errors: Vec::new(),
    });
    api_err.status = status;

    if api_err.message.is_empty() {
        api_err.message = "unknown error".to_string();
    }

    match status {
        401 => Error::Unauthorized(api_err.message),
        403 => Error::Forbidden(api_err.message),
        _ => Error::Api(api_err),
    }
}

/// Check that a caller-supplied identifier is non-empty.
pub(crate) fn validate_id(id: &str, name: &'static str) -> Result<(), Error> {
    if id.is_empty() {
        return Err(Error::EmptyId { name });
    }
    Ok(())
}
