//! Error types for the HelloSign client.
//!
//! Every operation returns a single [`HelloSignError`]. The variant tells the
//! caller where the call failed: building the request locally, signing it,
//! reaching the server, the server rejecting it, or decoding the reply.

use crate::auth::SignError;
use crate::types::ErrorResponse;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type for HelloSign operations.
pub type Result<T> = std::result::Result<T, HelloSignError>;

/// Errors that can occur when using the HelloSign client.
#[derive(Error, Debug)]
pub enum HelloSignError {
    /// The request body could not be encoded as JSON. No request was sent.
    #[error("marshalling body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The configured signer could not attach credentials. No request was sent.
    #[error("signing request: {0}")]
    Signing(#[from] SignError),

    /// Connection, DNS, TLS, timeout, or body transfer failure.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a status outside `200..=299`.
    ///
    /// `body` holds at most the first 4096 bytes of the response, decoded
    /// lossily as UTF-8.
    #[error("request returned {status}: {body}")]
    Api {
        /// HTTP status of the response.
        status: StatusCode,
        /// Diagnostic prefix of the response body.
        body: String,
    },

    /// A successful response body did not match the expected shape.
    #[error("decoding response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// An id cannot be used as a path segment. `.` and `..` would be
    /// resolved as relative paths, so they are refused. No request was sent.
    #[error("invalid path segment: {0:?}")]
    InvalidPathSegment(String),
}

impl HelloSignError {
    /// Returns the HTTP status code if the API rejected the request.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HelloSignError::Api { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }

    /// Returns true if the API answered `409 Conflict`.
    ///
    /// The files endpoint uses this status while documents are still being
    /// prepared.
    pub fn is_conflict(&self) -> bool {
        matches!(self, HelloSignError::Api { status, .. } if *status == StatusCode::CONFLICT)
    }

    /// Returns true for transport-level failures.
    pub fn is_network(&self) -> bool {
        matches!(self, HelloSignError::Http(_))
    }

    /// Returns true if the request hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, HelloSignError::Http(e) if e.is_timeout())
    }

    /// Best-effort parse of an API error body into the documented envelope.
    ///
    /// Returns `None` for non-API errors, or when the body is not JSON or was
    /// truncated.
    pub fn error_response(&self) -> Option<ErrorResponse> {
        match self {
            HelloSignError::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}
