//! Request authentication strategies.
//!
//! A [`RequestSigner`] attaches credentials to a fully built request just
//! before it is sent. Two strategies ship with the crate: [`ApiKeySigner`]
//! for account API keys and [`BearerTokenSigner`] for OAuth access tokens.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::header::{self, HeaderValue};
use reqwest::Request;
use std::fmt;
use thiserror::Error;

/// Errors raised while attaching credentials to a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignError {
    /// No credential was available to sign with.
    #[error("missing credential")]
    MissingCredential,

    /// The credential cannot be carried in an HTTP header.
    #[error("credential is not a valid header value")]
    InvalidHeader,

    /// A custom signer refused the request.
    #[error("{0}")]
    Rejected(String),
}

/// Attaches authentication to an outgoing request.
///
/// Implementations must not perform network I/O; the client calls
/// `sign` after headers and body are attached and before the request is
/// handed to the transport.
pub trait RequestSigner: Send + Sync {
    /// Mutates `request` to carry credentials.
    fn sign(&self, request: &mut Request) -> Result<(), SignError>;
}

impl<F> RequestSigner for F
where
    F: Fn(&mut Request) -> Result<(), SignError> + Send + Sync,
{
    fn sign(&self, request: &mut Request) -> Result<(), SignError> {
        self(request)
    }
}

/// HTTP Basic authentication with the API key as username and a blank password.
///
/// Keys are listed on the API tab of the account settings page.
#[derive(Clone)]
pub struct ApiKeySigner {
    api_key: String,
}

impl ApiKeySigner {
    /// Create a signer for `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }
}

impl RequestSigner for ApiKeySigner {
    fn sign(&self, request: &mut Request) -> Result<(), SignError> {
        if self.api_key.is_empty() {
            return Err(SignError::MissingCredential);
        }
        let encoded = BASE64.encode(format!("{}:", self.api_key));
        let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|_| SignError::InvalidHeader)?;
        value.set_sensitive(true);
        request.headers_mut().insert(header::AUTHORIZATION, value);
        Ok(())
    }
}

impl fmt::Debug for ApiKeySigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeySigner")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Bearer authentication with an access token issued by the OAuth flow.
///
/// Lets an app call the API on behalf of the user that granted it access.
#[derive(Clone)]
pub struct BearerTokenSigner {
    token: String,
}

impl BearerTokenSigner {
    /// Create a signer for `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestSigner for BearerTokenSigner {
    fn sign(&self, request: &mut Request) -> Result<(), SignError> {
        if self.token.is_empty() {
            return Err(SignError::MissingCredential);
        }
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| SignError::InvalidHeader)?;
        value.set_sensitive(true);
        request.headers_mut().insert(header::AUTHORIZATION, value);
        Ok(())
    }
}

impl fmt::Debug for BearerTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenSigner")
            .field("token", &"<redacted>")
            .finish()
    }
}
