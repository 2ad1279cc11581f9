//! HelloSign API client.
//!
//! The main entry point. A [`Client`] owns a pooled HTTP transport, the
//! API base URL and an optional [`RequestSigner`]; it is cheap to clone and
//! safe to share between tasks.

use crate::auth::{ApiKeySigner, BearerTokenSigner, RequestSigner};
use crate::embedded::EmbeddedClient;
use crate::error::{HelloSignError, Result};
use crate::signature_request::SignatureRequestClient;
use reqwest::header::{self, HeaderValue};
use reqwest::{Client as HttpClient, Method, Request, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.hellosign.com/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Upper bound on how much of an error body is kept for diagnostics.
pub const ERROR_BODY_LIMIT: usize = 4096;

/// HelloSign API client.
///
/// # Example
///
/// ```rust,no_run
/// use hellosign::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::with_api_key("your-api-key")?;
///
///     let resp = client.embedded().get_sign_url("50e3542f738adfa7ddd4cbd4c00d2a8ab6e4194b").await?;
///     println!("Sign here: {:?}", resp.embedded.sign_url);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) http: HttpClient,
    pub(crate) base_url: Url,
    pub(crate) signer: Option<Arc<dyn RequestSigner>>,
}

impl Client {
    /// Start configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client authenticating with an API key and default settings.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client authenticating with an OAuth access token and default settings.
    pub fn with_access_token(token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(token).build()
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Returns true if requests will carry credentials.
    pub fn is_authenticated(&self) -> bool {
        self.signer.is_some()
    }

    /// Get the client for signature request operations.
    pub fn signature_requests(&self) -> SignatureRequestClient {
        SignatureRequestClient::new(self.clone())
    }

    /// Get the client for embedded signing operations.
    pub fn embedded(&self) -> EmbeddedClient {
        EmbeddedClient::new(self.clone())
    }

    /// Builds an endpoint URL by appending path segments to the base URL.
    ///
    /// Each segment is percent-escaped, so ids may contain any character
    /// except the dot segments `.` and `..`, which are refused.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(HelloSignError::InvalidPathSegment((*dot).to_string()));
        }

        let mut url = self.base_url.clone();
        // build() rejects bases that cannot take path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Builds a signed request with no body.
    pub(crate) fn new_request(&self, method: Method, url: Url) -> Result<Request> {
        self.finish_request(Request::new(method, url))
    }

    /// Builds a signed request with a JSON body.
    pub(crate) fn new_json_request<B>(&self, method: Method, url: Url, body: &B) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_vec(body).map_err(HelloSignError::Encode)?;

        let mut request = Request::new(method, url);
        request.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        *request.body_mut() = Some(json.into());
        self.finish_request(request)
    }

    fn finish_request(&self, mut request: Request) -> Result<Request> {
        if let Some(signer) = &self.signer {
            signer.sign(&mut request)?;
        }
        Ok(request)
    }

    /// Sends a request and returns the raw response body.
    pub(crate) async fn send_bytes(&self, request: Request) -> Result<Vec<u8>> {
        let response = self.execute(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Sends a request and decodes the JSON response body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.execute(request).await?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(HelloSignError::Decode)
    }

    async fn execute(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(status = %status, "received response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(api_error(response).await)
        }
    }
}

/// Reads at most [`ERROR_BODY_LIMIT`] bytes of a failed response.
///
/// If the body cannot be read to the end, whatever arrived is kept and the
/// status is still reported.
async fn api_error(mut response: Response) -> HelloSignError {
    let status = response.status();
    let mut body = Vec::new();

    while body.len() < ERROR_BODY_LIMIT {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let take = chunk.len().min(ERROR_BODY_LIMIT - body.len());
                body.extend_from_slice(&chunk[..take]);
            }
            Ok(None) => break,
            Err(e) => {
                debug!(%status, error = %e, "error body read failed");
                break;
            }
        }
    }

    HelloSignError::Api {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.signer.is_some())
            .finish()
    }
}

/// Configuration for a [`Client`].
///
/// Every setter overwrites the previous value for the same setting, so the
/// last of [`api_key`](Self::api_key), [`access_token`](Self::access_token)
/// and [`signer`](Self::signer) wins.
///
/// # Example
///
/// ```rust,no_run
/// use hellosign::Client;
/// use std::time::Duration;
///
/// let client = Client::builder()
///     .access_token("oauth-access-token")
///     .base_url("https://api.hellosign.com/v3")
///     .timeout(Duration::from_secs(60))
///     .build()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    http: Option<HttpClient>,
    base_url: Option<String>,
    signer: Option<Arc<dyn RequestSigner>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Use `http` as the transport instead of building one.
    ///
    /// `timeout` and `user_agent` are ignored when a transport is supplied.
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Authenticate with an account API key (HTTP Basic).
    pub fn api_key(self, api_key: impl Into<String>) -> Self {
        self.signer(ApiKeySigner::new(api_key))
    }

    /// Authenticate with an OAuth access token (Bearer).
    pub fn access_token(self, token: impl Into<String>) -> Self {
        self.signer(BearerTokenSigner::new(token))
    }

    /// Authenticate with a custom strategy.
    pub fn signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    /// Send requests to `base_url` instead of [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Request timeout for the default transport (default: 30 seconds).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User-Agent for the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration and create the client.
    pub fn build(self) -> Result<Client> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let base_url = Url::parse(raw)?;
        if base_url.cannot_be_a_base() {
            return Err(HelloSignError::InvalidBaseUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }

        let http = match self.http {
            Some(http) => http,
            None => {
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| format!("hellosign-rust/{}", env!("CARGO_PKG_VERSION")));
                HttpClient::builder()
                    .timeout(timeout)
                    .user_agent(user_agent)
                    .build()?
            }
        };

        Ok(Client {
            http,
            base_url,
            signer: self.signer,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("custom_http", &self.http.is_some())
            .field("signer", &self.signer.is_some())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
