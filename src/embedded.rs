//! Embedded signing operations.

use crate::client::Client;
use crate::error::Result;
use crate::types::EmbeddedSignUrlResponse;
use reqwest::Method;

/// Client for embedded signing operations.
///
/// Access via `client.embedded()`.
pub struct EmbeddedClient {
    client: Client,
}

impl EmbeddedClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get a signature URL that can be opened in an iFrame.
    ///
    /// `signature_id` identifies one signer's signature, as listed in
    /// `signature_request.signatures`. The URL is short-lived; request a new
    /// one each time the iFrame is opened.
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
    ///     let resp = client
    ///         .embedded()
    ///         .get_sign_url("50e3542f738adfa7ddd4cbd4c00d2a8ab6e4194b")
    ///         .await?;
    ///     println!("{:?} (expires {:?})", resp.embedded.sign_url, resp.embedded.expires_at);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_sign_url(&self, signature_id: &str) -> Result<EmbeddedSignUrlResponse> {
        let url = self.client.endpoint(&["embedded", "sign_url", signature_id])?;
        let request = self.client.new_request(Method::POST, url)?;
        self.client.send_json(request).await
    }
}
