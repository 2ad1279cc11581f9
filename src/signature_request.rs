//! Signature request operations.
//!
//! This module provides the SignatureRequestClient for creating embedded
//! signature requests from templates and downloading their documents.

use crate::client::Client;
use crate::error::Result;
use crate::types::{CreateEmbeddedWithTemplateRequest, SignatureRequestGetResponse};
use reqwest::Method;

/// Client for signature request operations.
///
/// Access via `client.signature_requests()`.
pub struct SignatureRequestClient {
    client: Client,
}

impl SignatureRequestClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Download the current documents of a signature request.
    ///
    /// `file_type` is `"pdf"` for a single merged document or `"zip"` for the
    /// individual documents; an empty string leaves the choice to the API.
    /// The bytes are returned as-is.
    ///
    /// While the files are still being prepared the API answers `409`, which
    /// surfaces as an API error; check it with
    /// [`HelloSignError::is_conflict`](crate::HelloSignError::is_conflict).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hellosign::{Client, types::FileType};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::with_api_key("your-api-key")?;
    ///
    ///     match client
    ///         .signature_requests()
    ///         .download_files("fa5c8a0b0f492d768749333ad6fcc214c111e967", FileType::Pdf)
    ///         .await
    ///     {
    ///         Ok(pdf) => std::fs::write("signed.pdf", pdf)?,
    ///         Err(e) if e.is_conflict() => println!("files not ready yet"),
    ///         Err(e) => return Err(e.into()),
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn download_files(
        &self,
        signature_request_id: &str,
        file_type: impl AsRef<str>,
    ) -> Result<Vec<u8>> {
        let mut url = self
            .client
            .endpoint(&["signature_request", "files", signature_request_id])?;
        let file_type = file_type.as_ref();
        if !file_type.is_empty() {
            url.query_pairs_mut().append_pair("file_type", file_type);
        }

        let request = self.client.new_request(Method::GET, url)?;
        self.client.send_bytes(request).await
    }

    /// Create a signature request from templates, to be signed in an embedded iFrame.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use hellosign::Client;
    /// use hellosign::types::{CreateEmbeddedWithTemplateRequest, SubSignatureRequestTemplateSigner};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = Client::with_api_key("your-api-key")?;
    ///
    ///     let resp = client
    ///         .signature_requests()
    ///         .create_embedded_with_template(
    ///             CreateEmbeddedWithTemplateRequest::new("your-client-id")
    ///                 .template_id("c26b8a16784a872da37ea946b9ddec7c1e11dff6")
    ///                 .signer(SubSignatureRequestTemplateSigner::new(
    ///                     "Client",
    ///                     "George",
    ///                     "george@example.com",
    ///                 ))
    ///                 .test_mode(true),
    ///         )
    ///         .await?;
    ///
    ///     println!("Created {:?}", resp.signature_request.signature_request_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn create_embedded_with_template(
        &self,
        request: CreateEmbeddedWithTemplateRequest,
    ) -> Result<SignatureRequestGetResponse> {
        let url = self
            .client
            .endpoint(&["signature_request", "create_embedded_with_template"])?;
        let request = self.client.new_json_request(Method::POST, url, &request)?;
        self.client.send_json(request).await
    }
}
