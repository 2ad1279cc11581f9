//! # HelloSign Rust client
//!
//! Typed client for the HelloSign (Dropbox Sign) embedded signing API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hellosign::Client;
//! use hellosign::types::{CreateEmbeddedWithTemplateRequest, SubSignatureRequestTemplateSigner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client with your API key
//!     let client = Client::with_api_key("your-api-key")?;
//!
//!     // Create an embedded signature request from a template
//!     let created = client
//!         .signature_requests()
//!         .create_embedded_with_template(
//!             CreateEmbeddedWithTemplateRequest::new("your-client-id")
//!                 .template_id("c26b8a16784a872da37ea946b9ddec7c1e11dff6")
//!                 .signer(SubSignatureRequestTemplateSigner::new(
//!                     "Client",
//!                     "George",
//!                     "george@example.com",
//!                 )),
//!         )
//!         .await?;
//!
//!     // Fetch a sign URL for the first signer
//!     let signature_id = created
//!         .signature_request
//!         .signatures
//!         .as_ref()
//!         .and_then(|s| s.first())
//!         .and_then(|s| s.signature_id.clone())
//!         .ok_or("no signature")?;
//!     let sign_url = client.embedded().get_sign_url(&signature_id).await?;
//!     println!("Open in an iFrame: {:?}", sign_url.embedded.sign_url);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Either an account API key (HTTP Basic) or an OAuth access token (Bearer),
//! chosen on the [`ClientBuilder`]. Custom strategies implement
//! [`RequestSigner`].
//!
//! ## Error Handling
//!
//! All operations return `Result<T, HelloSignError>`:
//!
//! ```rust,no_run
//! use hellosign::{Client, HelloSignError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::with_api_key("your-api-key").unwrap();
//!
//!     match client.signature_requests().download_files("fa5c8a0b", "zip").await {
//!         Ok(zip) => println!("Downloaded {} bytes", zip.len()),
//!         Err(e) if e.is_conflict() => println!("Files not ready, try again later"),
//!         Err(HelloSignError::Api { status, body }) => println!("Rejected ({status}): {body}"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Nothing is retried; timeouts come from the transport (see
//! [`ClientBuilder::timeout`]) or from dropping the returned future.

pub mod auth;
pub mod client;
pub mod embedded;
pub mod error;
pub mod signature_request;
pub mod timestamp;
pub mod types;

// Re-export main types at the crate root
pub use auth::{ApiKeySigner, BearerTokenSigner, RequestSigner, SignError};
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::{HelloSignError, Result};
pub use timestamp::{NullableTimestamp, TimestampError, UnixTimestamp};

pub use types::{
    CreateEmbeddedWithTemplateRequest, EmbeddedSignUrlResponse, ErrorResponse,
    EventCallbackRequest, FileType, SignatureRequestGetResponse, SignatureRequestResponse,
    SubSignatureRequestTemplateSigner,
};
