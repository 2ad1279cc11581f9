//! Embedded signing walkthrough.
//!
//! This example demonstrates:
//! - Creating a client
//! - Creating an embedded signature request from a template
//! - Fetching a sign URL for the first signer
//! - Downloading the documents once they are ready
//!
//! Run with:
//! ```bash
//! HELLOSIGN_API_KEY=... HELLOSIGN_CLIENT_ID=... HELLOSIGN_TEMPLATE_ID=... \
//!     SIGNER_EMAIL=you@example.com cargo run --example embedded_signing
//! ```

use hellosign::types::{CreateEmbeddedWithTemplateRequest, FileType, SubSignatureRequestTemplateSigner};
use hellosign::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hellosign=debug")))
        .init();

    let api_key = std::env::var("HELLOSIGN_API_KEY")?;
    let client_id = std::env::var("HELLOSIGN_CLIENT_ID")?;
    let template_id = std::env::var("HELLOSIGN_TEMPLATE_ID")?;
    let signer_email = std::env::var("SIGNER_EMAIL")?;
    let signer_role = std::env::var("SIGNER_ROLE").unwrap_or_else(|_| "Client".to_string());

    println!("Creating HelloSign client...");
    let client = Client::with_api_key(api_key)?;

    println!("\nCreating embedded signature request...");
    let created = client
        .signature_requests()
        .create_embedded_with_template(
            CreateEmbeddedWithTemplateRequest::new(client_id)
                .template_id(template_id)
                .signer(SubSignatureRequestTemplateSigner::new(
                    signer_role,
                    "Example Signer",
                    &signer_email,
                ))
                .title("Embedded signing example")
                .test_mode(true),
        )
        .await?;

    let request = &created.signature_request;
    let request_id = request.signature_request_id.clone().ok_or("no signature_request_id")?;
    println!("Created signature request:");
    println!("  ID:         {}", request_id);
    if let Some(created_at) = request.created_at {
        println!("  Created at: {}", created_at.to_local());
    }
    for warning in created.warnings.iter().flatten() {
        println!("  Warning:    {} ({})", warning.warning_msg, warning.warning_name);
    }

    let signature_id = request
        .signature_for(&signer_email)
        .and_then(|s| s.signature_id.clone())
        .ok_or("signer not found in response")?;

    println!("\nFetching sign URL...");
    let sign_url = client.embedded().get_sign_url(&signature_id).await?;
    println!("  URL:     {}", sign_url.embedded.sign_url.unwrap_or_default());
    if let Some(expires_at) = sign_url.embedded.expires_at {
        println!("  Expires: {}", expires_at.to_local());
    }

    println!("\nDownloading documents...");
    match client
        .signature_requests()
        .download_files(&request_id, FileType::Pdf)
        .await
    {
        Ok(pdf) => println!("Downloaded {} bytes of PDF", pdf.len()),
        Err(e) if e.is_conflict() => println!("Files are still being prepared, try again later."),
        Err(e) => return Err(e.into()),
    }

    println!("\nDone!");
    Ok(())
}
