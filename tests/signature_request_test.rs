//! Integration tests for signature request operations.

use chrono::{TimeZone, Utc};
use hellosign::types::{
    CreateEmbeddedWithTemplateRequest, FileType, SubSignatureRequestTemplateSigner,
};
use hellosign::{Client, HelloSignError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SIGNATURE_REQUEST_ID: &str = "ebaae602348695a4c712aa0f22614986d03caaaa";

fn client_for(mock_server: &MockServer) -> Client {
    Client::builder()
        .base_url(mock_server.uri())
        .api_key("test-api-key")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_download_files_pdf() {
    let mock_server = MockServer::start().await;
    let pdf = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".to_vec();

    Mock::given(method("GET"))
        .and(path(format!("/signature_request/files/{}", SIGNATURE_REQUEST_ID)))
        .and(query_param("file_type", "pdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/pdf")
                .set_body_bytes(pdf.clone()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client
        .signature_requests()
        .download_files(SIGNATURE_REQUEST_ID, FileType::Pdf)
        .await
        .unwrap();

    assert_eq!(bytes, pdf);
}

#[tokio::test]
async fn test_download_files_without_file_type_omits_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/signature_request/files/{}", SIGNATURE_REQUEST_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"PK\x03\x04".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client
        .signature_requests()
        .download_files(SIGNATURE_REQUEST_ID, "")
        .await
        .unwrap();
    assert_eq!(bytes, b"PK\x03\x04");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_download_files_escapes_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/signature_request/files/a%2Fb%20c"))
        .and(query_param("file_type", "zip"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"zip".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .signature_requests()
        .download_files("a/b c", "zip")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_download_files_escapes_file_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/signature_request/files/{}", SIGNATURE_REQUEST_ID)))
        .and(query_param("file_type", "p&f=1 x"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .signature_requests()
        .download_files(SIGNATURE_REQUEST_ID, "p&f=1 x")
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("file_type=p%26f%3D1+x"));
    assert_eq!(requests[0].url.query_pairs().count(), 1);
}

#[tokio::test]
async fn test_download_files_refuses_dot_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"zip".to_vec()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    for id in [".", ".."] {
        let result = client.signature_requests().download_files(id, "zip").await;
        match result {
            Err(HelloSignError::InvalidPathSegment(segment)) => assert_eq!(segment, id),
            other => panic!("Expected InvalidPathSegment, got {:?}", other),
        }
    }
}

#[tokio::test]
async fn test_download_files_not_ready_is_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/signature_request/files/{}", SIGNATURE_REQUEST_ID)))
        .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
            "error": {
                "error_msg": "Files are still being processed. Please try again later.",
                "error_name": "conflict"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client
        .signature_requests()
        .download_files(SIGNATURE_REQUEST_ID, "pdf")
        .await;

    match result {
        Err(err @ HelloSignError::Api { .. }) => {
            assert!(err.is_conflict());
            assert_eq!(err.status_code(), Some(409));
            assert!(err.to_string().contains("Files are still being processed"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_embedded_with_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signature_request/create_embedded_with_template"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "client_id": "ddddb5e5c34b929957e24b17aa52dddd",
            "template_ids": ["cccc6ad681229567aab20cd83a69cf18fb2cccc"],
            "signers": [{
                "role": "First",
                "name": "Signer One",
                "email_address": "signer.one@example.org"
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signature_request": {
                "signature_request_id": SIGNATURE_REQUEST_ID,
                "test_mode": true,
                "title": "Agreement",
                "created_at": 1730137243,
                "is_complete": false,
                "is_declined": false,
                "has_error": false,
                "template_ids": ["cccc6ad681229567aab20cd83a69cf18fb2cccc"],
                "signatures": [{
                    "signature_id": "50e3542f738adfa7ddd4cbd4c00d2a8ab6e4194b",
                    "signer_email_address": "signer.one@example.org",
                    "signer_name": "Signer One",
                    "signer_role": "First",
                    "order": null,
                    "status_code": "awaiting_signature",
                    "signed_at": null,
                    "last_viewed_at": null,
                    "last_reminded_at": null,
                    "has_pin": false
                }]
            },
            "warnings": [{
                "warning_msg": "Test mode is on",
                "warning_name": "test_mode"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let resp = client
        .signature_requests()
        .create_embedded_with_template(
            CreateEmbeddedWithTemplateRequest::new("ddddb5e5c34b929957e24b17aa52dddd")
                .template_id("cccc6ad681229567aab20cd83a69cf18fb2cccc")
                .signer(SubSignatureRequestTemplateSigner::new(
                    "First",
                    "Signer One",
                    "signer.one@example.org",
                )),
        )
        .await
        .unwrap();

    let sr = &resp.signature_request;
    assert_eq!(sr.signature_request_id.as_deref(), Some(SIGNATURE_REQUEST_ID));

    let expected_created_at = Utc.with_ymd_and_hms(2024, 10, 28, 17, 40, 43).unwrap();
    let created_at = sr.created_at.unwrap();
    assert_eq!(created_at.0, expected_created_at);
    assert_eq!(created_at.to_local(), expected_created_at);

    let signature = sr.signature_for("signer.one@example.org").unwrap();
    assert_eq!(
        signature.signature_id.as_deref(),
        Some("50e3542f738adfa7ddd4cbd4c00d2a8ab6e4194b")
    );
    assert!(!signature.signed_at.is_valid());
    assert_eq!(resp.warnings.unwrap()[0].warning_name, "test_mode");
}

#[tokio::test]
async fn test_create_embedded_with_template_keeps_base_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/signature_request/create_embedded_with_template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signature_request": {
                "signature_request_id": SIGNATURE_REQUEST_ID,
                "created_at": "1730137243"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .base_url(format!("{}/v3", mock_server.uri()))
        .access_token("oauth-token")
        .build()
        .unwrap();

    let resp = client
        .signature_requests()
        .create_embedded_with_template(
            CreateEmbeddedWithTemplateRequest::new("client")
                .template_id("tmpl")
                .signer(SubSignatureRequestTemplateSigner::new("First", "A", "a@example.org"))
                .metadata("partner_user_id", 3456)
                .test_mode(true),
        )
        .await
        .unwrap();

    assert_eq!(resp.signature_request.created_at.unwrap().unix(), 1_730_137_243);
    assert!(resp.warnings.is_none());
}

#[tokio::test]
async fn test_create_embedded_with_template_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signature_request/create_embedded_with_template"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "error_msg": "Template not found",
                "error_path": "template_ids",
                "error_name": "bad_request"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .signature_requests()
        .create_embedded_with_template(CreateEmbeddedWithTemplateRequest::new("client"))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(400));
    let envelope = err.error_response().unwrap();
    assert_eq!(envelope.error.error_path.as_deref(), Some("template_ids"));
    assert_eq!(envelope.error.error_msg, "Template not found");
}
