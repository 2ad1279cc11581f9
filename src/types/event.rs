use super::signature_request::SignatureRequestResponse;
use crate::timestamp::UnixTimestamp;
use serde::{Deserialize, Serialize};

/// Body a callback handler must answer with so the API marks the event delivered.
pub const CALLBACK_ACKNOWLEDGEMENT: &str = "Hello API Event Received";

/// Payload of an event callback (webhook) sent by the API.
///
/// The API posts this as the `json` field of a form; extract that field and
/// hand it to [`EventCallbackRequest::from_json`]. Verifying `event_hash` is
/// left to the caller.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EventCallbackRequest {
    pub event: EventCallbackRequestEvent,
    /// Present for signature request events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_request: Option<SignatureRequestResponse>,
    /// Account details, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<serde_json::Value>,
    /// Template details, kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<serde_json::Value>,
}

impl EventCallbackRequest {
    /// Parses a callback payload.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Shorthand for `event.event_type`.
    pub fn event_type(&self) -> &str {
        &self.event.event_type
    }

    /// Returns true for the test event sent when a callback URL is configured.
    pub fn is_test(&self) -> bool {
        self.event.event_type == "callback_test"
    }
}

/// Basic information about the event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EventCallbackRequestEvent {
    pub event_time: UnixTimestamp,
    /// e.g. `signature_request_signed`, `signature_request_all_signed`.
    pub event_type: String,
    /// Hash used to verify the source of the event data.
    pub event_hash: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_metadata: Option<EventCallbackRequestEventMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventCallbackRequestEventMetadata {
    /// Signature id of a specific signer, for `signature_request_signed`
    /// and `signature_request_viewed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_signature_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_for_account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_for_app_id: Option<String>,
    /// Why a signing flow was declined or failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_message: Option<String>,
}
