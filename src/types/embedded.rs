use super::common::WarningResponse;
use crate::timestamp::UnixTimestamp;
use serde::{Deserialize, Serialize};

/// Response from `POST /embedded/sign_url/{signature_id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EmbeddedSignUrlResponse {
    pub embedded: EmbeddedSignUrlResponseEmbedded,
    /// A list of warnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<WarningResponse>>,
}

/// Everything needed to open an embedded signing iFrame.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct EmbeddedSignUrlResponseEmbedded {
    /// A signature url that can be opened in an iFrame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_url: Option<String>,
    /// When the `sign_url` link expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<UnixTimestamp>,
}
