use super::common::{Metadata, WarningResponse, null_as_default};
use crate::timestamp::{NullableTimestamp, UnixTimestamp};
use serde::{Deserialize, Serialize};

/// Request body for `POST /signature_request/create_embedded_with_template`.
///
/// Creates a signature request from one or more templates, to be signed in
/// an embedded iFrame. Embedded requests can only be signed in an iFrame.
///
/// # Example
///
/// ```rust
/// use hellosign::types::{CreateEmbeddedWithTemplateRequest, SubSignatureRequestTemplateSigner};
///
/// let request = CreateEmbeddedWithTemplateRequest::new("ddddb5e5c34b929957e24b17aa52dddd")
///     .template_id("cccc6ad681229567aab20cd83a69cf18fb2cccc")
///     .signer(SubSignatureRequestTemplateSigner::new(
///         "Client",
///         "Signer One",
///         "signer.one@example.org",
///     ))
///     .test_mode(true);
///
/// assert_eq!(request.signers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEmbeddedWithTemplateRequest {
    /// Client id of the app creating this embedded signature request.
    pub client_id: String,
    /// Templates to use, in the order they are applied.
    pub template_ids: Vec<String>,
    /// Signers for the template roles.
    pub signers: Vec<SubSignatureRequestTemplateSigner>,
    /// Allows signers to decline to sign. Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_decline: Option<bool>,
    /// CC recipients. Required when a CC role exists for the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccs: Option<Vec<SubCC>>,
    /// Values for the template's custom fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<SubCustomField>>,
    /// URLs the API downloads the documents from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_urls: Option<Vec<String>>,
    /// Custom message in the email sent to signers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Data echoed back in every response and event for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Signature types the signer may use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_options: Option<SubSigningOptions>,
    /// Subject of the email sent to signers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Test requests are not legally binding. Defaults to `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
    /// Title of the signature request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Let auto fill fields populate the signer's information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub populate_auto_fill_fields: Option<bool>,
}

impl CreateEmbeddedWithTemplateRequest {
    /// Start a request for the app identified by `client_id`.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Default::default()
        }
    }

    /// Append a template id.
    pub fn template_id(mut self, template_id: impl Into<String>) -> Self {
        self.template_ids.push(template_id.into());
        self
    }

    /// Append a signer.
    pub fn signer(mut self, signer: SubSignatureRequestTemplateSigner) -> Self {
        self.signers.push(signer);
        self
    }

    /// Append a CC recipient.
    pub fn cc(mut self, cc: SubCC) -> Self {
        self.ccs.get_or_insert_with(Vec::new).push(cc);
        self
    }

    /// Append a custom field value.
    pub fn custom_field(mut self, field: SubCustomField) -> Self {
        self.custom_fields.get_or_insert_with(Vec::new).push(field);
        self
    }

    /// Set one metadata entry.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = Some(test_mode);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A CC recipient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCC {
    /// Must match an existing CC role in the chosen templates.
    pub role: String,
    pub email_address: String,
}

/// Pre-filled data for a template merge field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCustomField {
    /// Name of the custom field; must match a merge field name.
    pub name: String,
    /// Signer role allowed to edit the pre-filled value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    /// When `true`, `editor` must name a signer role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// The pre-filled value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SubCustomField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }
}

/// A signer filling one template role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSignatureRequestTemplateSigner {
    /// Must match an existing role in the chosen templates. Case-sensitive.
    pub role: String,
    pub name: String,
    pub email_address: String,
    /// 4 to 12 character access code securing the signature page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// E.164 phone number for SMS authentication or delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_phone_number: Option<String>,
    /// `authentication` (default) or `delivery`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms_phone_number_type: Option<String>,
}

impl SubSignatureRequestTemplateSigner {
    pub fn new(
        role: impl Into<String>,
        name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            name: name.into(),
            email_address: email_address.into(),
            ..Default::default()
        }
    }
}

/// Signature types allowed for this request.
///
/// When absent, the account settings decide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSigningOptions {
    /// The default type shown, one of the allowed types.
    pub default_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<bool>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload: Option<bool>,
}

/// Response from the signature request endpoints.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SignatureRequestGetResponse {
    pub signature_request: SignatureRequestResponse,
    /// A list of warnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<WarningResponse>>,
}

/// A signature request as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignatureRequestResponse {
    /// Test requests have no legal value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_request_id: Option<String>,
    /// Email address of the initiator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<UnixTimestamp>,
    /// When unsigned signatures expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<UnixTimestamp>,
    /// Whether every signer has signed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_declined: Option<bool>,
    /// Whether an error occurred during creation or one of the signings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_error: Option<bool>,
    /// Where a copy of the documents can be downloaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_url: Option<String>,
    /// Only useful for signers with an existing account, who must log in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_email_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_copy_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<SignatureRequestResponseCustomFieldBase>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<SignatureRequestResponseAttachment>>,
    /// Form field values filled in by the signers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Vec<SignatureRequestResponseDataBase>>,
    /// One entry per signer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<SignatureRequestResponseSignatures>>,
    /// Bulk send job that sent this request, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_send_job_id: Option<String>,
}

impl SignatureRequestResponse {
    /// Finds the signature entry for a signer by email address.
    pub fn signature_for(&self, email_address: &str) -> Option<&SignatureRequestResponseSignatures> {
        self.signatures
            .as_deref()?
            .iter()
            .find(|s| s.signer_email_address.as_deref() == Some(email_address))
    }
}

/// A custom field on a signature request. `type` is `text` or `checkbox`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignatureRequestResponseCustomFieldBase {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub type_: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    /// Role that may edit this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

/// A signer attachment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignatureRequestResponseAttachment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// The signer this attachment is assigned to.
    #[serde(deserialize_with = "null_as_default")]
    pub signer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<UnixTimestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignatureRequestResponseDataBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    /// Signature this value belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

/// Signing state for one signer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignatureRequestResponseSignatures {
    /// Pass this to the embedded sign URL endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_group_guid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_role: Option<String>,
    /// 0-based position when signer order is assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    /// e.g. `awaiting_signature`, `signed`, `declined`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_reason: Option<String>,
    pub signed_at: NullableTimestamp,
    pub last_viewed_at: NullableTimestamp,
    pub last_reminded_at: NullableTimestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_sms_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_sms_delivery: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_phone_number: Option<String>,
    /// Email of the original signer who reassigned to this one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassigned_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassignment_reason: Option<String>,
    /// Previous signature id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reassigned_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
