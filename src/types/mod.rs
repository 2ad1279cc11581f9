//! Request and response payloads for the HelloSign API.
//!
//! Field names match the documented JSON keys exactly. Optional fields are
//! `Option<T>` and are left off the wire when `None`; the API treats an
//! absent field differently from an explicit `false`, `0` or `""`.

mod common;
mod embedded;
mod event;
mod signature_request;

pub use common::{ErrorResponse, ErrorResponseError, FileType, Metadata, WarningResponse};
pub use embedded::{EmbeddedSignUrlResponse, EmbeddedSignUrlResponseEmbedded};
pub use event::{
    CALLBACK_ACKNOWLEDGEMENT, EventCallbackRequest, EventCallbackRequestEvent,
    EventCallbackRequestEventMetadata,
};
pub use signature_request::{
    CreateEmbeddedWithTemplateRequest, SignatureRequestGetResponse, SignatureRequestResponse,
    SignatureRequestResponseAttachment, SignatureRequestResponseCustomFieldBase,
    SignatureRequestResponseDataBase, SignatureRequestResponseSignatures, SubCC, SubCustomField,
    SubSignatureRequestTemplateSigner, SubSigningOptions,
};
