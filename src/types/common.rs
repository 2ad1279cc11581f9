use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Free-form key/value data attached to a signature request.
///
/// The API allows up to 10 keys (or 50 nested keys), key names up to 40
/// characters and values up to 1000 characters.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Decodes an explicit `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A non-fatal warning returned alongside a successful response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WarningResponse {
    /// Warning message.
    #[serde(deserialize_with = "null_as_default")]
    pub warning_msg: String,
    /// Warning name.
    #[serde(deserialize_with = "null_as_default")]
    pub warning_name: String,
}

/// Body the API sends with non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorResponseError,
}

/// Details about an error that occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponseError {
    /// Message describing the error.
    pub error_msg: String,
    /// Path at which the error occurred.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_path: Option<String>,
    /// Name of the error.
    pub error_name: String,
}

/// Format for downloaded signature request files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// A single merged PDF.
    Pdf,
    /// A ZIP of the individual documents.
    Zip,
}

impl FileType {
    /// The value sent as the `file_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Zip => "zip",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FileType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
