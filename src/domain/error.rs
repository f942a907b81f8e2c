use serde::{Deserialize, Serialize};

/// Logical failure reported by SMSAPI.
///
/// Built from the HTTP status and the `{error, message, invalid_numbers}` envelope. When
/// the body carried no envelope, `code` is `0` and `message` is empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status: {status} code: {code} message: {message}")]
pub struct ApiError {
    pub status: u16,
    pub code: i64,
    pub message: String,
    pub invalid_numbers: Vec<InvalidNumber>,
}

/// Per-recipient rejection attached to an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidNumber {
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub submitted_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
