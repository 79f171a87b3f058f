//! Response envelope returned by every Subscan call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix of every error message produced while handling a response.
pub const RESPONSE_ERROR_PREFIX: &str = "Response Error";

/// Synthetic error body, serialized as `{ "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// `Response Error: <detail>`
    pub fn response(detail: impl std::fmt::Display) -> Self {
        Self::new(format!("{}: {}", RESPONSE_ERROR_PREFIX, detail))
    }

    pub fn message(&self) -> &str {
        &self.error
    }
}

impl std::fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.error)
    }
}

impl std::error::Error for ErrorEnvelope {}

/// Outcome of one API call: the decoded body or an error envelope.
///
/// A successful body is passed through untouched, including any
/// `code`/`message` fields Subscan uses to report its own errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success(Value),
    Error(ErrorEnvelope),
}

impl ApiResponse {
    pub(crate) fn error(message: impl Into<String>) -> Self {
        ApiResponse::Error(ErrorEnvelope::new(message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ApiResponse::Error(_))
    }

    /// The decoded body, if the call succeeded.
    pub fn value(&self) -> Option<&Value> {
        match self {
            ApiResponse::Success(value) => Some(value),
            ApiResponse::Error(_) => None,
        }
    }

    /// The error message, if the call failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Error(envelope) => Some(envelope.message()),
        }
    }

    /// The `data` member of a successful Subscan body.
    pub fn data(&self) -> Option<&Value> {
        self.value().and_then(|value| value.get("data"))
    }

    /// Flatten into a single JSON value, errors becoming `{ "error": ... }`.
    pub fn into_value(self) -> Value {
        match self {
            ApiResponse::Success(value) => value,
            ApiResponse::Error(envelope) => serde_json::json!({ "error": envelope.error }),
        }
    }

    pub fn into_result(self) -> Result<Value, ErrorEnvelope> {
        match self {
            ApiResponse::Success(value) => Ok(value),
            ApiResponse::Error(envelope) => Err(envelope),
        }
    }
}

impl From<ApiResponse> for Value {
    fn from(response: ApiResponse) -> Self {
        response.into_value()
    }
}
