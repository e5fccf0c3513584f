use http::StatusCode;
use serde::{Deserialize, Serialize};

/// The JSON body sent for every error response.
///
/// Serializes as `{"statusCode": <int>, "message": "<string>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    status_code: u16,
    message: String,
}

impl ErrorRecord {
    pub fn new<S: Into<String>>(status: StatusCode, message: S) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
        }
    }

    /// Build a record from any displayable error value.
    pub fn from_error<E: std::fmt::Display + ?Sized>(status: StatusCode, err: &E) -> Self {
        Self::new(status, err.to_string())
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}
