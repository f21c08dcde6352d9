//! Error taxonomy shared by the store, the API functions, and every
//! transport that exposes them.

use serde_json::{json, Value};

/// Failure of an API operation.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// No assignment file exists for the requested id.
    #[error("assignment `{0}` not found")]
    NotFound(String),
    /// The request body does not have the expected shape.
    #[error("{0}")]
    BadRequest(String),
    /// A document (stored file or submitted answer) is missing fields or
    /// is not valid JSON.
    #[error("{0}")]
    MalformedData(String),
    /// The assignments directory or a file could not be read.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::BadRequest(_) | ApiError::MalformedData(_) => 400,
            ApiError::Unavailable(_) => 500,
        }
    }

    /// Message safe to return to a client.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::NotFound(_) => "Assignment not found".to_string(),
            ApiError::BadRequest(msg) | ApiError::MalformedData(msg) => msg.clone(),
            ApiError::Unavailable(_) => "Internal server error".to_string(),
        }
    }

    /// The `{"error": ...}` response body.
    pub fn body(&self) -> Value {
        json!({ "error": self.public_message() })
    }
}
