//! The uniform response envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Every response body, success or failure: `{data, message}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

impl ApiResponse<Value> {
    /// Message-only envelope with an empty `data` object.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self::new(Value::Object(Map::new()), message)
    }
}
