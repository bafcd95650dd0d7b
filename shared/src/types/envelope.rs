//! Backend response envelope

use serde::{Deserialize, Serialize};

/// Generic wrapper every backend response uses: `{success, message, data}`
///
/// `success` is optional on the wire; a missing flag is treated as "not false".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the backend considers the request successful
    #[serde(default)]
    pub success: Option<bool>,

    /// Human-readable message, present on both success and failure
    #[serde(default)]
    pub message: Option<String>,

    /// Response payload (present on success)
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// True unless the backend explicitly reported `success: false`
    pub fn is_not_failed(&self) -> bool {
        self.success != Some(false)
    }

    /// Extract the data, consuming the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
