//! Response types for content generation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A successful generation response.
///
/// Only `content` is consumed; any other fields in the response body are
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerateResponse {
    /// The generated article text
    content: String,
}

impl GenerateResponse {
    /// Create a response with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
