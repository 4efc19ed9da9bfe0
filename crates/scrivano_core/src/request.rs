//! Request types for content generation.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A content generation request.
///
/// Constructed fresh from the current form field values on every
/// submission and discarded once the request completes. Field order is
/// the wire order: the serialized body is exactly
/// `{"topic":..,"length":..,"style":..}`.
///
/// No validation is applied to the field values; whatever the form holds
/// is sent as-is.
///
/// # Examples
///
/// ```
/// use scrivano_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .topic("Test Topic")
///     .length(100u32)
///     .style("technical")
///     .build()
///     .expect("Valid GenerateRequest");
/// assert_eq!(request.topic(), "Test Topic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Subject the generated article should cover
    topic: String,
    /// Requested article length in characters
    length: u32,
    /// Writing style, e.g. "technical" or "marketing"
    style: String,
}

impl GenerateRequest {
    /// Creates a new builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_fields_in_wire_order() {
        let request = GenerateRequest::builder()
            .topic("Test Topic")
            .length(100u32)
            .style("technical")
            .build()
            .expect("Valid GenerateRequest");

        let body = serde_json::to_string(&request).expect("Serializable request");
        assert_eq!(
            body,
            r#"{"topic":"Test Topic","length":100,"style":"technical"}"#
        );
    }

    #[test]
    fn round_trips_through_json() {
        let request = GenerateRequest::builder()
            .topic("Rust")
            .length(500u32)
            .style("casual")
            .build()
            .expect("Valid GenerateRequest");

        let body = serde_json::to_string(&request).expect("Serializable request");
        let parsed: GenerateRequest = serde_json::from_str(&body).expect("Parseable request");
        assert_eq!(parsed, request);
    }
}
