//! Core data types for the Scrivano content generation client.
//!
//! This crate provides the request and response types exchanged with the
//! generation endpoint, and the set of writing styles the endpoint supports.

mod request;
mod response;
mod style;

pub use request::{GenerateRequest, GenerateRequestBuilder};
pub use response::GenerateResponse;
pub use style::Style;
