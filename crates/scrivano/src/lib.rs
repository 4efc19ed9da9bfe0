//! Form-driven client for a content generation endpoint.
//!
//! Scrivano wires a three-field content form (topic, length, style) to a
//! remote generation endpoint over `POST /api/generate` and reflects the
//! request lifecycle in a single output region. This facade re-exports
//! the workspace crates and hosts the command-line interface.

pub mod cli;

pub use scrivano_client::{ClientConfig, ClientConfigBuilder, GENERATE_PATH, GenerateClient};
pub use scrivano_core::{GenerateRequest, GenerateResponse, Style};
pub use scrivano_error::{
    ConfigError, HttpError, JsonError, ScrivanoError, ScrivanoErrorKind, ScrivanoResult,
};
pub use scrivano_form::{
    FIELD_LENGTH, FIELD_STYLE, FIELD_TOPIC, FormController, MSG_GENERATION_FAILED,
    STATUS_GENERATING, page,
};
pub use scrivano_interface::{
    ErrorSink, FormView, GenerateTransport, OutputView, PageView, TracingErrorSink, TransportReply,
};
