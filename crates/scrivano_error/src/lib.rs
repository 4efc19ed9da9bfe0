//! Error types for the Scrivano library.
//!
//! This crate provides the foundation error types used throughout the
//! Scrivano workspace.

mod config;
mod http;
mod json;

pub use config::ConfigError;
pub use http::HttpError;
pub use json::JsonError;

/// Crate-level error variants.
///
/// `RequestFailed` covers completed HTTP exchanges with a non-success
/// status; transport failures that never complete are `Http`.
#[derive(Debug, Clone, derive_more::From)]
pub enum ScrivanoErrorKind {
    /// HTTP transport error
    Http(HttpError),
    /// JSON deserialization error
    Json(JsonError),
    /// Configuration error
    Config(ConfigError),
    /// Generation endpoint returned a non-success status
    #[from(skip)]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },
}

impl std::fmt::Display for ScrivanoErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrivanoErrorKind::Http(e) => write!(f, "{}", e),
            ScrivanoErrorKind::Json(e) => write!(f, "{}", e),
            ScrivanoErrorKind::Config(e) => write!(f, "{}", e),
            ScrivanoErrorKind::RequestFailed { status } => {
                write!(f, "Request failed with status {}", status)
            }
        }
    }
}

/// Scrivano error with kind discrimination.
#[derive(Debug, Clone)]
pub struct ScrivanoError(Box<ScrivanoErrorKind>);

impl ScrivanoError {
    /// Create a new error from a kind.
    pub fn new(kind: ScrivanoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Create an error for a non-success response status.
    pub fn request_failed(status: u16) -> Self {
        Self::new(ScrivanoErrorKind::RequestFailed { status })
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ScrivanoErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ScrivanoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scrivano Error: {}", self.0)
    }
}

impl std::error::Error for ScrivanoError {}

// Generic From implementation for any type that converts to ScrivanoErrorKind
impl<T> From<T> for ScrivanoError
where
    T: Into<ScrivanoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Scrivano operations.
pub type ScrivanoResult<T> = std::result::Result<T, ScrivanoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_converts_to_scrivano_error() {
        let err: ScrivanoError = HttpError::new("connection refused").into();
        assert!(matches!(err.kind(), ScrivanoErrorKind::Http(_)));
    }

    #[test]
    fn request_failed_displays_status() {
        let err = ScrivanoError::request_failed(500);
        assert!(err.to_string().contains("500"));
    }
}
