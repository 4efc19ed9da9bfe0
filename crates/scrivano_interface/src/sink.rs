//! Error reporting channel.

use tracing::error;

/// The injected error-logging channel.
///
/// Submission failures are reported here with their distinguishing detail
/// (status code or transport error); the output region only ever shows
/// the fixed failure message.
pub trait ErrorSink: Send + Sync {
    /// Report a failure.
    fn error(&self, message: &str);
}

/// Default sink forwarding to the `tracing` error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn error(&self, message: &str) {
        error!(error = %message, "Content generation failed");
    }
}
