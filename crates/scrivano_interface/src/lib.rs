//! Trait definitions for the Scrivano content generation client.
//!
//! The controller's collaborators are ambient globals in a browser page:
//! the fetch capability, the console, and the document. Here each one is
//! an explicit trait so implementations can be swapped deterministically
//! in tests.

mod page;
mod sink;
mod transport;

pub use page::{FormView, OutputView, PageView};
pub use sink::{ErrorSink, TracingErrorSink};
pub use transport::{GenerateTransport, TransportReply};
