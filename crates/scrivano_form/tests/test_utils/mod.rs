//! Test utilities for controller tests.
//!
//! This module provides mock collaborators: a scripted transport, a
//! recording error sink, and a prefilled page.

use async_trait::async_trait;
use scrivano_core::GenerateRequest;
use scrivano_error::HttpError;
use scrivano_form::page::{MemoryForm, MemoryOutput, MemoryPage};
use scrivano_interface::{ErrorSink, GenerateTransport, TransportReply};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use tokio::sync::oneshot;

/// One scripted transport outcome.
pub enum MockReply {
    /// Resolve immediately with the given result.
    Ready(Result<TransportReply, HttpError>),
    /// Resolve when the paired sender fires.
    Wait(oneshot::Receiver<Result<TransportReply, HttpError>>),
    /// Never resolve.
    Pending,
}

/// Scripted [`GenerateTransport`] recording every request it receives.
///
/// Replies are consumed in call order; running out of script is a test
/// bug and panics.
pub struct MockTransport {
    requests: Mutex<Vec<GenerateRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
}

impl MockTransport {
    pub fn new(replies: Vec<MockReply>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into()),
        }
    }

    /// A transport answering one exchange with the given status and body.
    pub fn with_reply(status: u16, body: &str) -> Self {
        Self::new(vec![MockReply::Ready(Ok(TransportReply::new(status, body)))])
    }

    /// A transport failing one exchange at the network level.
    pub fn with_network_error(message: &str) -> Self {
        Self::new(vec![MockReply::Ready(Err(HttpError::new(message)))])
    }

    /// A transport whose single exchange never resolves.
    pub fn pending() -> Self {
        Self::new(vec![MockReply::Pending])
    }

    /// Requests received so far, in call order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("Request log lock poisoned").clone()
    }
}

#[async_trait]
impl GenerateTransport for MockTransport {
    async fn post_generate(&self, request: &GenerateRequest) -> Result<TransportReply, HttpError> {
        self.requests
            .lock()
            .expect("Request log lock poisoned")
            .push(request.clone());

        let reply = self
            .replies
            .lock()
            .expect("Reply script lock poisoned")
            .pop_front()
            .expect("Scripted reply available");

        match reply {
            MockReply::Ready(result) => result,
            MockReply::Wait(rx) => rx.await.expect("Reply signal delivered"),
            MockReply::Pending => futures::future::pending().await,
        }
    }
}

/// [`ErrorSink`] capturing messages for assertions.
#[derive(Default)]
pub struct RecordingErrorSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("Message log lock poisoned").clone()
    }
}

impl ErrorSink for RecordingErrorSink {
    fn error(&self, message: &str) {
        self.messages
            .lock()
            .expect("Message log lock poisoned")
            .push(message.to_string());
    }
}

/// Handles a test keeps after the page itself is handed to `bind`.
pub type PageHandles = (Arc<MemoryForm>, Arc<MemoryOutput>);

/// A page carrying the content form (prefilled with the canonical test
/// values) and the output region, under the default identifiers.
pub fn content_page() -> (MemoryPage, Arc<MemoryForm>, Arc<MemoryOutput>) {
    let form = Arc::new(MemoryForm::new());
    form.set_field("topic", "Test Topic");
    form.set_field("length", "100");
    form.set_field("style", "technical");

    let output = Arc::new(MemoryOutput::new());

    let page = MemoryPage::new()
        .with_form("content-form", Arc::clone(&form))
        .with_output("output-content", Arc::clone(&output));

    (page, form, output)
}
