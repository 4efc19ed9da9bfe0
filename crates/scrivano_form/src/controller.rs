//! Controller binding form submission to the generation endpoint.

use scrivano_core::{GenerateRequest, GenerateResponse};
use scrivano_error::ScrivanoError;
use scrivano_interface::{ErrorSink, FormView, GenerateTransport, OutputView, PageView};
use std::sync::Arc;
use tracing::{debug, warn};

/// Name of the topic field on the content form.
pub const FIELD_TOPIC: &str = "topic";
/// Name of the length field on the content form.
pub const FIELD_LENGTH: &str = "length";
/// Name of the style field on the content form.
pub const FIELD_STYLE: &str = "style";

/// Status shown in the output region while a request is in flight.
pub const STATUS_GENERATING: &str = "Generating content...";
/// Message shown in the output region when a submission fails.
pub const MSG_GENERATION_FAILED: &str = "Failed to generate content. Please try again.";

/// Mediates between a content form and the generation endpoint.
///
/// One submission reads the three field values, writes the
/// [`STATUS_GENERATING`] status, issues exactly one POST, and writes the
/// returned content or [`MSG_GENERATION_FAILED`] back. Failures are
/// reported to the [`ErrorSink`] and never propagate; the controller
/// stays usable for subsequent submissions.
///
/// Overlapping submissions are not guarded against: each runs
/// independently and whichever settles last determines the displayed
/// text. Hosts wanting sequencing must provide it themselves.
pub struct FormController<T> {
    transport: Arc<T>,
    errors: Arc<dyn ErrorSink>,
    binding: Option<Binding>,
}

#[derive(Clone)]
struct Binding {
    form: Arc<dyn FormView>,
    output: Arc<dyn OutputView>,
}

/// Everything a submission captures at call time.
struct Submission<T> {
    transport: Arc<T>,
    errors: Arc<dyn ErrorSink>,
    output: Arc<dyn OutputView>,
    request: GenerateRequest,
}

impl<T> FormController<T>
where
    T: GenerateTransport + 'static,
{
    /// Creates an unbound controller over the given collaborators.
    pub fn new(transport: Arc<T>, errors: Arc<dyn ErrorSink>) -> Self {
        Self {
            transport,
            errors,
            binding: None,
        }
    }

    /// Locate the form and output elements and take hold of them.
    ///
    /// When either element is absent the controller performs no binding
    /// and raises no error; `false` reports the outcome to callers that
    /// care. Binding replaces any previous binding.
    pub fn bind(&mut self, page: &dyn PageView, form_id: &str, output_id: &str) -> bool {
        let (Some(form), Some(output)) = (page.form(form_id), page.output(output_id)) else {
            warn!(form_id, output_id, "Form or output element not found, skipping bind");
            return false;
        };

        debug!(form_id, output_id, "Bound content form");
        self.binding = Some(Binding { form, output });
        true
    }

    /// Whether the controller currently holds a form and output region.
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Handle one form submission.
    ///
    /// The field snapshot and the [`STATUS_GENERATING`] write happen
    /// synchronously, before this function returns; the returned future
    /// performs the network exchange and the final output write. On an
    /// unbound controller the returned future does nothing.
    ///
    /// Each call is independent. Submitting again before a prior future
    /// settles races on the output region, last settler wins.
    pub fn submit(&self) -> impl Future<Output = ()> + Send + use<T> {
        let submission = self.snapshot();

        async move {
            if let Some(submission) = submission {
                run(submission).await;
            }
        }
    }

    /// Eager phase of a submission: read the fields, show the status.
    fn snapshot(&self) -> Option<Submission<T>> {
        let Some(binding) = &self.binding else {
            debug!("Submission on unbound controller ignored");
            return None;
        };

        let topic = binding.form.field(FIELD_TOPIC).unwrap_or_default();
        let length = parse_length(binding.form.field(FIELD_LENGTH));
        let style = binding.form.field(FIELD_STYLE).unwrap_or_default();

        binding.output.set_text(STATUS_GENERATING);

        let request = GenerateRequest::builder()
            .topic(topic)
            .length(length)
            .style(style)
            .build()
            .expect("Valid GenerateRequest");

        debug!(topic = %request.topic(), length = request.length(), style = %request.style(),
            "Submitting generation request");

        Some(Submission {
            transport: Arc::clone(&self.transport),
            errors: Arc::clone(&self.errors),
            output: Arc::clone(&binding.output),
            request,
        })
    }
}

/// Network phase of a submission.
///
/// Exactly one transport call and one final output write. Every failure
/// path converges on the fixed failure message; the distinguishing
/// detail goes to the error sink.
async fn run<T>(submission: Submission<T>)
where
    T: GenerateTransport,
{
    let Submission {
        transport,
        errors,
        output,
        request,
    } = submission;

    match transport.post_generate(&request).await {
        Ok(reply) if reply.is_success() => match reply.json::<GenerateResponse>() {
            Ok(response) => output.set_text(response.content()),
            Err(e) => {
                errors.error(&e.to_string());
                output.set_text(MSG_GENERATION_FAILED);
            }
        },
        Ok(reply) => {
            let e = ScrivanoError::request_failed(*reply.status());
            errors.error(&e.to_string());
            output.set_text(MSG_GENERATION_FAILED);
        }
        Err(e) => {
            errors.error(&e.to_string());
            output.set_text(MSG_GENERATION_FAILED);
        }
    }
}

/// Lenient numeric coercion of the raw length field value.
///
/// Forms hold strings; absent or unparsable values coerce to 0 rather
/// than failing the submission.
fn parse_length(raw: Option<String>) -> u32 {
    raw.as_deref()
        .map(str::trim)
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_parses_plain_numbers() {
        assert_eq!(parse_length(Some("100".to_string())), 100);
        assert_eq!(parse_length(Some(" 250 ".to_string())), 250);
    }

    #[test]
    fn length_coerces_junk_to_zero() {
        assert_eq!(parse_length(None), 0);
        assert_eq!(parse_length(Some(String::new())), 0);
        assert_eq!(parse_length(Some("many".to_string())), 0);
        assert_eq!(parse_length(Some("-5".to_string())), 0);
    }
}
