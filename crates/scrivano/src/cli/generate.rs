//! Generate command handler.

use scrivano_client::{ClientConfig, GenerateClient};
use scrivano_core::Style;
use scrivano_form::{
    FIELD_LENGTH, FIELD_STYLE, FIELD_TOPIC, FormController,
    page::{MemoryForm, MemoryOutput, MemoryPage},
};
use scrivano_interface::{ErrorSink, TracingErrorSink};
use std::sync::Arc;

/// Handle the `generate` command.
///
/// Fills an in-memory page with the arguments, submits it through the
/// controller, and prints whatever the output region ends up showing,
/// the generated article or the failure message.
#[tracing::instrument(skip_all, fields(topic = %topic, style = %style))]
pub async fn handle_generate_command(
    topic: String,
    length: u32,
    style: Style,
    base_url: Option<String>,
) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = base_url {
        config = config.with_base_url(base_url);
    }

    tracing::info!(base_url = %config.base_url(), "Generating content");

    let form = Arc::new(MemoryForm::new());
    form.set_field(FIELD_TOPIC, topic);
    form.set_field(FIELD_LENGTH, length.to_string());
    form.set_field(FIELD_STYLE, style.to_string());

    let output = Arc::new(MemoryOutput::new());

    let page = MemoryPage::new()
        .with_form(config.form_id().clone(), Arc::clone(&form))
        .with_output(config.output_id().clone(), Arc::clone(&output));

    let client = Arc::new(GenerateClient::new(&config));
    let mut controller = FormController::new(client, Arc::new(TracingErrorSink) as Arc<dyn ErrorSink>);

    if !controller.bind(&page, config.form_id(), config.output_id()) {
        anyhow::bail!("Page wiring failed: form or output element missing");
    }

    controller.submit().await;

    println!("{}", output.text());
    Ok(())
}
