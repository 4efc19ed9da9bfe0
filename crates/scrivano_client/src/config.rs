//! Configuration for the generation endpoint connection.

use derive_getters::Getters;
use scrivano_core::Style;
use scrivano_error::ConfigError;

/// Default endpoint base URL (the development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Default identifier of the content form on the host page.
pub const DEFAULT_FORM_ID: &str = "content-form";
/// Default identifier of the output region on the host page.
pub const DEFAULT_OUTPUT_ID: &str = "output-content";
/// Default upper bound on requested article length, in characters.
pub const DEFAULT_MAX_LENGTH: u32 = 2000;

/// Configuration for connecting a form to the generation endpoint.
///
/// `max_length` is advisory: hosts may use it to bound the length field,
/// but the controller sends whatever the form holds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_setters::Setters, derive_builder::Builder)]
#[builder(setter(into))]
#[setters(prefix = "with_", into)]
pub struct ClientConfig {
    /// Base URL of the generation endpoint (e.g. "http://localhost:5000")
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Identifier of the content form element
    #[builder(default = "DEFAULT_FORM_ID.to_string()")]
    form_id: String,
    /// Identifier of the output element
    #[builder(default = "DEFAULT_OUTPUT_ID.to_string()")]
    output_id: String,
    /// Style preselected when the form has none
    #[builder(default)]
    default_style: Style,
    /// Advisory maximum article length in characters
    #[builder(default = "DEFAULT_MAX_LENGTH")]
    max_length: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfigBuilder::default()
            .build()
            .expect("Valid ClientConfig")
    }
}

impl ClientConfig {
    /// Creates a new builder for ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `SCRIVANO_BASE_URL` (default: "http://localhost:5000")
    /// - `SCRIVANO_FORM_ID` (default: "content-form")
    /// - `SCRIVANO_OUTPUT_ID` (default: "output-content")
    /// - `SCRIVANO_DEFAULT_STYLE` (default: "technical")
    /// - `SCRIVANO_MAX_LENGTH` (default: 2000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url =
            std::env::var("SCRIVANO_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let form_id =
            std::env::var("SCRIVANO_FORM_ID").unwrap_or_else(|_| DEFAULT_FORM_ID.to_string());
        let output_id =
            std::env::var("SCRIVANO_OUTPUT_ID").unwrap_or_else(|_| DEFAULT_OUTPUT_ID.to_string());

        let default_style = match std::env::var("SCRIVANO_DEFAULT_STYLE") {
            Ok(raw) => raw.parse::<Style>().map_err(|_| {
                ConfigError::new(format!("SCRIVANO_DEFAULT_STYLE is not a known style: {raw}"))
            })?,
            Err(_) => Style::default(),
        };

        let max_length = match std::env::var("SCRIVANO_MAX_LENGTH") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                ConfigError::new(format!("SCRIVANO_MAX_LENGTH is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_MAX_LENGTH,
        };

        Ok(ClientConfigBuilder::default()
            .base_url(base_url)
            .form_id(form_id)
            .output_id(output_id)
            .default_style(default_style)
            .max_length(max_length)
            .build()
            .expect("Valid ClientConfig"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_development_server() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.form_id(), DEFAULT_FORM_ID);
        assert_eq!(config.output_id(), DEFAULT_OUTPUT_ID);
        assert_eq!(*config.default_style(), Style::Technical);
        assert_eq!(*config.max_length(), DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn from_env_falls_back_to_defaults() {
        // No SCRIVANO_* variables are set in the test environment.
        let config = ClientConfig::from_env().expect("Valid ClientConfig");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn builder_overrides_take_effect() {
        let config = ClientConfig::builder()
            .base_url("https://generator.example")
            .default_style(Style::Marketing)
            .build()
            .expect("Valid ClientConfig");
        assert_eq!(config.base_url(), "https://generator.example");
        assert_eq!(*config.default_style(), Style::Marketing);
        assert_eq!(config.form_id(), DEFAULT_FORM_ID);
    }
}
