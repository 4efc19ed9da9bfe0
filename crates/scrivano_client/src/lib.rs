//! HTTP transport and configuration for the Scrivano content generation client.
//!
//! [`GenerateClient`] is the production implementation of
//! [`scrivano_interface::GenerateTransport`], speaking JSON over HTTP to
//! the generation endpoint.

mod client;
mod config;

pub use client::{GENERATE_PATH, GenerateClient};
pub use config::{ClientConfig, ClientConfigBuilder};
