//! CLI argument definitions.

use clap::{Parser, Subcommand};
use scrivano_core::Style;

/// Form-driven client for a content generation endpoint.
#[derive(Debug, Parser)]
#[command(name = "scrivano", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an article and print it
    Generate {
        /// Subject the article should cover
        #[arg(long)]
        topic: String,

        /// Requested article length in characters
        #[arg(long, default_value_t = 500)]
        length: u32,

        /// Writing style (technical, casual, formal, marketing, academic)
        #[arg(long, default_value_t = Style::Technical)]
        style: Style,

        /// Override the endpoint base URL from the environment
        #[arg(long)]
        base_url: Option<String>,
    },
}
