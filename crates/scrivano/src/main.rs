//! Scrivano binary entry point.

use clap::Parser;
use scrivano::cli::{Cli, Commands, handle_generate_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            topic,
            length,
            style,
            base_url,
        } => handle_generate_command(topic, length, style, base_url).await,
    }
}
