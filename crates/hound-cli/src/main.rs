//! `hound` binary: run an image through the Sighthound API and print the
//! normalized result as JSON.

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hound_cli::{build_report, Cli, Command};
use hound_client::{HoundClient, HoundConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing();

    if let Err(e) = run(cli.command).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

/// Colored output for dev, JSON when `LOG_FORMAT=json`.
fn init_tracing() {
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hound=info,hound_client=info,hound_cli=info"));

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter)
            .init();
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = HoundConfig::from_env()?;
    info!("Sighthound config: {:?}", config);
    let client = HoundClient::new(config)?;

    let image = tokio::fs::read(command.image())
        .await
        .with_context(|| format!("failed to read {}", command.image().display()))?;

    let response = match &command {
        Command::Detect { .. } => client.detect(&image).await?,
        Command::Recognize { kind, .. } => client.recognize(&image, *kind).await?,
    };
    info!(objects = response.objects.len(), "Sighthound call complete");

    let report = build_report(&response)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
