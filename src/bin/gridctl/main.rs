use anyhow::{Context, Result};
use clap::Parser;
use gridlab::{ClientConfig, GridClient, config, telemetry};
use std::process::ExitCode;
use tracing::debug;

mod args;
mod commands;

use args::Args;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Args::parse();

    let mut config = match &cli.config {
        Some(path) => config::parse(path)
            .await
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ClientConfig::default(),
    };
    if let Some(address) = cli.address {
        config.address = address;
    }
    if let Some(zone) = cli.zone {
        config.zone = zone;
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(log) = cli.log {
        config.log = log;
    }

    telemetry::init_tracing(telemetry::filter(&config.log))?;
    debug!(?config, "configuration loaded");

    let client = GridClient::builder()
        .config(config.clone())
        .build()
        .context("invalid client configuration")?;

    commands::execute(cli.cmd, client, &config).await
}
