//! PinDrop - Command-line entry point
//!
//! Loads configuration, restores the stored session, and runs one command
//! as the page it stands in for.

mod cli;
mod commands;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use pindrop_application::{PindropApi, SessionStore};
use pindrop_domain::LOGIN_PATH;
use pindrop_infrastructure::{ClientConfig, FileKeyValueStorage, LocationNavigator, ReqwestTransport};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::App;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ClientConfig::load()?;
    if let Some(url) = &cli.base_url {
        config = config.with_base_url(url)?;
    }
    if let Some(dir) = cli.state_dir {
        config = config.with_state_dir(dir);
    }

    let storage = Arc::new(FileKeyValueStorage::in_dir(&config.state_dir));
    let session = Arc::new(SessionStore::open(storage));
    let transport = Arc::new(ReqwestTransport::new(config.base_url.clone(), config.timeout)?);
    let api = PindropApi::new(transport, session);

    let start = cli.command.route().unwrap_or_else(|| LOGIN_PATH.to_string());
    let app = App::new(api, Arc::new(LocationNavigator::new(start)));

    let output = app.run(cli.command).await;
    tracing::debug!(location = %app.location(), "Command finished");
    let output = output?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
