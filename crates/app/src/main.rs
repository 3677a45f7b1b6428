//! Gradely command-line client
//!
//! Loads configuration, wires the reqwest transport and the file
//! credential store into an `ApiClient`, and runs one command.

mod cli;
mod commands;
mod logging;
mod navigator;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use gradely_application::{ApiClient, ApplicationError};
use gradely_infrastructure::{ClientConfig, FileCredentialStore, ReqwestTransport};
use tracing::{debug, error};

use crate::cli::Cli;
use crate::navigator::CliNavigator;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<ApplicationError>() {
                Some(app_error) => {
                    debug!(error = %app_error, "command failed");
                    eprintln!("{}", app_error.user_message());
                }
                None => error!("{e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::load(cli.config.as_deref())?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
        config.validate()?;
    }
    debug!(api_url = %config.api_url, "configuration loaded");

    let transport = ReqwestTransport::from_config(&config)?;
    let store = Arc::new(FileCredentialStore::new(config.credentials_path()?));
    let navigator = Arc::new(CliNavigator);
    let client = ApiClient::new(transport, store, navigator);

    cli.command.execute(&client).await
}
