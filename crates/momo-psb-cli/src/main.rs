//! momo-psb: command-line front-end for the MTN MoMo collection API.
//!
//! Results go to stdout; logs and errors go to stderr.

use std::process::ExitCode;

use clap::Parser;
use momo_psb::PaymentClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod handlers;
mod output;

use commands::Cli;
use error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so clap's env fallbacks see values from .env
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // A response was received; the provider's answer is the result.
        Err(e) if e.is_remote() => {
            eprintln!("Error: {e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = PaymentClient::new(&cli.base_url, &cli.subscription_key)?;
    tracing::debug!(base_url = %client.config().base_url(), "client ready");
    let mut stdout = std::io::stdout().lock();
    handlers::execute(&client, cli.command, &mut stdout).await
}
