//! fieldspeak - turn validation failures into readable messages

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use cli::Cli;
use config::{load_dotenv, Settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    load_dotenv();
    let settings = Settings::from_env()?;

    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_directive())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    tracing::debug!(environment = %settings.environment(), "starting");

    Cli::parse().execute(&settings)
}
