//! FitDash command-line entry point
//!
//! Stores a profile and a daily meal plan on disk, then reports calorie and
//! macro targets, meal plan scores and a weekly workout plan.

use clap::Parser;
use fitdash_cli::{
    commands::{self, Cli},
    config::{AppConfig, LogConfig, LogFormat},
    error::CliError,
    state::AppState,
};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let err = CliError::from(e);
            eprintln!("{}", err);
            return ExitCode::from(err.exit_code());
        }
    };
    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.clone();
    }
    if cli.json {
        config.output.json = true;
    }

    init_tracing(&config.log);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        data_dir = %config.storage.data_dir.display(),
        "Starting fitdash"
    );

    let state = AppState::new(config);
    match commands::execute(&state, &cli.command) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initialize tracing/logging on stderr so stdout stays parseable
fn init_tracing(log: &LogConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log.level.as_str().into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match log.format {
        LogFormat::Json => subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init(),
    }
}
