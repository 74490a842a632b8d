//! vitae - account and report store CLI
//!
//! # Examples
//!
//! ```bash
//! vitae register --email ana@example.com --password s3cret --name Ana
//! vitae login --email ana@example.com --password s3cret
//! vitae report submit --kind harassment --description "..." --pretty
//! ```

use vitae_cli::{App, Cli, Result as CliErrorResult, logger};

use std::process::ExitCode;

use clap::Parser;
use log::info;
use vitae_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<ExitCode> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting vitae v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = App::open(&config).await?;
    let outcome = app.execute(cli.command).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&outcome.value)?
    } else {
        serde_json::to_string(&outcome.value)?
    };
    println!("{json}");

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
