use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod commands;

use nip05_register::config::Config;
use nip05_register::defaults::Defaults;
use nip05_register::logging::{init_logging, LogFormat};

use crate::cli::{Cli, Command};
use crate::commands::submit::Overrides;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env();

    let (level, format) = match &config {
        Ok(c) => (c.log_level.as_str(), c.log_format.as_str()),
        Err(_) => (Defaults::LOG_LEVEL, Defaults::LOG_FORMAT),
    };
    init_logging(level, LogFormat::from_str_lossy(format));

    match cli.cmd {
        Command::Decode { input } => {
            commands::decode::run(&input)?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Normalize { input } => commands::normalize::run(&input),

        Command::Submit {
            input,
            owner,
            repo,
            api_url,
        } => {
            let config = config.context("loading configuration from environment")?;
            commands::submit::run(
                config,
                &input,
                Overrides {
                    owner,
                    repo,
                    api_url,
                },
            )
            .await
        }

        Command::Npub { hex } => {
            commands::npub::run(&hex)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
