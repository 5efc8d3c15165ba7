// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use readable::{CliArg, ReadableConfig, run_command, try_initialize_logging_global};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_arg = CliArg::parse();
    let config = ReadableConfig::resolve(&cli_arg.global_options);

    if let Some(tracing_config) = config.tracing_config.clone() {
        try_initialize_logging_global(tracing_config)?;
    }

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "Start logging...",
        command = ?cli_arg.command,
        api_url = %config.api_url
    );

    let result = run_command(cli_arg.command, config).await;

    if let Err(ref error) = result {
        tracing::error!(message = "Command failed", error = ?error);
    }

    result
}
