// Concierge - Identifier resolution and EMPI lookup
// Copyright (c) 2025 Concierge Contributors
// Licensed under the MIT License

use concierge::cli::{Cli, Commands, EXIT_CONFIG, EXIT_FATAL};
use concierge::config::{load_config_or_default, ConciergeConfig, LoggingConfig};
use concierge::logging::{init_logging, warn_on_proxy_settings};
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // validate-config reports on the file itself, so it only needs console logging
    if let Commands::ValidateConfig(args) = &cli.command {
        let log_level = cli.log_level.as_deref().unwrap_or("info");
        let _guard = init_or_exit(log_level, &LoggingConfig::default());
        let code = args.execute(&cli.config).await.unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            EXIT_FATAL
        });
        process::exit(code);
    }

    let config = match load_config_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(EXIT_CONFIG);
        }
    };

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.application.log_level.clone());
    let guard = init_or_exit(&log_level, &config.logging);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Concierge - identifier resolution and EMPI lookup"
    );
    warn_on_proxy_settings();

    let exit_code = match execute_command(&cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // process::exit skips destructors, so flush the file writer first
    drop(guard);
    process::exit(exit_code);
}

fn init_or_exit(log_level: &str, config: &LoggingConfig) -> concierge::logging::LoggingGuard {
    match init_logging(log_level, config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &ConciergeConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Lookup(args) => args.execute(config).await,
        Commands::Resolve(args) => args.execute(config).await,
        Commands::Map(args) => args.execute(config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
    }
}
