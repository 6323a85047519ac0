//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Concierge using clap.

pub mod commands;

use crate::domain::{ConciergeError, EmpiError, IdentifierError};
use clap::{Parser, Subcommand};

/// Exit code for success
pub const EXIT_OK: i32 = 0;
/// Exit code when the identifier resolved to nothing
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit code for configuration errors
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for input rejected before any remote work
pub const EXIT_INVALID_INPUT: i32 = 3;
/// Exit code for EMPI timeouts, transport failures and malformed replies
pub const EXIT_REMOTE: i32 = 4;
/// Exit code for anything else
pub const EXIT_FATAL: i32 = 5;

/// Concierge - identifier resolution and EMPI lookup
#[derive(Parser, Debug)]
#[command(name = "concierge")]
#[command(version, about, long_about = None)]
#[command(author = "Concierge Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "concierge.toml", env = "CONCIERGE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "CONCIERGE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a patient in the EMPI by authority and identifier
    Lookup(commands::lookup::LookupArgs),

    /// Resolve an identifier within a registered system
    Resolve(commands::resolve::ResolveArgs),

    /// Map an identifier from one system into another
    Map(commands::map::MapArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}

/// Process exit code for a failed command
pub fn exit_code(error: &ConciergeError) -> i32 {
    match error {
        ConciergeError::Identifier(IdentifierError::NotFound { .. }) => EXIT_NOT_FOUND,
        ConciergeError::Configuration(_) => EXIT_CONFIG,
        ConciergeError::Identifier(
            IdentifierError::UnknownSystem(_) | IdentifierError::InvalidIdentifier(_),
        )
        | ConciergeError::Empi(EmpiError::InvalidAuthority(_))
        | ConciergeError::Validation(_) => EXIT_INVALID_INPUT,
        ConciergeError::Empi(_) => EXIT_REMOTE,
        _ => EXIT_FATAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lookup() {
        let cli = Cli::parse_from(["concierge", "lookup", "--id", "1234567890"]);
        assert_eq!(cli.config, "concierge.toml");
        match cli.command {
            Commands::Lookup(args) => {
                assert_eq!(args.authority, "NHS");
                assert_eq!(args.id, "1234567890");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["concierge", "--config", "custom.toml", "validate-config"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["concierge", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_map() {
        let cli = Cli::parse_from([
            "concierge",
            "map",
            "--system",
            "https://fhir.nhs.uk/STU3/CodeSystem/CareConnect-SDSJobRoleName-1",
            "--value",
            "R0050",
            "--target",
            "http://snomed.info/sct",
        ]);
        match cli.command {
            Commands::Map(args) => {
                assert_eq!(args.value, "R0050");
                assert_eq!(args.target, "http://snomed.info/sct");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_resolve_requires_value() {
        let result = Cli::try_parse_from(["concierge", "resolve", "--system", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            exit_code(&IdentifierError::not_found("s", "v").into()),
            EXIT_NOT_FOUND
        );
        assert_eq!(
            exit_code(&ConciergeError::Configuration("bad".into())),
            EXIT_CONFIG
        );
        assert_eq!(
            exit_code(&EmpiError::InvalidAuthority("ZZZ".into()).into()),
            EXIT_INVALID_INPUT
        );
        assert_eq!(
            exit_code(&IdentifierError::UnknownSystem("x".into()).into()),
            EXIT_INVALID_INPUT
        );
        assert_eq!(exit_code(&EmpiError::Timeout("2s".into()).into()), EXIT_REMOTE);
        assert_eq!(
            exit_code(&EmpiError::MalformedResponse("html".into()).into()),
            EXIT_REMOTE
        );
        assert_eq!(
            exit_code(&IdentifierError::DuplicateBinding("x".into()).into()),
            EXIT_FATAL
        );
    }
}
