//! Lookup command implementation
//!
//! Looks a patient up in the EMPI through the configured service, so the
//! cache, fake mode and timeout all apply.

use super::{report, report_error};
use crate::adapters::empi::EmpiService;
use crate::cli::EXIT_NOT_FOUND;
use crate::config::ConciergeConfig;
use clap::Args;

/// Arguments for the lookup command
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Issuing authority code, such as NHS, 100 (EMPI) or 140 (Cardiff and Vale)
    #[arg(short, long, default_value = "NHS")]
    pub authority: String,

    /// Identifier to look up
    #[arg(short, long)]
    pub id: String,
}

impl LookupArgs {
    /// Execute the lookup command
    pub async fn execute(&self, config: &ConciergeConfig) -> anyhow::Result<i32> {
        tracing::info!(
            authority = %self.authority,
            environment = %config.empi.environment,
            fake = config.empi.fake,
            "Looking up patient"
        );

        let service = match EmpiService::from_config(&config.empi) {
            Ok(service) => service,
            Err(e) => return Ok(report_error(&e)),
        };

        match service.lookup(&self.authority, &self.id).await {
            Ok(None) => {
                eprintln!("No patient found for {}/{}", self.authority, self.id);
                Ok(EXIT_NOT_FOUND)
            }
            outcome => report(outcome.map(|patient| patient.unwrap_or_default())),
        }
    }
}
