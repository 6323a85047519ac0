//! Resolve command implementation

use super::{report, report_error};
use crate::adapters::build_registry;
use crate::config::ConciergeConfig;
use crate::domain::Identifier;
use clap::Args;

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Identifier system URI
    #[arg(short, long)]
    pub system: String,

    /// Value within the system
    #[arg(short, long)]
    pub value: String,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub async fn execute(&self, config: &ConciergeConfig) -> anyhow::Result<i32> {
        let registry = match build_registry(&config.empi) {
            Ok(registry) => registry,
            Err(e) => return Ok(report_error(&e)),
        };

        let identifier = Identifier::new(&self.system, &self.value);
        let outcome = registry.resolve(&identifier).await;
        if outcome.is_ok() {
            crate::log_resolution!(identifier, true);
        }
        report(outcome)
    }
}
