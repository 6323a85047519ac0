//! Map command implementation

use super::{report, report_error};
use crate::adapters::build_registry;
use crate::config::ConciergeConfig;
use crate::domain::Identifier;
use clap::Args;

/// Arguments for the map command
#[derive(Args, Debug)]
pub struct MapArgs {
    /// Source identifier system URI
    #[arg(short, long)]
    pub system: String,

    /// Value within the source system
    #[arg(short, long)]
    pub value: String,

    /// Target identifier system URI
    #[arg(short, long)]
    pub target: String,
}

impl MapArgs {
    /// Execute the map command
    pub async fn execute(&self, config: &ConciergeConfig) -> anyhow::Result<i32> {
        let registry = match build_registry(&config.empi) {
            Ok(registry) => registry,
            Err(e) => return Ok(report_error(&e)),
        };

        let identifier = Identifier::new(&self.system, &self.value);
        tracing::debug!(source = %identifier, target = %self.target, "Mapping identifier");
        report(registry.map(&identifier, &self.target).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{EXIT_INVALID_INPUT, EXIT_NOT_FOUND, EXIT_OK};
    use crate::domain::ids::{SDS_JOB_ROLE_NAME, SNOMED_CT};

    fn args(system: &str, value: &str, target: &str) -> MapArgs {
        MapArgs {
            system: system.to_string(),
            value: value.to_string(),
            target: target.to_string(),
        }
    }

    #[tokio::test]
    async fn test_map_exit_codes() {
        let config = ConciergeConfig::default();
        assert_eq!(
            args(SDS_JOB_ROLE_NAME, "R0050", SNOMED_CT)
                .execute(&config)
                .await
                .unwrap(),
            EXIT_OK
        );
        assert_eq!(
            args(SNOMED_CT, "22298006", SDS_JOB_ROLE_NAME)
                .execute(&config)
                .await
                .unwrap(),
            EXIT_NOT_FOUND
        );
        assert_eq!(
            args(SNOMED_CT, "768839009", SDS_JOB_ROLE_NAME)
                .execute(&config)
                .await
                .unwrap(),
            EXIT_INVALID_INPUT
        );
    }
}
