//! Command-line overrides layered on top of the config file.

use crate::config::schema::PredictorConfig;

/// Values given on the command line. Unset fields leave the file value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Force dry-run mode on.
    pub dry_run: bool,
    /// Simulated chain height for dry-run mode.
    pub current_block: Option<u64>,
    /// Replacement for `observability.log_level`.
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    /// Apply onto `config`. Validation is the caller's job, after merging.
    pub fn apply(&self, config: &mut PredictorConfig) {
        if self.dry_run {
            config.dry_run.enabled = true;
        }
        if let Some(block) = self.current_block {
            config.dry_run.current_block = Some(block);
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
    }
}
