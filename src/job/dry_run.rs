//! Dry-run support: a simulated chain height and collaborators that refuse
//! to touch the network.

use crate::blockchain::{BlockHeightSource, ChainError, ChainResult};
use crate::config::PredictorConfig;
use crate::notify::{DeliveryError, DeliveryResult, Notifier};
use crate::secrets::{SecretError, SecretResult, SecretStore};

/// Chain height used in dry-run mode.
///
/// Uses `dry_run.current_block` when set, otherwise walks forward from the
/// reference point at `dry_run.nominal_block_time_ms`.
pub fn simulated_block(config: &PredictorConfig, now_ms: i64) -> u64 {
    if let Some(block) = config.dry_run.current_block {
        return block;
    }

    let elapsed_ms = now_ms.saturating_sub(config.reference.timestamp_ms).max(0) as u64;
    let blocks = elapsed_ms
        .checked_div(config.dry_run.nominal_block_time_ms)
        .unwrap_or(0);
    config.reference.block_number.saturating_add(blocks)
}

/// Stand-in for every external collaborator when running offline.
///
/// Each call fails; the job never makes one in dry-run mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl SecretStore for Offline {
    async fn secret_string(&self, name: &str, _version_stage: &str) -> SecretResult<String> {
        Err(SecretError::Store {
            name: name.to_string(),
            reason: "secret store disabled in dry-run mode".to_string(),
        })
    }
}

impl BlockHeightSource for Offline {
    async fn current_block(&self) -> ChainResult<u64> {
        Err(ChainError::Connect {
            url: String::new(),
            reason: "chain access disabled in dry-run mode".to_string(),
        })
    }
}

impl Notifier for Offline {
    async fn notify(&self, _path: &str, _text: &str) -> DeliveryResult<()> {
        Err(DeliveryError::Client(
            "webhook disabled in dry-run mode".to_string(),
        ))
    }
}
