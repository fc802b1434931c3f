//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the predictor.
//! All types derive Serde traits for deserialization from config files, and
//! every section defaults to the values the job has been running with in
//! production.

use serde::{Deserialize, Serialize};

/// Root configuration for the block predictor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PredictorConfig {
    /// Relay chain connection settings.
    pub chain: ChainConfig,

    /// Anchor for the linear block-time model.
    pub reference: ReferenceConfig,

    /// Future blocks to predict.
    pub targets: TargetsConfig,

    /// Secret store holding the webhook path.
    pub secrets: SecretsConfig,

    /// Outbound chat webhook.
    pub webhook: WebhookConfig,

    /// Offline mode: no secret, chain or HTTP calls.
    pub dry_run: DryRunConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Which chain head to read the height from.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChainHead {
    /// Best (possibly unfinalized) block.
    #[default]
    Best,
    /// Last finalized block.
    Finalized,
}

/// Relay chain RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// WebSocket JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Head used as the current block.
    pub head: ChainHead,

    /// Bound on connect and on each RPC request, in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "wss://polkadot.api.onfinality.io/public-ws".to_string(),
            head: ChainHead::Best,
            rpc_timeout_secs: 30,
        }
    }
}

/// Known (block, time) pair the extrapolation is anchored on.
///
/// Needs a manual bump every few months to keep the model accurate.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Reference block number.
    pub block_number: u64,

    /// Wall-clock time the reference block was observed, ms since epoch.
    pub timestamp_ms: i64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            block_number: 12_000_000,
            timestamp_ms: 1_662_888_774_011,
        }
    }
}

/// Target blocks announced by the job.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetsConfig {
    /// Block at which the auction starts.
    pub auction_start_block: u64,

    /// Block at which the lease period starts.
    pub lease_period_start_block: u64,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            auction_start_block: 13_374_400,
            lease_period_start_block: 14_238_400,
        }
    }
}

/// Secret store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecretsConfig {
    /// Name (id) of the secret.
    pub secret_name: String,

    /// Version stage to read.
    pub version_stage: String,

    /// AWS region of the secret store.
    pub region: String,

    /// JSON field of the secret holding the webhook path.
    pub webhook_field: String,

    /// Bound on the secret read, in seconds.
    pub timeout_secs: u64,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            secret_name: "SlackBlockPredictor".to_string(),
            version_stage: "AWSCURRENT".to_string(),
            region: "eu-central-1".to_string(),
            webhook_field: "Webhook".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Chat webhook configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Base URL; the resolved secret path is appended verbatim.
    pub base_url: String,

    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            base_url: "https://hooks.slack.com/services/".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Dry-run configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DryRunConfig {
    /// Skip every external call and only log the composed message.
    pub enabled: bool,

    /// Simulated chain height. Derived from the reference point when unset.
    pub current_block: Option<u64>,

    /// Block time used to derive the simulated height, in ms.
    pub nominal_block_time_ms: u64,
}

impl Default for DryRunConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            current_block: None,
            nominal_block_time_ms: 6_000,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_constants() {
        let config = PredictorConfig::default();
        assert_eq!(config.reference.block_number, 12_000_000);
        assert_eq!(config.reference.timestamp_ms, 1_662_888_774_011);
        assert_eq!(config.targets.auction_start_block, 13_374_400);
        assert_eq!(config.targets.lease_period_start_block, 14_238_400);
        assert_eq!(config.secrets.secret_name, "SlackBlockPredictor");
        assert!(!config.dry_run.enabled);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: PredictorConfig = toml::from_str(
            r#"
            [targets]
            auction_start_block = 20000000

            [chain]
            head = "finalized"
            "#,
        )
        .unwrap();

        assert_eq!(config.targets.auction_start_block, 20_000_000);
        assert_eq!(config.targets.lease_period_start_block, 14_238_400);
        assert_eq!(config.chain.head, ChainHead::Finalized);
        assert_eq!(config.chain.rpc_timeout_secs, 30);
    }

    #[test]
    fn test_log_format_parsing() {
        let config: PredictorConfig = toml::from_str(
            r#"
            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.observability.log_level, "info");
    }
}
