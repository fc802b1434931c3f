//! Block predictor (v1)
//!
//! One-shot job: started by an external scheduler, runs once, exits.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────┐   ┌──────────┐   ┌────────────┐   ┌────────────┐   ┌─────────┐
//!   │  config  │──▶│ secrets  │──▶│ blockchain │──▶│ prediction │──▶│ notify  │──▶ webhook
//!   │ TOML+CLI │   │ (AWS SM) │   │ (WS RPC)   │   │ (linear)   │   │ (POST)  │
//!   └──────────┘   └──────────┘   └────────────┘   └────────────┘   └─────────┘
//!                        dry-run skips secrets, chain and notify
//! ```
//!
//! Exit status is non-zero whenever the run fails.

use std::path::PathBuf;

use clap::Parser;

use block_predictor::blockchain::ChainClient;
use block_predictor::config::{load_with_overrides, ConfigOverrides};
use block_predictor::job::{Job, JobOutcome, Offline};
use block_predictor::notify::WebhookNotifier;
use block_predictor::observability::init_logging;
use block_predictor::prediction::SystemClock;
use block_predictor::secrets::AwsSecretStore;

#[derive(Parser)]
#[command(name = "block-predictor")]
#[command(about = "Predict relay chain auction and lease period start times", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults are used when omitted.
    #[arg(short, long, env = "BLOCK_PREDICTOR_CONFIG")]
    config: Option<PathBuf>,

    /// Skip the secret store, chain and webhook; only log the message.
    #[arg(long)]
    dry_run: bool,

    /// Simulated chain height, used when dry-run is on (flag or file).
    #[arg(long)]
    current_block: Option<u64>,

    /// Override `observability.log_level`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            dry_run: self.dry_run,
            current_block: self.current_block,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_with_overrides(cli.config.as_deref(), &cli.overrides())?;

    init_logging(&config.observability)?;

    tracing::info!(
        rpc_url = %config.chain.rpc_url,
        reference_block = config.reference.block_number,
        auction_start_block = config.targets.auction_start_block,
        lease_period_start_block = config.targets.lease_period_start_block,
        dry_run = config.dry_run.enabled,
        "Configuration loaded"
    );

    let outcome = if config.dry_run.enabled {
        Job::new(config, Offline, Offline, Offline, SystemClock)
            .run()
            .await?
    } else {
        let secrets = AwsSecretStore::new(&config.secrets).await;
        let chain = ChainClient::new(config.chain.clone())?;
        let notifier = WebhookNotifier::new(&config.webhook)?;
        Job::new(config, secrets, chain, notifier, SystemClock)
            .run()
            .await?
    };

    match &outcome {
        JobOutcome::Dispatched { .. } => tracing::info!("Run complete, prediction dispatched"),
        JobOutcome::DryRun { .. } => tracing::info!("Run complete, dry run"),
        JobOutcome::Skipped { current_block } => {
            tracing::info!(current_block = *current_block, "Run complete, nothing to announce")
        }
    }
    Ok(())
}
