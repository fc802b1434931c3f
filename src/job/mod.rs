//! Invocation orchestration.
//!
//! # Data Flow
//! ```text
//! trigger (process start)
//!     → secrets (webhook path)          skipped in dry-run
//!     → blockchain (current block)      simulated in dry-run
//!     → prediction (times, message)
//!     → notify (POST)                   skipped in dry-run or after the lease start
//! ```
//!
//! # Design Decisions
//! - Strict program order; every external call is awaited before the next
//! - Any error aborts the run; there is no partial success
//! - Collaborators are generic so tests can substitute fakes

pub mod dry_run;

use thiserror::Error;

use crate::blockchain::{BlockHeightSource, ChainError};
use crate::config::PredictorConfig;
use crate::notify::{DeliveryError, Notifier};
use crate::prediction::{
    compose_message, format_utc, predict, Clock, Observation, PredictionError, ReferencePoint,
    TargetBlocks,
};
use crate::secrets::{resolve_webhook_path, SecretError, SecretStore};

pub use dry_run::{simulated_block, Offline};

/// Reasons a run fails.
#[derive(Debug, Error)]
pub enum JobError {
    /// Webhook credential could not be resolved.
    #[error("Credential retrieval failed: {0}")]
    Retrieval(#[from] SecretError),

    /// Chain height could not be read.
    #[error("Chain connection failed: {0}")]
    Connection(#[from] ChainError),

    /// Observation inconsistent with the reference point.
    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictionError),

    /// Message could not be posted.
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Message posted to the webhook.
    Dispatched { message: String },
    /// Message composed and logged only.
    DryRun { message: String },
    /// Lease period already started; nothing to announce.
    Skipped { current_block: u64 },
}

/// One invocation of the predictor.
pub struct Job<S, C, N, K> {
    config: PredictorConfig,
    secrets: S,
    chain: C,
    notifier: N,
    clock: K,
}

impl<S, C, N, K> Job<S, C, N, K>
where
    S: SecretStore,
    C: BlockHeightSource,
    N: Notifier,
    K: Clock,
{
    /// Create a job from a validated configuration and its collaborators.
    pub fn new(config: PredictorConfig, secrets: S, chain: C, notifier: N, clock: K) -> Self {
        Self {
            config,
            secrets,
            chain,
            notifier,
            clock,
        }
    }

    /// Run the full sequence once.
    pub async fn run(&self) -> Result<JobOutcome, JobError> {
        let dry_run = self.config.dry_run.enabled;
        tracing::info!(dry_run, "Block predictor executed");

        let webhook_path = if dry_run {
            String::new()
        } else {
            resolve_webhook_path(&self.secrets, &self.config.secrets)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Block predictor exception"))?
        };

        let observation = if dry_run {
            let now = self.clock.now_ms();
            Observation {
                block_number: simulated_block(&self.config, now),
                timestamp_ms: now,
            }
        } else {
            let block_number = self.chain.current_block().await?;
            Observation {
                block_number,
                timestamp_ms: self.clock.now_ms(),
            }
        };

        let targets = TargetBlocks::from(&self.config.targets);
        let prediction = predict(
            ReferencePoint::from(&self.config.reference),
            observation,
            targets,
        )?;

        let auction_start = format_utc(prediction.auction_start_ms)?;
        let lease_period_start = format_utc(prediction.lease_period_start_ms)?;
        tracing::info!(
            current_block = observation.block_number,
            average_block_time_ms = prediction.average_block_time_ms,
            %auction_start,
            %lease_period_start,
            "Predicted time"
        );

        let Some(message) = compose_message(observation.block_number, targets, &prediction)? else {
            tracing::info!(
                current_block = observation.block_number,
                lease_period_start = targets.lease_period_start,
                "Lease period already started, nothing to send"
            );
            return Ok(JobOutcome::Skipped {
                current_block: observation.block_number,
            });
        };

        if dry_run {
            tracing::info!(%message, "Dry run, message not sent");
            return Ok(JobOutcome::DryRun { message });
        }

        self.notifier.notify(&webhook_path, &message).await?;
        Ok(JobOutcome::Dispatched { message })
    }
}
