//! Prediction inputs, outputs and errors.

use thiserror::Error;

use crate::config::{ReferenceConfig, TargetsConfig};

/// A known (block, time) pair anchoring the linear model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePoint {
    pub block_number: u64,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

impl From<&ReferenceConfig> for ReferencePoint {
    fn from(config: &ReferenceConfig) -> Self {
        Self {
            block_number: config.block_number,
            timestamp_ms: config.timestamp_ms,
        }
    }
}

/// The freshly read chain height and the time it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub block_number: u64,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

/// The two blocks the job announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetBlocks {
    pub auction_start: u64,
    pub lease_period_start: u64,
}

impl From<&TargetsConfig> for TargetBlocks {
    fn from(config: &TargetsConfig) -> Self {
        Self {
            auction_start: config.auction_start_block,
            lease_period_start: config.lease_period_start_block,
        }
    }
}

/// Predicted wall-clock times, in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Average block time the projection used.
    pub average_block_time_ms: f64,
    pub auction_start_ms: i64,
    pub lease_period_start_ms: i64,
}

/// Errors from the prediction engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// The current observation does not lie strictly after the reference point.
    #[error(
        "observation (block {current_block}, {current_ms} ms) must be after reference \
         (block {reference_block}, {reference_ms} ms)"
    )]
    InvalidReference {
        reference_block: u64,
        reference_ms: i64,
        current_block: u64,
        current_ms: i64,
    },

    /// A predicted time falls outside the representable calendar.
    #[error("timestamp {0} ms is out of range")]
    TimestampOutOfRange(i64),
}

/// Result type for prediction operations.
pub type PredictionResult<T> = Result<T, PredictionError>;
