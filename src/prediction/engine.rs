//! Two-point linear extrapolation of block times.
//!
//! The rate is taken from the line through the reference point and the
//! current observation:
//!
//! ```text
//! rate_ms_per_block = (now_ms - reference_ms) / (current_block - reference_block)
//! predicted(target) = now_ms + rate_ms_per_block * (target - current_block)
//! ```
//!
//! No smoothing or outlier rejection: block production is assumed to be
//! locally constant between the reference point and now.

use crate::prediction::types::{
    Observation, Prediction, PredictionError, PredictionResult, ReferencePoint, TargetBlocks,
};

/// Average milliseconds per block between `reference` and `observation`.
pub fn average_block_time_ms(
    reference: ReferencePoint,
    observation: Observation,
) -> PredictionResult<f64> {
    if observation.block_number <= reference.block_number
        || observation.timestamp_ms <= reference.timestamp_ms
    {
        return Err(PredictionError::InvalidReference {
            reference_block: reference.block_number,
            reference_ms: reference.timestamp_ms,
            current_block: observation.block_number,
            current_ms: observation.timestamp_ms,
        });
    }

    let elapsed_ms = (observation.timestamp_ms - reference.timestamp_ms) as f64;
    let elapsed_blocks = (observation.block_number - reference.block_number) as f64;
    Ok(elapsed_ms / elapsed_blocks)
}

/// Project the time of `target` along a known rate.
///
/// Targets behind the observation land in the past; fractional milliseconds
/// are truncated toward zero.
pub fn project(observation: Observation, rate_ms_per_block: f64, target: u64) -> i64 {
    let blocks_ahead = target as f64 - observation.block_number as f64;
    (observation.timestamp_ms as f64 + rate_ms_per_block * blocks_ahead).trunc() as i64
}

/// Predict the wall-clock time at which `target` is reached.
pub fn predict_at(
    reference: ReferencePoint,
    observation: Observation,
    target: u64,
) -> PredictionResult<i64> {
    let rate = average_block_time_ms(reference, observation)?;
    Ok(project(observation, rate, target))
}

/// Predict both target blocks from one observation.
pub fn predict(
    reference: ReferencePoint,
    observation: Observation,
    targets: TargetBlocks,
) -> PredictionResult<Prediction> {
    let rate = average_block_time_ms(reference, observation)?;

    Ok(Prediction {
        average_block_time_ms: rate,
        auction_start_ms: project(observation, rate, targets.auction_start),
        lease_period_start_ms: project(observation, rate, targets.lease_period_start),
    })
}
