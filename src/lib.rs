//! Relay chain block-time predictor.
//!
//! Reads the current relay chain height, extrapolates when the auction-start
//! and lease-period-start blocks will be reached, and posts the prediction
//! to a chat webhook. One run per invocation.

// Core pipeline
pub mod blockchain;
pub mod job;
pub mod notify;
pub mod prediction;
pub mod secrets;

// Cross-cutting concerns
pub mod config;
pub mod observability;
pub mod resilience;

pub use config::schema::PredictorConfig;
pub use job::{Job, JobError, JobOutcome};
