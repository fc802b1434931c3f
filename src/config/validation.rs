//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the reference point sits before both targets
//! - Validate URLs and value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PredictorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use url::Url;

use crate::config::schema::PredictorConfig;
use crate::observability::logging::LOG_LEVELS;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &PredictorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url(
        &mut errors,
        "chain.rpc_url",
        &config.chain.rpc_url,
        &["ws", "wss"],
    );
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::new("chain.rpc_timeout_secs", "must be greater than 0"));
    }

    let reference = &config.reference;
    if reference.block_number == 0 {
        errors.push(ValidationError::new("reference.block_number", "must be greater than 0"));
    }
    if reference.timestamp_ms <= 0 {
        errors.push(ValidationError::new("reference.timestamp_ms", "must be greater than 0"));
    }

    let targets = &config.targets;
    if targets.auction_start_block <= reference.block_number {
        errors.push(ValidationError::new(
            "targets.auction_start_block",
            format!(
                "{} must be after reference block {}",
                targets.auction_start_block, reference.block_number
            ),
        ));
    }
    if targets.lease_period_start_block <= reference.block_number {
        errors.push(ValidationError::new(
            "targets.lease_period_start_block",
            format!(
                "{} must be after reference block {}",
                targets.lease_period_start_block, reference.block_number
            ),
        ));
    }
    if targets.auction_start_block > targets.lease_period_start_block {
        errors.push(ValidationError::new(
            "targets.auction_start_block",
            "must not be after targets.lease_period_start_block",
        ));
    }

    if config.secrets.secret_name.trim().is_empty() {
        errors.push(ValidationError::new("secrets.secret_name", "must not be empty"));
    }
    if config.secrets.webhook_field.trim().is_empty() {
        errors.push(ValidationError::new("secrets.webhook_field", "must not be empty"));
    }
    if config.secrets.timeout_secs == 0 {
        errors.push(ValidationError::new("secrets.timeout_secs", "must be greater than 0"));
    }

    check_url(
        &mut errors,
        "webhook.base_url",
        &config.webhook.base_url,
        &["http", "https"],
    );
    if config.webhook.timeout_secs == 0 {
        errors.push(ValidationError::new("webhook.timeout_secs", "must be greater than 0"));
    }

    if let Some(block) = config.dry_run.current_block {
        if block <= reference.block_number {
            errors.push(ValidationError::new(
                "dry_run.current_block",
                format!("{} must be after reference block {}", block, reference.block_number),
            ));
        }
    }
    if config.dry_run.nominal_block_time_ms == 0 {
        errors.push(ValidationError::new(
            "dry_run.nominal_block_time_ms",
            "must be greater than 0",
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("'{}' not one of {:?}", config.observability.log_level, LOG_LEVELS),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str, schemes: &[&str]) {
    match Url::parse(value) {
        Ok(url) if schemes.contains(&url.scheme()) => {}
        Ok(url) => errors.push(ValidationError::new(
            field,
            format!("scheme '{}' not one of {:?}", url.scheme(), schemes),
        )),
        Err(e) => errors.push(ValidationError::new(field, format!("invalid URL '{}': {}", value, e))),
    }
}
