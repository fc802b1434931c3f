//! Secret store access.
//!
//! # Responsibilities
//! - Read one secret version from AWS Secrets Manager
//! - Resolve the webhook path from the secret's JSON payload
//!
//! # Design Decisions
//! - The SDK client is built per run; nothing is cached
//! - The read is bounded by `secrets.timeout_secs`
//! - No retry and no fallback value

use std::future::Future;
use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::error::DisplayErrorContext;

use crate::config::SecretsConfig;
use crate::resilience::bounded;
use crate::secrets::types::{extract_field, SecretError, SecretResult};

/// Source of secret strings.
pub trait SecretStore {
    /// Fetch the string value of secret `name` at `version_stage`.
    fn secret_string(
        &self,
        name: &str,
        version_stage: &str,
    ) -> impl Future<Output = SecretResult<String>> + Send;
}

/// AWS Secrets Manager backed store.
#[derive(Clone, Debug)]
pub struct AwsSecretStore {
    client: aws_sdk_secretsmanager::Client,
    timeout_duration: Duration,
}

impl AwsSecretStore {
    /// Build a client for the configured region using the default credential chain.
    pub async fn new(config: &SecretsConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            client: aws_sdk_secretsmanager::Client::new(&sdk_config),
            timeout_duration: Duration::from_secs(config.timeout_secs),
        }
    }
}

impl SecretStore for AwsSecretStore {
    async fn secret_string(&self, name: &str, version_stage: &str) -> SecretResult<String> {
        let request = self
            .client
            .get_secret_value()
            .secret_id(name)
            .version_stage(version_stage)
            .send();

        let output = bounded(self.timeout_duration, request)
            .await
            .map_err(|_| SecretError::Timeout(self.timeout_duration.as_secs()))?
            .map_err(|e| SecretError::Store {
                name: name.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        output
            .secret_string()
            .map(str::to_owned)
            .ok_or_else(|| SecretError::NotAString(name.to_string()))
    }
}

/// Resolve the webhook path suffix from the configured secret.
pub async fn resolve_webhook_path<S>(store: &S, config: &SecretsConfig) -> SecretResult<String>
where
    S: SecretStore,
{
    let secret = store
        .secret_string(&config.secret_name, &config.version_stage)
        .await?;
    let path = extract_field(&config.secret_name, &secret, &config.webhook_field)?;

    tracing::debug!(secret_name = %config.secret_name, "Resolved webhook path");
    Ok(path)
}
