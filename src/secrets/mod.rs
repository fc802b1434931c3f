//! Credential resolution subsystem.
//!
//! # Data Flow
//! ```text
//! SecretsConfig (name, version stage, region, field)
//!     → store.rs (GetSecretValue)
//!     → types.rs (JSON payload → field)
//!     → webhook path suffix
//! ```
//!
//! # Security Constraints
//! - The webhook path is a credential: never log it
//! - Skipped entirely in dry-run mode

pub mod store;
pub mod types;

pub use store::{resolve_webhook_path, AwsSecretStore, SecretStore};
pub use types::{SecretError, SecretResult};
