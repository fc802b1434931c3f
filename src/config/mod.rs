//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → overrides.rs (CLI values win over the file)
//!     → validation.rs (semantic checks, once on the merged config)
//!     → PredictorConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - Config is read once per invocation; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod overrides;
pub mod schema;
pub mod validation;

pub use loader::{load_with_overrides, parse_with_overrides, ConfigError};
pub use overrides::ConfigOverrides;
pub use schema::{
    ChainConfig, ChainHead, DryRunConfig, LogFormat, ObservabilityConfig, PredictorConfig,
    ReferenceConfig, SecretsConfig, TargetsConfig, WebhookConfig,
};
pub use validation::{validate_config, ValidationError};
