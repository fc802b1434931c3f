//! Notification delivery subsystem.
//!
//! # Data Flow
//! ```text
//! composed message + resolved webhook path
//!     → webhook.rs (JSON POST)
//!     → chat channel
//! ```

pub mod webhook;

pub use webhook::{DeliveryError, DeliveryResult, Notifier, WebhookNotifier, WebhookPayload};
