//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! External call (chain RPC, secret read)
//!     → timeouts.rs (deadline enforcement)
//!     → Ok(result) | Err(TimedOut)
//! ```
//!
//! # Design Decisions
//! - Deadlines only: a failed run is left to the next scheduled trigger
//! - No retries, backoff or circuit breaking

pub mod timeouts;

pub use timeouts::{bounded, TimedOut};
