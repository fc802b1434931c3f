//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap external calls (chain RPC, secret store) with a deadline
//! - Cancel operations cleanly on timeout
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors
//! - No retry on expiry; the caller decides what a timeout means

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// The wrapped operation did not finish within its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation timed out after {}s", .0.as_secs())]
pub struct TimedOut(pub Duration);

/// Run `fut`, failing with [`TimedOut`] if it takes longer than `limit`.
pub async fn bounded<F>(limit: Duration, fut: F) -> Result<F::Output, TimedOut>
where
    F: Future,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| TimedOut(limit))
}
