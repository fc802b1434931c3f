//! Relay chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! ChainConfig (endpoint URL, head, timeout)
//!     → client.rs (WebSocket connect, JSON-RPC calls with timeouts)
//!     → types.rs (header decoding, hex block numbers)
//!     → current block number (u64)
//! ```
//!
//! # Constraints
//! - One connection per invocation, closed after the read
//! - All RPC calls have configurable timeouts
//! - No reconnection: any failure aborts the run

pub mod client;
pub mod types;

pub use client::{BlockHeightSource, ChainClient};
pub use types::{ChainError, ChainResult};
