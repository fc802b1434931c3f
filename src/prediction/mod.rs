//! Block-time prediction subsystem.
//!
//! # Data Flow
//! ```text
//! ReferencePoint (config) + Observation (chain height, clock)
//!     → engine.rs (average block time, linear projection)
//!     → Prediction (ms timestamps per target)
//!     → format.rs (UTC date strings)
//!     → message.rs (line selection by current block)
//!     → Option<String> chat message
//! ```
//!
//! Everything here is pure apart from [`SystemClock`].

pub mod clock;
pub mod engine;
pub mod format;
pub mod message;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{average_block_time_ms, predict, predict_at};
pub use format::format_utc;
pub use message::compose_message;
pub use types::{
    Observation, Prediction, PredictionError, PredictionResult, ReferencePoint, TargetBlocks,
};
