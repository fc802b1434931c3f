//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → logging.rs subscriber (text or JSON on stdout)
//!
//! Consumers:
//!     → scheduler / platform log capture
//! ```
//!
//! # Design Decisions
//! - Failures surface only in logs and the exit code
//! - The webhook path is never logged

pub mod logging;

pub use logging::init_logging;
