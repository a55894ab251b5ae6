//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → console (ANSI, real-time)
//!     → timestamped log file (plain text)
//! ```
//!
//! # Design Decisions
//! - Initialized once before orchestration starts
//! - Log level configurable via RUST_LOG
//! - Secret material never reaches a log line; only masked previews do

pub mod logging;

pub use logging::init;
