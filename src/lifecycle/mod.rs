//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signal (Ctrl-C / SIGINT):
//!     interrupt.rs sets a shared flag
//!     → the orchestrator checks it before starting each account
//!     → the batch stops cleanly between accounts
//! ```
//!
//! # Design Decisions
//! - An interrupt never cuts an in-flight transfer: the current
//!   account's operation completes or times out, so no inconsistent
//!   state is broadcast

pub mod interrupt;

pub use interrupt::Interrupt;
