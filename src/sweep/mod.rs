//! Sweep subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<Account> + BatchConfig
//!     → orchestrator.rs (sequential per-account workflow, pacing)
//!     → engine.rs (token transfer, then native transfer)
//!     → outcome.rs (confirmed / skipped / failed per operation)
//!     → delay.rs (randomized inter-action and inter-account pauses)
//! ```
//!
//! # Design Decisions
//! - Strictly sequential; accounts are never processed concurrently
//! - A failed operation ends that account's remaining workflow early
//! - No operation is ever retried after submission

pub mod delay;
pub mod engine;
pub mod orchestrator;
pub mod outcome;

pub use engine::TransferEngine;
pub use orchestrator::{BatchSummary, ClientFactory, Orchestrator, RpcClientFactory};
pub use outcome::{FailReason, Outcome, SkipReason};
