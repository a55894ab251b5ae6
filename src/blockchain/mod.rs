//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! NetworkConfig (RPC URL, timeouts) + optional proxy
//!     → client.rs (provider construction, liveness probe)
//!     → ops.rs (the ChainOps seam the engine is written against)
//!     → fees.rs (EIP-1559 fee computation)
//!     → erc20.rs (token contract bindings)
//! ```
//!
//! # Security Constraints
//! - Secret keys enter only through `ChainOps::sign_and_send` and are
//!   dropped when the call returns
//! - All RPC calls have a per-request timeout
//! - Nonce is queried fresh before every submission

pub mod client;
pub mod erc20;
pub mod fees;
pub mod ops;
pub mod types;

pub use client::ChainClient;
pub use ops::ChainOps;
pub use types::{ChainError, ChainResult, Fees};
