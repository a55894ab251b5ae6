//! EVM batch fund sweeper library.
//!
//! Drains a list of source accounts to designated recipients: for each
//! account the full token balance first, then the native balance with a
//! gas reservation, paced by randomized delays and optionally routed
//! through per-account HTTP proxies.

pub mod account;
pub mod blockchain;
pub mod config;
pub mod lifecycle;
pub mod network;
pub mod observability;
pub mod prompt;
pub mod sweep;

pub use account::{Account, SecretKey};
pub use blockchain::{ChainClient, ChainOps};
pub use config::SweeperConfig;
pub use lifecycle::Interrupt;
pub use sweep::{Orchestrator, TransferEngine};
