//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SweeperConfig (validated, immutable)
//!     → shared by reference with the orchestrator
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Delay bounds and the shuffle toggle are prompted interactively,
//!   not read from file (see `crate::prompt`)

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{InputConfig, NetworkConfig, SweeperConfig, TokenConfig};
