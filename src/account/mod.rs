//! Account subsystem.
//!
//! # Data Flow
//! ```text
//! Input files (keys, proxies, recipients)
//!     → loader.rs (line-oriented parsing, per-record validation)
//!     → identity.rs (address derivation, checksum normalization)
//!     → Account (immutable, one per input record)
//! ```
//!
//! # Security Constraints
//! - Secret keys live only inside [`SecretKey`], which redacts itself
//!   in Debug output and exposes a masked preview for logging
//! - Raw key material is handed out only at the signing call site

pub mod identity;
pub mod loader;
pub mod secret;

use alloy::primitives::Address;

pub use identity::IdentityError;
pub use secret::SecretKey;

/// One funds source to drain: a secret key, its derived sender address,
/// the sweep destination, and an optional HTTP proxy descriptor.
#[derive(Debug, Clone)]
pub struct Account {
    /// Secret key material. Never logged in cleartext.
    pub secret: SecretKey,
    /// Sender address derived from the secret key.
    pub sender: Address,
    /// Destination address, checksummed at construction.
    pub recipient: Address,
    /// Optional `host:port` proxy descriptor; `None` means direct.
    pub proxy: Option<String>,
}

impl Account {
    /// Build an account from one input record.
    ///
    /// Fails if the recipient is not a valid address or the secret key
    /// does not derive to one. The batch loader skips failing records.
    pub fn new(
        secret: SecretKey,
        recipient: &str,
        proxy: Option<String>,
    ) -> Result<Self, IdentityError> {
        let recipient = identity::checksum_address(recipient)?;
        let sender = identity::derive_address(&secret)?;
        Ok(Self {
            secret,
            sender,
            recipient,
            proxy,
        })
    }
}
