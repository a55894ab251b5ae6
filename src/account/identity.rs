//! Address derivation and checksum normalization.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use thiserror::Error;

use crate::account::secret::SecretKey;

/// Errors raised while validating account identity material.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The secret key is not a well-formed 32-byte hex scalar on the curve.
    #[error("invalid secret key {0}")]
    InvalidCredential(String),

    /// The address is not a syntactically valid 20-byte hex string.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
}

/// Derive the sender address from a secret key.
///
/// The signer exists only for the duration of this call.
pub fn derive_address(secret: &SecretKey) -> Result<Address, IdentityError> {
    let hex = secret.expose().strip_prefix("0x").unwrap_or(secret.expose());
    let signer: PrivateKeySigner = hex
        .parse()
        .map_err(|_| IdentityError::InvalidCredential(secret.masked()))?;
    Ok(signer.address())
}

/// Parse an address string, accepting any letter casing.
pub fn checksum_address(raw: &str) -> Result<Address, IdentityError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|_| IdentityError::InvalidAddress(raw.to_string()))
}

/// Canonical EIP-55 checksummed form of an address.
pub fn to_checksum(address: &Address) -> String {
    address.to_checksum(None)
}
