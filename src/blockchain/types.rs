//! Chain-specific types and error definitions.

use thiserror::Error;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// Liveness probe against the RPC endpoint failed at connect time.
    #[error("connection error: {0}")]
    Connection(String),

    /// RPC request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// The node rejected the speculative transaction during estimation.
    #[error("gas estimation rejected: {0}")]
    Estimation(String),

    /// Signing failed (bad key material or incomplete request).
    #[error("signing failed: {0}")]
    Signing(String),

    /// Broadcast of the signed transaction failed.
    #[error("submission failed: {0}")]
    Submission(String),

    /// Transaction was not mined within the confirmation window.
    #[error("transaction not confirmed within {0} seconds")]
    ConfirmationTimeout(u64),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Priority fee and fee cap for one EIP-1559 transaction, in wei per gas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fees {
    pub priority_fee: u128,
    pub max_fee: u128,
}
