//! Transfer outcome types.

use alloy::primitives::TxHash;

use crate::blockchain::types::ChainError;

/// Result of one transfer operation.
///
/// Only `Confirmed` lets the orchestrator proceed to the dependent next
/// action; a native transfer follows a token transfer only after the
/// token receipt reported success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Mined and the receipt reported success.
    Confirmed { tx_hash: TxHash },
    /// Not attempted; nothing was submitted.
    Skipped(SkipReason),
    /// Failed before submission, reverted on-chain, or never confirmed.
    Failed(FailReason),
}

impl Outcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Outcome::Confirmed { .. })
    }
}

/// Why a transfer was skipped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Sender and recipient are the same account.
    SelfTransfer,
    /// Token balance is zero.
    ZeroTokenBalance,
    /// Balance is below the dust threshold; not worth its gas cost.
    DustBalance,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::SelfTransfer => write!(f, "sender and recipient are the same address"),
            SkipReason::ZeroTokenBalance => write!(f, "token balance is zero"),
            SkipReason::DustBalance => write!(f, "balance is below the dust threshold"),
        }
    }
}

/// Why a transfer failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailReason {
    /// Native balance is zero; the account is dry.
    InsufficientBalance,
    /// The reserved gas cost exceeds the available balance.
    GasExceedsBalance,
    /// Mined but the receipt reported failure.
    Reverted { tx_hash: TxHash },
    /// Any chain-level fault: estimation, signing, submission, timeout.
    Chain(String),
}

impl std::fmt::Display for FailReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailReason::InsufficientBalance => write!(f, "insufficient balance"),
            FailReason::GasExceedsBalance => write!(f, "balance does not cover gas"),
            FailReason::Reverted { tx_hash } => write!(f, "transaction {} reverted", tx_hash),
            FailReason::Chain(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<ChainError> for FailReason {
    fn from(e: ChainError) -> Self {
        FailReason::Chain(e.to_string())
    }
}
