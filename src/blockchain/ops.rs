//! The RPC seam the transfer engine is written against.

use alloy::primitives::{Address, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use crate::account::SecretKey;
use crate::blockchain::types::ChainResult;

/// Chain reads and writes needed by the transfer engine.
///
/// Implemented by [`crate::blockchain::ChainClient`] against a live RPC
/// endpoint, and by hand-rolled mocks in tests. Nonce and gas queries
/// always hit the chain fresh; nothing here caches across calls.
#[async_trait]
pub trait ChainOps: Send + Sync {
    /// Native-currency balance in wei.
    async fn native_balance(&self, address: Address) -> ChainResult<U256>;

    /// Balance of the configured token, in token base units.
    async fn token_balance(&self, address: Address) -> ChainResult<U256>;

    /// Decimals of the configured token.
    async fn token_decimals(&self) -> ChainResult<u8>;

    /// Chain identifier for EIP-155 replay protection.
    async fn chain_id(&self) -> ChainResult<u64>;

    /// Current transaction count for an address. Never cached: each
    /// call may follow a submission that advanced the nonce.
    async fn nonce(&self, address: Address) -> ChainResult<u64>;

    /// Current gas price suggestion in wei.
    async fn gas_price(&self) -> ChainResult<u128>;

    /// Current priority fee suggestion in wei.
    async fn max_priority_fee(&self) -> ChainResult<u128>;

    /// Simulate the transaction and return its gas limit.
    async fn estimate_gas(&self, tx: &TransactionRequest) -> ChainResult<u64>;

    /// Sign with the supplied secret and broadcast. The secret is used
    /// only for the duration of this call.
    async fn sign_and_send(&self, tx: TransactionRequest, secret: &SecretKey)
        -> ChainResult<TxHash>;

    /// Block until the transaction is mined or the timeout elapses.
    /// Returns the receipt's success status.
    async fn await_receipt(
        &self,
        tx_hash: TxHash,
        timeout_secs: u64,
        poll_secs: u64,
    ) -> ChainResult<bool>;

    /// Address of the configured token contract.
    fn token_address(&self) -> Address;
}
