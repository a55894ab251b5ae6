//! Per-account transfer operations.
//!
//! # Responsibilities
//! - Drain the token balance, then the native balance, of one account
//! - Balance checks and dust-threshold rejection before any submission
//! - Gas-cost reservation math for the native sweep
//! - Shared submit-and-confirm protocol with outcome conversion
//!
//! Failure before submission costs nothing; failure after submission is
//! terminal for that operation. There is no automatic retry: a
//! resubmission could double-spend intent or race nonces.

use alloy::network::TransactionBuilder;
use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, Bytes, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::account::SecretKey;
use crate::blockchain::erc20::IERC20;
use crate::blockchain::ops::ChainOps;
use crate::blockchain::fees;
use crate::blockchain::types::{ChainResult, Fees};
use crate::config::schema::NetworkConfig;
use crate::sweep::outcome::{FailReason, Outcome, SkipReason};

/// Fixed dust threshold for the native sweep: 0.001 of the native unit.
const NATIVE_DUST_WEI: u128 = 1_000_000_000_000_000;

/// Skip token transfers under ~0.001 token.
pub fn token_dust_threshold(decimals: u8) -> U256 {
    U256::from(10u8).pow(U256::from(decimals.saturating_sub(3)))
}

/// Executes the two sweep operations for one account.
pub struct TransferEngine<C> {
    chain: C,
    token_symbol: String,
    explorer_url: String,
    confirm_timeout_secs: u64,
    poll_interval_secs: u64,
}

impl<C: ChainOps> TransferEngine<C> {
    pub fn new(chain: C, network: &NetworkConfig, token_symbol: String) -> Self {
        Self {
            chain,
            token_symbol,
            explorer_url: network.explorer_url.clone(),
            confirm_timeout_secs: network.confirm_timeout_secs,
            poll_interval_secs: network.poll_interval_secs,
        }
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Transfer the entire token balance of `sender` to `recipient`.
    pub async fn transfer_token(
        &self,
        sender: Address,
        recipient: Address,
        secret: &SecretKey,
    ) -> Outcome {
        if sender == recipient {
            tracing::warn!(sender = %sender, "Recipient equals sender, token transfer skipped");
            return Outcome::Skipped(SkipReason::SelfTransfer);
        }

        let balance = match self.chain.token_balance(sender).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::error!(sender = %sender, error = %e, "Token balance query failed");
                return Outcome::Failed(e.into());
            }
        };
        if balance.is_zero() {
            tracing::warn!(
                sender = %sender,
                token = %self.token_symbol,
                "No token balance to transfer"
            );
            return Outcome::Skipped(SkipReason::ZeroTokenBalance);
        }

        // Decimals are for the dust check and log formatting only; a
        // failed read keeps the raw balance and continues.
        match self.chain.token_decimals().await {
            Ok(decimals) => {
                if balance < token_dust_threshold(decimals) {
                    tracing::warn!(
                        sender = %sender,
                        balance = %balance,
                        "Token balance below dust threshold, skipped"
                    );
                    return Outcome::Skipped(SkipReason::DustBalance);
                }
                if let Ok(human) = format_units(balance, decimals) {
                    tracing::info!(
                        sender = %sender,
                        balance = %human,
                        token = %self.token_symbol,
                        "Transferring full token balance"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    sender = %sender,
                    error = %e,
                    "Could not read token decimals, continuing with raw balance"
                );
            }
        }

        let (tx, _fees) = match self.base_request(sender).await {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::error!(sender = %sender, error = %e, "Token transfer preparation failed");
                return Outcome::Failed(e.into());
            }
        };
        let data = IERC20::transferCall {
            to: recipient,
            amount: balance,
        }
        .abi_encode();
        let tx = tx
            .with_to(self.chain.token_address())
            .with_input(Bytes::from(data));

        let gas = match self.chain.estimate_gas(&tx).await {
            Ok(gas) => gas,
            Err(e) => {
                tracing::error!(sender = %sender, error = %e, "Token transfer estimation failed");
                return Outcome::Failed(e.into());
            }
        };
        let tx = tx.with_gas_limit(gas);

        self.send_and_confirm("token transfer", tx, secret).await
    }

    /// Transfer the native balance of `sender` to `recipient`, reserving
    /// enough to cover gas.
    pub async fn transfer_native(
        &self,
        sender: Address,
        recipient: Address,
        secret: &SecretKey,
    ) -> Outcome {
        if sender == recipient {
            tracing::warn!(sender = %sender, "Recipient equals sender, native transfer skipped");
            return Outcome::Skipped(SkipReason::SelfTransfer);
        }

        let balance = match self.chain.native_balance(sender).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::error!(sender = %sender, error = %e, "Native balance query failed");
                return Outcome::Failed(e.into());
            }
        };
        // Zero native balance is a failure, not a skip: this is the
        // second, dependent step, and its absence means the account is
        // truly dry.
        if balance.is_zero() {
            tracing::error!(sender = %sender, "Insufficient native balance to transfer");
            return Outcome::Failed(FailReason::InsufficientBalance);
        }
        if balance < U256::from(NATIVE_DUST_WEI) {
            tracing::warn!(
                sender = %sender,
                balance = %balance,
                "Native balance below dust threshold, skipped"
            );
            return Outcome::Skipped(SkipReason::DustBalance);
        }

        let (tx, fees) = match self.base_request(sender).await {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::error!(sender = %sender, error = %e, "Native transfer preparation failed");
                return Outcome::Failed(e.into());
            }
        };
        let tx = tx.with_to(recipient);

        let gas = match self.chain.estimate_gas(&tx).await {
            Ok(gas) => gas,
            Err(e) => {
                tracing::error!(sender = %sender, error = %e, "Native transfer estimation failed");
                return Outcome::Failed(e.into());
            }
        };

        // Reserve 1.5x the estimated cost against fee-market movement
        // between estimation and inclusion.
        let gas_cost = U256::from(fees.max_fee) * U256::from(gas) * U256::from(3u8) / U256::from(2u8);
        let value = balance.saturating_sub(gas_cost);
        if value.is_zero() {
            tracing::error!(
                sender = %sender,
                balance = %balance,
                gas_cost = %gas_cost,
                "Native balance does not cover gas"
            );
            return Outcome::Failed(FailReason::GasExceedsBalance);
        }
        let tx = tx.with_gas_limit(gas).with_value(value);

        self.send_and_confirm("native transfer", tx, secret).await
    }

    /// Fee quote, fresh chain id, and fresh nonce for one submission.
    async fn base_request(&self, sender: Address) -> ChainResult<(TransactionRequest, Fees)> {
        let fees = fees::quote(&self.chain).await?;
        let chain_id = self.chain.chain_id().await?;
        let nonce = self.chain.nonce(sender).await?;
        let tx = TransactionRequest::default()
            .with_from(sender)
            .with_nonce(nonce)
            .with_chain_id(chain_id)
            .with_max_priority_fee_per_gas(fees.priority_fee)
            .with_max_fee_per_gas(fees.max_fee);
        Ok((tx, fees))
    }

    async fn send_and_confirm(
        &self,
        label: &str,
        tx: TransactionRequest,
        secret: &SecretKey,
    ) -> Outcome {
        let tx_hash = match self.chain.sign_and_send(tx, secret).await {
            Ok(tx_hash) => tx_hash,
            Err(e) => {
                tracing::error!(error = %e, "Error during {}", label);
                return Outcome::Failed(e.into());
            }
        };

        tracing::info!(
            tx_hash = %tx_hash,
            timeout_secs = self.confirm_timeout_secs,
            "Sent {}, waiting for confirmation",
            label
        );
        match self
            .chain
            .await_receipt(tx_hash, self.confirm_timeout_secs, self.poll_interval_secs)
            .await
        {
            Ok(true) => {
                tracing::info!("Successful {}: {}tx/{}", label, self.explorer_url, tx_hash);
                Outcome::Confirmed { tx_hash }
            }
            Ok(false) => {
                tracing::error!("Reverted {}: {}tx/{}", label, self.explorer_url, tx_hash);
                Outcome::Failed(FailReason::Reverted { tx_hash })
            }
            Err(e) => {
                tracing::error!(error = %e, "{} was not confirmed", label);
                Outcome::Failed(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_dust_threshold() {
        // 0.001 of a 6-decimal token
        assert_eq!(token_dust_threshold(6), U256::from(1000));
        assert_eq!(token_dust_threshold(18), U256::from(10u128.pow(15)));
        // Degenerate low-decimal tokens clamp to one base unit
        assert_eq!(token_dust_threshold(2), U256::from(1));
        assert_eq!(token_dust_threshold(0), U256::from(1));
    }

    #[test]
    fn test_native_dust_is_a_milliunit() {
        assert_eq!(U256::from(NATIVE_DUST_WEI), U256::from(10u128.pow(15)));
    }
}
