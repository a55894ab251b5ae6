//! Batch orchestration.
//!
//! Strictly sequential: one account is fully processed, both operations
//! and both confirmations, before the next begins. Sequential on-chain
//! activity avoids nonce contention across accounts that may share
//! infrastructure.

use alloy::primitives::Address;
use async_trait::async_trait;

use crate::account::Account;
use crate::blockchain::client::ChainClient;
use crate::blockchain::ops::ChainOps;
use crate::blockchain::types::{ChainError, ChainResult};
use crate::config::schema::SweeperConfig;
use crate::lifecycle::Interrupt;
use crate::network;
use crate::prompt::BatchConfig;
use crate::sweep::delay;
use crate::sweep::engine::TransferEngine;

/// Builds a chain client for one account. The seam that lets tests
/// drive the orchestrator without a network.
#[async_trait]
pub trait ClientFactory: Send + Sync {
    type Client: ChainOps;

    async fn connect(&self, account: &Account) -> ChainResult<Self::Client>;
}

/// Production factory: resolves the account's proxy, then connects to
/// the configured RPC endpoint.
pub struct RpcClientFactory {
    config: SweeperConfig,
    token_address: Address,
}

impl RpcClientFactory {
    pub fn new(config: SweeperConfig) -> ChainResult<Self> {
        let token_address = config
            .token
            .contract_address
            .parse()
            .map_err(|_| {
                ChainError::Connection(format!(
                    "invalid token contract address '{}'",
                    config.token.contract_address
                ))
            })?;
        Ok(Self {
            config,
            token_address,
        })
    }
}

#[async_trait]
impl ClientFactory for RpcClientFactory {
    type Client = ChainClient;

    async fn connect(&self, account: &Account) -> ChainResult<ChainClient> {
        let proxy = network::resolve_proxy(account.proxy.as_deref()).await;
        ChainClient::connect(&self.config.network, self.token_address, proxy.as_deref()).await
    }
}

/// How one account left the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    /// The workflow ran, whatever its transfer outcomes were.
    Completed,
    /// The secret key failed the format precheck; nothing ran.
    SkippedInvalidKey,
}

/// Count-based batch summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub processed: usize,
    pub skipped: usize,
    pub interrupted: bool,
}

/// Iterates the batch, one account at a time.
pub struct Orchestrator<F> {
    factory: F,
    config: SweeperConfig,
    batch: BatchConfig,
    interrupt: Interrupt,
}

impl<F: ClientFactory> Orchestrator<F> {
    pub fn new(factory: F, config: SweeperConfig, batch: BatchConfig, interrupt: Interrupt) -> Self {
        Self {
            factory,
            config,
            batch,
            interrupt,
        }
    }

    /// Run the guarded workflow for one account.
    ///
    /// Every account produces exactly one start and one finish log line
    /// regardless of outcome; no fault here ever reaches the batch loop.
    pub async fn process_account(&self, account: &Account) -> AccountStatus {
        if !account.secret.has_valid_format() {
            tracing::error!(
                key = %account.secret.masked(),
                "Invalid secret key format, account skipped"
            );
            return AccountStatus::SkippedInvalidKey;
        }

        tracing::info!(sender = %account.sender, "Start work with account");

        match self.factory.connect(account).await {
            Err(e) => {
                tracing::error!(
                    sender = %account.sender,
                    error = %e,
                    "Chain unreachable, account processing aborted"
                );
            }
            Ok(client) => {
                let engine = TransferEngine::new(
                    client,
                    &self.config.network,
                    self.config.token.symbol.clone(),
                );

                let token_outcome = engine
                    .transfer_token(account.sender, account.recipient, &account.secret)
                    .await;

                // The native sweep depends on a confirmed token sweep.
                if token_outcome.is_confirmed() {
                    delay::pause_between_actions(
                        self.batch.min_action_delay,
                        self.batch.max_action_delay,
                    )
                    .await;
                    engine
                        .transfer_native(account.sender, account.recipient, &account.secret)
                        .await;
                }
            }
        }

        tracing::info!(sender = %account.sender, "Finish work with account");
        AccountStatus::Completed
    }

    /// Process the whole batch, pausing between accounts and honoring
    /// operator interrupts between them.
    pub async fn process_batch(&self, mut accounts: Vec<Account>) -> BatchSummary {
        tracing::info!("{}", "=".repeat(80));
        tracing::info!(count = accounts.len(), "Found accounts to process");
        tracing::info!("{}", "=".repeat(80));

        if self.batch.shuffle_accounts {
            delay::shuffle_accounts(&mut accounts, &mut rand::thread_rng());
        }

        let mut summary = BatchSummary {
            total: accounts.len(),
            ..BatchSummary::default()
        };
        let last = accounts.len().saturating_sub(1);

        for (i, account) in accounts.iter().enumerate() {
            if self.interrupt.is_triggered() {
                tracing::warn!("Interrupt received, stopping before the next account");
                summary.interrupted = true;
                break;
            }

            match self.process_account(account).await {
                AccountStatus::Completed => summary.processed += 1,
                AccountStatus::SkippedInvalidKey => summary.skipped += 1,
            }

            if i < last && !self.interrupt.is_triggered() {
                delay::pause_between_accounts(
                    self.batch.min_account_delay,
                    self.batch.max_account_delay,
                )
                .await;
            }
        }

        tracing::info!(
            total = summary.total,
            processed = summary.processed,
            skipped = summary.skipped,
            interrupted = summary.interrupted,
            "Finished processing batch"
        );
        summary
    }
}
