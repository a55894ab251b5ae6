//! Chain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint, optionally through an HTTP proxy
//! - Query chain state (balances, nonce, fee suggestions)
//! - Estimate, sign, submit, and confirm transactions
//! - Handle timeouts and network errors gracefully

use std::time::Duration;

use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::RpcClient;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
// alloy's re-exported reqwest: the proxy-aware client and the HTTP
// transport must come from the same crate version.
use alloy::transports::http::{reqwest, Http};
use async_trait::async_trait;
use tokio::time::{interval, timeout};

use crate::account::SecretKey;
use crate::blockchain::erc20::IERC20;
use crate::blockchain::ops::ChainOps;
use crate::blockchain::types::{ChainError, ChainResult};
use crate::config::schema::NetworkConfig;

/// Chain RPC client bound to one endpoint and one token contract.
pub struct ChainClient {
    provider: DynProvider,
    token: IERC20::IERC20Instance<DynProvider>,
    token_address: Address,
    rpc_url: String,
    request_timeout: Duration,
}

impl ChainClient {
    /// Build a client without probing the endpoint.
    ///
    /// Used internally by [`ChainClient::connect`] and by tests that
    /// never touch the network.
    pub fn new(
        network: &NetworkConfig,
        token_address: Address,
        proxy: Option<&str>,
    ) -> ChainResult<Self> {
        let url: url::Url = network.rpc_url.parse().map_err(|e| {
            ChainError::Connection(format!("invalid RPC URL '{}': {}", network.rpc_url, e))
        })?;

        let request_timeout = Duration::from_secs(network.rpc_timeout_secs);
        let mut builder = reqwest::Client::builder().timeout(request_timeout);
        if let Some(proxy_url) = proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                ChainError::Connection(format!("invalid proxy '{}': {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }
        let http_client = builder
            .build()
            .map_err(|e| ChainError::Connection(e.to_string()))?;

        let transport = Http::with_client(http_client, url);
        let provider = ProviderBuilder::new()
            .connect_client(RpcClient::new(transport, false))
            .erased();
        let token = IERC20::new(token_address, provider.clone());

        Ok(Self {
            provider,
            token,
            token_address,
            rpc_url: network.rpc_url.clone(),
            request_timeout,
        })
    }

    /// Build a client and probe the endpoint for liveness.
    ///
    /// Fails with [`ChainError::Connection`] when the probe does not
    /// succeed immediately.
    pub async fn connect(
        network: &NetworkConfig,
        token_address: Address,
        proxy: Option<&str>,
    ) -> ChainResult<Self> {
        let client = Self::new(network, token_address, proxy)?;

        client
            .with_timeout(client.provider.get_block_number())
            .await
            .map_err(|e| ChainError::Connection(format!("liveness probe failed: {}", e)))?;

        tracing::info!(
            rpc_url = %network.rpc_url,
            proxied = proxy.is_some(),
            "Chain client connected"
        );
        Ok(client)
    }

    // IntoFuture rather than Future: provider getters and contract
    // calls return lazy builder types that only become futures on
    // await, and tokio's timeout accepts those directly.
    async fn with_timeout<T, E, F>(&self, fut: F) -> ChainResult<T>
    where
        E: std::fmt::Display,
        F: std::future::IntoFuture<Output = Result<T, E>>,
        F::IntoFuture: Send,
    {
        match timeout(self.request_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ChainError::Rpc(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.request_timeout.as_secs())),
        }
    }
}

#[async_trait]
impl ChainOps for ChainClient {
    async fn native_balance(&self, address: Address) -> ChainResult<U256> {
        self.with_timeout(self.provider.get_balance(address)).await
    }

    async fn token_balance(&self, address: Address) -> ChainResult<U256> {
        let call = self.token.balanceOf(address);
        self.with_timeout(call.call()).await
    }

    async fn token_decimals(&self) -> ChainResult<u8> {
        let call = self.token.decimals();
        self.with_timeout(call.call()).await
    }

    async fn chain_id(&self) -> ChainResult<u64> {
        self.with_timeout(self.provider.get_chain_id()).await
    }

    async fn nonce(&self, address: Address) -> ChainResult<u64> {
        self.with_timeout(self.provider.get_transaction_count(address))
            .await
    }

    async fn gas_price(&self) -> ChainResult<u128> {
        self.with_timeout(self.provider.get_gas_price()).await
    }

    async fn max_priority_fee(&self) -> ChainResult<u128> {
        self.with_timeout(self.provider.get_max_priority_fee_per_gas())
            .await
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> ChainResult<u64> {
        match timeout(self.request_timeout, self.provider.estimate_gas(tx.clone())).await {
            Ok(Ok(gas)) => Ok(gas),
            Ok(Err(e)) => Err(ChainError::Estimation(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.request_timeout.as_secs())),
        }
    }

    async fn sign_and_send(
        &self,
        tx: TransactionRequest,
        secret: &SecretKey,
    ) -> ChainResult<TxHash> {
        // The signer lives only for this call.
        let hex = secret.expose().strip_prefix("0x").unwrap_or(secret.expose());
        let signer: PrivateKeySigner = hex
            .parse()
            .map_err(|_| ChainError::Signing(format!("invalid key material {}", secret.masked())))?;
        let wallet = EthereumWallet::from(signer);

        let envelope = tx
            .build(&wallet)
            .await
            .map_err(|e| ChainError::Signing(e.to_string()))?;
        let encoded = envelope.encoded_2718();

        match timeout(
            self.request_timeout,
            self.provider.send_raw_transaction(&encoded),
        )
        .await
        {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ChainError::Submission(e.to_string())),
            Err(_) => Err(ChainError::Timeout(self.request_timeout.as_secs())),
        }
    }

    async fn await_receipt(
        &self,
        tx_hash: TxHash,
        timeout_secs: u64,
        poll_secs: u64,
    ) -> ChainResult<bool> {
        let result = timeout(Duration::from_secs(timeout_secs), async {
            let mut ticker = interval(Duration::from_secs(poll_secs));
            loop {
                ticker.tick().await;
                match self.provider.get_transaction_receipt(tx_hash).await {
                    Ok(Some(receipt)) => return receipt.status(),
                    Ok(None) => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                    }
                    Err(e) => {
                        tracing::warn!(tx_hash = %tx_hash, error = %e, "Receipt query failed");
                    }
                }
            }
        })
        .await;

        match result {
            Ok(status) => Ok(status),
            Err(_) => Err(ChainError::ConfirmationTimeout(timeout_secs)),
        }
    }

    fn token_address(&self) -> Address {
        self.token_address
    }
}

impl std::fmt::Debug for ChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainClient")
            .field("rpc_url", &self.rpc_url)
            .field("token_address", &self.token_address)
            .field("timeout_secs", &self.request_timeout.as_secs())
            .finish()
    }
}
