//! Engine and orchestrator behavior against a mocked chain.

use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash, TxKind, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use sweeper::account::{Account, SecretKey};
use sweeper::blockchain::erc20::IERC20;
use sweeper::blockchain::{fees, ChainError, ChainOps, ChainResult};
use sweeper::config::schema::NetworkConfig;
use sweeper::config::SweeperConfig;
use sweeper::lifecycle::Interrupt;
use sweeper::prompt::BatchConfig;
use sweeper::sweep::{ClientFactory, Orchestrator, Outcome, SkipReason, TransferEngine};
use sweeper::sweep::FailReason;

// Anvil's first two well-known accounts
const KEY_A: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const KEY_B: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

/// In-memory chain double. Clones share the submission log, so a
/// factory can hand out per-account copies while the test inspects one.
#[derive(Clone)]
struct MockChain {
    native: U256,
    token: U256,
    decimals: u8,
    gas_price: u128,
    priority_fee: u128,
    gas_estimate: u64,
    receipt_status: bool,
    fail_native_balance: bool,
    fail_token_balance: bool,
    fail_decimals: bool,
    token_addr: Address,
    sent: Arc<Mutex<Vec<TransactionRequest>>>,
}

impl Default for MockChain {
    fn default() -> Self {
        Self {
            native: U256::ZERO,
            token: U256::ZERO,
            decimals: 6,
            gas_price: 1_000_000_000,
            priority_fee: 100_000_000,
            gas_estimate: 21_000,
            receipt_status: true,
            fail_native_balance: false,
            fail_token_balance: false,
            fail_decimals: false,
            token_addr: Address::repeat_byte(0xcc),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl MockChain {
    fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainOps for MockChain {
    async fn native_balance(&self, _address: Address) -> ChainResult<U256> {
        if self.fail_native_balance {
            return Err(ChainError::Rpc("native balance unavailable".to_string()));
        }
        Ok(self.native)
    }

    async fn token_balance(&self, _address: Address) -> ChainResult<U256> {
        if self.fail_token_balance {
            return Err(ChainError::Rpc("token balance unavailable".to_string()));
        }
        Ok(self.token)
    }

    async fn token_decimals(&self) -> ChainResult<u8> {
        if self.fail_decimals {
            return Err(ChainError::Rpc("decimals unavailable".to_string()));
        }
        Ok(self.decimals)
    }

    async fn chain_id(&self) -> ChainResult<u64> {
        Ok(42161)
    }

    async fn nonce(&self, _address: Address) -> ChainResult<u64> {
        // Fresh per call: advances with every accepted submission
        Ok(self.sent.lock().unwrap().len() as u64)
    }

    async fn gas_price(&self) -> ChainResult<u128> {
        Ok(self.gas_price)
    }

    async fn max_priority_fee(&self) -> ChainResult<u128> {
        Ok(self.priority_fee)
    }

    async fn estimate_gas(&self, _tx: &TransactionRequest) -> ChainResult<u64> {
        Ok(self.gas_estimate)
    }

    async fn sign_and_send(
        &self,
        tx: TransactionRequest,
        _secret: &SecretKey,
    ) -> ChainResult<TxHash> {
        self.sent.lock().unwrap().push(tx);
        Ok(TxHash::repeat_byte(0xab))
    }

    async fn await_receipt(
        &self,
        _tx_hash: TxHash,
        _timeout_secs: u64,
        _poll_secs: u64,
    ) -> ChainResult<bool> {
        Ok(self.receipt_status)
    }

    fn token_address(&self) -> Address {
        self.token_addr
    }
}

struct MockFactory {
    chain: MockChain,
}

#[async_trait]
impl ClientFactory for MockFactory {
    type Client = MockChain;

    async fn connect(&self, _account: &Account) -> ChainResult<MockChain> {
        Ok(self.chain.clone())
    }
}

fn engine_for(chain: &MockChain) -> TransferEngine<MockChain> {
    TransferEngine::new(chain.clone(), &NetworkConfig::default(), "USDT".to_string())
}

fn zero_delays() -> BatchConfig {
    BatchConfig {
        min_account_delay: 0,
        max_account_delay: 0,
        min_action_delay: 0,
        max_action_delay: 0,
        shuffle_accounts: false,
    }
}

fn account(key: &str) -> Account {
    Account::new(
        SecretKey::new(key),
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        None,
    )
    .unwrap()
}

#[tokio::test]
async fn self_transfer_is_skipped_without_signing() {
    let chain = MockChain {
        token: U256::from(5_000_000u64),
        native: U256::from(10u128.pow(16)),
        ..MockChain::default()
    };
    let engine = engine_for(&chain);
    let secret = SecretKey::new(KEY_A);

    // Same address spelled with different casing still matches.
    let upper: Address = "0xFB6916095CA1DF60BB79CE92CE3EA74C37C5D359".parse().unwrap();
    let lower: Address = "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359".parse().unwrap();

    let token = engine.transfer_token(upper, lower, &secret).await;
    let native = engine.transfer_native(upper, lower, &secret).await;

    assert_eq!(token, Outcome::Skipped(SkipReason::SelfTransfer));
    assert_eq!(native, Outcome::Skipped(SkipReason::SelfTransfer));
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn token_balance_below_dust_is_skipped() {
    // 6-decimal token: threshold is 1000 base units
    let chain = MockChain {
        token: U256::from(999u64),
        ..MockChain::default()
    };
    let engine = engine_for(&chain);

    let outcome = engine
        .transfer_token(
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            &SecretKey::new(KEY_A),
        )
        .await;

    assert_eq!(outcome, Outcome::Skipped(SkipReason::DustBalance));
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn token_balance_at_dust_threshold_proceeds() {
    let chain = MockChain {
        token: U256::from(1000u64),
        ..MockChain::default()
    };
    let engine = engine_for(&chain);
    let recipient = Address::repeat_byte(0x22);

    let outcome = engine
        .transfer_token(Address::repeat_byte(0x11), recipient, &SecretKey::new(KEY_A))
        .await;

    assert!(outcome.is_confirmed());
    let sent = chain.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, Some(TxKind::Call(chain.token_addr)));

    let expected = IERC20::transferCall {
        to: recipient,
        amount: U256::from(1000u64),
    }
    .abi_encode();
    assert_eq!(sent[0].input.input().unwrap().as_ref(), expected.as_slice());
}

#[tokio::test]
async fn failed_decimals_read_still_sweeps_the_full_balance() {
    // Decimals drive only the dust check and log formatting; losing
    // them must not lose funds.
    let chain = MockChain {
        token: U256::from(5_000_000u64),
        fail_decimals: true,
        ..MockChain::default()
    };
    let engine = engine_for(&chain);
    let recipient = Address::repeat_byte(0x22);

    let outcome = engine
        .transfer_token(Address::repeat_byte(0x11), recipient, &SecretKey::new(KEY_A))
        .await;

    assert!(outcome.is_confirmed());
    let sent = chain.sent();
    assert_eq!(sent.len(), 1);
    let expected = IERC20::transferCall {
        to: recipient,
        amount: U256::from(5_000_000u64),
    }
    .abi_encode();
    assert_eq!(sent[0].input.input().unwrap().as_ref(), expected.as_slice());
}

#[tokio::test]
async fn failed_balance_query_fails_without_submitting() {
    let chain = MockChain {
        fail_token_balance: true,
        fail_native_balance: true,
        ..MockChain::default()
    };
    let engine = engine_for(&chain);
    let sender = Address::repeat_byte(0x11);
    let recipient = Address::repeat_byte(0x22);
    let secret = SecretKey::new(KEY_A);

    assert!(matches!(
        engine.transfer_token(sender, recipient, &secret).await,
        Outcome::Failed(FailReason::Chain(_))
    ));
    assert!(matches!(
        engine.transfer_native(sender, recipient, &secret).await,
        Outcome::Failed(FailReason::Chain(_))
    ));
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn zero_token_balance_is_a_skip_but_zero_native_is_a_failure() {
    let chain = MockChain::default();
    let engine = engine_for(&chain);
    let sender = Address::repeat_byte(0x11);
    let recipient = Address::repeat_byte(0x22);
    let secret = SecretKey::new(KEY_A);

    assert_eq!(
        engine.transfer_token(sender, recipient, &secret).await,
        Outcome::Skipped(SkipReason::ZeroTokenBalance)
    );
    assert_eq!(
        engine.transfer_native(sender, recipient, &secret).await,
        Outcome::Failed(FailReason::InsufficientBalance)
    );
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn native_sweep_reserves_one_and_a_half_times_gas() {
    let balance = U256::from(10u128.pow(16)); // 0.01 native units
    let chain = MockChain {
        native: balance,
        ..MockChain::default()
    };
    let engine = engine_for(&chain);
    let recipient = Address::repeat_byte(0x22);

    let outcome = engine
        .transfer_native(Address::repeat_byte(0x11), recipient, &SecretKey::new(KEY_A))
        .await;
    assert!(outcome.is_confirmed());

    let quote = fees::compute(chain.gas_price, chain.priority_fee);
    let gas_cost = U256::from(quote.max_fee) * U256::from(chain.gas_estimate)
        * U256::from(3u8)
        / U256::from(2u8);
    let expected = balance - gas_cost;

    let sent = chain.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, Some(TxKind::Call(recipient)));
    assert_eq!(sent[0].value, Some(expected));
    assert!(expected < balance);
}

#[tokio::test]
async fn native_sweep_fails_when_gas_exceeds_balance() {
    let chain = MockChain {
        // Exactly the dust threshold, so the dust check passes
        native: U256::from(10u128.pow(15)),
        // Absurd fee market: reservation dwarfs the balance
        gas_price: 10u128.pow(12),
        ..MockChain::default()
    };
    let engine = engine_for(&chain);

    let outcome = engine
        .transfer_native(
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            &SecretKey::new(KEY_A),
        )
        .await;

    assert_eq!(outcome, Outcome::Failed(FailReason::GasExceedsBalance));
    assert!(chain.sent().is_empty());
}

#[tokio::test]
async fn full_sweep_moves_token_then_reserved_native() {
    let chain = MockChain {
        token: U256::from(5_000_000u64),
        native: U256::from(10u128.pow(16)),
        ..MockChain::default()
    };
    let factory = MockFactory {
        chain: chain.clone(),
    };
    let orchestrator = Orchestrator::new(
        factory,
        SweeperConfig::default(),
        zero_delays(),
        Interrupt::new(),
    );

    let summary = orchestrator.process_batch(vec![account(KEY_A)]).await;
    assert_eq!(summary.processed, 1);
    assert_eq!(summary.skipped, 0);

    let sent = chain.sent();
    assert_eq!(sent.len(), 2, "token transfer then native transfer");

    // First submission: the full token balance, no native value
    assert_eq!(sent[0].to, Some(TxKind::Call(chain.token_addr)));
    let expected = IERC20::transferCall {
        to: account(KEY_A).recipient,
        amount: U256::from(5_000_000u64),
    }
    .abi_encode();
    assert_eq!(sent[0].input.input().unwrap().as_ref(), expected.as_slice());
    assert!(sent[0].value.is_none());

    // Second submission: strictly less than the starting balance
    let value = sent[1].value.unwrap();
    assert!(value < U256::from(10u128.pow(16)));
    assert!(value > U256::ZERO);
}

#[tokio::test]
async fn native_sweep_requires_confirmed_token_sweep() {
    let chain = MockChain {
        token: U256::from(5_000_000u64),
        native: U256::from(10u128.pow(16)),
        receipt_status: false, // token transfer reverts
        ..MockChain::default()
    };
    let factory = MockFactory {
        chain: chain.clone(),
    };
    let orchestrator = Orchestrator::new(
        factory,
        SweeperConfig::default(),
        zero_delays(),
        Interrupt::new(),
    );

    orchestrator.process_batch(vec![account(KEY_A)]).await;

    let sent = chain.sent();
    assert_eq!(sent.len(), 1, "native transfer must not follow a revert");
    assert_eq!(sent[0].to, Some(TxKind::Call(chain.token_addr)));
}

#[tokio::test]
async fn invalid_key_is_skip_logged_and_batch_continues() {
    let chain = MockChain::default();
    let factory = MockFactory {
        chain: chain.clone(),
    };
    let orchestrator = Orchestrator::new(
        factory,
        SweeperConfig::default(),
        zero_delays(),
        Interrupt::new(),
    );

    let bad = Account {
        secret: SecretKey::new("definitely-not-a-key"),
        sender: Address::repeat_byte(0x33),
        recipient: Address::repeat_byte(0x44),
        proxy: None,
    };
    let summary = orchestrator
        .process_batch(vec![account(KEY_A), bad, account(KEY_B)])
        .await;

    assert_eq!(summary.total, 3);
    assert_eq!(summary.processed, 2);
    assert_eq!(summary.skipped, 1);
    assert!(!summary.interrupted);
}

#[tokio::test]
async fn interrupt_stops_before_the_next_account() {
    let chain = MockChain::default();
    let factory = MockFactory {
        chain: chain.clone(),
    };
    let interrupt = Interrupt::new();
    interrupt.trigger();
    let orchestrator = Orchestrator::new(
        factory,
        SweeperConfig::default(),
        zero_delays(),
        interrupt,
    );

    let summary = orchestrator
        .process_batch(vec![account(KEY_A), account(KEY_B)])
        .await;

    assert!(summary.interrupted);
    assert_eq!(summary.processed, 0);
    assert!(chain.sent().is_empty());
}
