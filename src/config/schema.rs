//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! sweeper. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the sweeper.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SweeperConfig {
    /// Chain/RPC endpoint settings.
    pub network: NetworkConfig,

    /// Token contract settings.
    pub token: TokenConfig,

    /// Input file locations.
    pub inputs: InputConfig,
}

/// Chain/RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Block-explorer base URL, used only to format transaction links.
    pub explorer_url: String,

    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Maximum time to wait for a transaction receipt, in seconds.
    pub confirm_timeout_secs: u64,

    /// Receipt poll interval in seconds.
    pub poll_interval_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://1rpc.io/arb".to_string(),
            explorer_url: "https://arbiscan.io/".to_string(),
            rpc_timeout_secs: 30,
            confirm_timeout_secs: 120,
            poll_interval_secs: 10,
        }
    }
}

/// Token contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenConfig {
    /// ERC-20 contract address of the token to sweep.
    pub contract_address: String,

    /// Display symbol for log lines.
    pub symbol: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            // USDT on Arbitrum One
            contract_address: "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9".to_string(),
            symbol: "USDT".to_string(),
        }
    }
}

/// Input file locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// File with one secret key per line.
    pub keys_path: String,

    /// File with one proxy descriptor per line (blank = direct).
    pub proxies_path: String,

    /// File with one recipient address per line.
    pub recipients_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            keys_path: "user_data/wallets.txt".to_string(),
            proxies_path: "user_data/proxies.txt".to_string(),
            recipients_path: "user_data/recipients.txt".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SweeperConfig::default();
        assert_eq!(config.network.confirm_timeout_secs, 120);
        assert_eq!(config.network.poll_interval_secs, 10);
        assert!(config.network.explorer_url.ends_with('/'));
        assert_eq!(config.token.symbol, "USDT");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: SweeperConfig = toml::from_str(
            r#"
            [network]
            rpc_url = "http://localhost:8545"
            "#,
        )
        .unwrap();
        assert_eq!(config.network.rpc_url, "http://localhost:8545");
        assert_eq!(config.network.confirm_timeout_secs, 120);
        assert_eq!(config.inputs.keys_path, "user_data/wallets.txt");
    }
}
