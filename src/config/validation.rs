//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, poll interval fits the window)
//! - Validate URL and address syntax up front, not at first use
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SweeperConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;

use crate::config::schema::SweeperConfig;

/// One semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SweeperConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.network.rpc_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError {
            field: "network.rpc_url",
            message: format!("'{}' is not a valid URL", config.network.rpc_url),
        });
    }

    if config.network.explorer_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError {
            field: "network.explorer_url",
            message: format!("'{}' is not a valid URL", config.network.explorer_url),
        });
    }

    if config.network.confirm_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "network.confirm_timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.network.poll_interval_secs == 0
        || config.network.poll_interval_secs > config.network.confirm_timeout_secs
    {
        errors.push(ValidationError {
            field: "network.poll_interval_secs",
            message: "must be non-zero and no larger than the confirmation timeout".to_string(),
        });
    }

    if config.token.contract_address.parse::<Address>().is_err() {
        errors.push(ValidationError {
            field: "token.contract_address",
            message: format!(
                "'{}' is not a valid contract address",
                config.token.contract_address
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
