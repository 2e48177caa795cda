//! Call configuration with validation.
//!
//! Replaces a shared mutable options object: every call-construction
//! function receives the immutable [`CallConfig`] it should use.

use serde::{Deserialize, Serialize};
use shared_types::DEFAULT_TOKEN_DECIMALS;
use thiserror::Error;

use super::amount::MAX_DECIMALS;
use super::call::TxOptions;

/// Default gas limit attached to staking transactions.
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// Contract call configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallConfig {
    /// Gas limit for writes.
    pub gas_limit: u64,
    /// Precision of the farm token.
    pub token_decimals: u32,
}

impl Default for CallConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
            token_decimals: DEFAULT_TOKEN_DECIMALS,
        }
    }
}

impl CallConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gas_limit == 0 {
            return Err(ConfigError::InvalidGasLimit);
        }
        if self.token_decimals > MAX_DECIMALS {
            return Err(ConfigError::InvalidDecimals(self.token_decimals));
        }
        Ok(())
    }

    /// Fresh transaction options carrying the configured gas limit.
    pub fn tx_options(&self) -> TxOptions {
        TxOptions {
            gas_limit: self.gas_limit,
            value: None,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Gas limit of zero.
    #[error("gas_limit cannot be 0")]
    InvalidGasLimit,
    /// Precision outside the U256 range.
    #[error("token_decimals {0} exceeds {MAX_DECIMALS}")]
    InvalidDecimals(u32),
}
