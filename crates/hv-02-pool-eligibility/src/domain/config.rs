//! Eligibility configuration.

use serde::{Deserialize, Serialize};
use shared_types::ChainId;
use thiserror::Error;

/// BSC mainnet.
pub const DEFAULT_CHAIN_ID: ChainId = 56;

/// Eligibility filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EligibilityConfig {
    /// Network whose pool addresses are queried.
    pub chain_id: ChainId,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
        }
    }
}

impl EligibilityConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id == 0 {
            return Err(ConfigError::InvalidChainId);
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Chain id of zero.
    #[error("chain_id cannot be 0")]
    InvalidChainId,
}
