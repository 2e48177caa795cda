//! Snapshot relay configuration.

use serde::{Deserialize, Serialize};
use shared_types::Address;
use thiserror::Error;

/// Payload protocol version understood by the relay.
pub const DEFAULT_SNAPSHOT_VERSION: &str = "0.1.3";

/// Default governance namespace.
pub const DEFAULT_SPACE: &str = "harvest.eth";

/// Relay and payload settings for one governance space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Hub endpoint receiving signed messages.
    pub hub_api: String,
    /// Base URL of the voting-power API.
    pub voting_api: String,
    /// Space (namespace) identifier.
    pub space: String,
    /// Payload protocol version.
    pub version: String,
    /// Governance token, embedded in the strategy descriptor.
    pub token_address: Address,
    /// Voting strategy name.
    pub strategy_name: String,
    /// Author of core proposals.
    pub admin_address: Address,
    /// Gateway used for proposal detail links.
    pub ipfs_gateway: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            hub_api: "https://hub.snapshot.org/api/message".to_string(),
            voting_api: "https://voting-api.harvest.finance/api".to_string(),
            space: DEFAULT_SPACE.to_string(),
            version: DEFAULT_SNAPSHOT_VERSION.to_string(),
            token_address: Address::ZERO,
            strategy_name: DEFAULT_SPACE.to_string(),
            admin_address: Address::ZERO,
            ipfs_gateway: "https://gateway.ipfs.io/ipfs".to_string(),
        }
    }
}

impl SnapshotConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("hub_api", &self.hub_api),
            ("voting_api", &self.voting_api),
            ("space", &self.space),
            ("version", &self.version),
            ("strategy_name", &self.strategy_name),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(field));
            }
        }
        if self.token_address == Address::ZERO {
            return Err(ConfigError::MissingTokenAddress);
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required string setting is blank.
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    /// The strategy descriptor needs a token address.
    #[error("token_address must be set")]
    MissingTokenAddress,
}
