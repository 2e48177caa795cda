//! # Outbound Ports
//!
//! The wallet, the relay and the router are external; only their
//! contracts live here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber};

use crate::domain::{GovernanceError, SignedMessage};

/// Signs arbitrary text with the user's chain identity.
///
/// Signing is user-interactive; implementations impose no timeout.
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// Address of the signing account.
    fn address(&self) -> Address;

    /// Personal-sign `message`, returning a `0x`-prefixed hex signature.
    ///
    /// A declined request surfaces as [`GovernanceError::SignatureRejected`].
    async fn sign_message(&self, message: &str) -> Result<String, GovernanceError>;
}

/// Relay acknowledgement of an accepted message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayReceipt {
    /// Identifier of the stored message.
    #[serde(rename = "ipfsHash")]
    pub ipfs_hash: String,
}

/// Voting-power query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotingPowerRequest {
    /// Voter address.
    pub address: String,
    /// Block to measure at; head when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockNumber>,
    /// Pools whose stake counts towards the vote.
    #[serde(rename = "poolAddresses")]
    pub pool_addresses: Vec<String>,
}

/// Off-chain relay client.
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Submit a signed message.
    async fn send_message(&self, message: &SignedMessage) -> Result<RelayReceipt, GovernanceError>;

    /// Query voting power; returns the response's numeric `data` member.
    ///
    /// A body whose `data` is not a number is
    /// [`GovernanceError::MalformedResponse`].
    async fn voting_power(&self, request: &VotingPowerRequest) -> Result<f64, GovernanceError>;
}

/// Application router.
pub trait Navigator: Send + Sync {
    /// Navigate to `path`.
    fn push(&self, path: &str);
}
