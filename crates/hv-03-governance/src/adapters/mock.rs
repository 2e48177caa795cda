//! Mock collaborators for tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::Address;

use crate::domain::{GovernanceError, SignedMessage};
use crate::ports::{MessageSigner, Navigator, RelayClient, RelayReceipt, VotingPowerRequest};

/// Signer returning a fixed signature, or rejecting when told to.
pub struct MockSigner {
    address: Address,
    reject: RwLock<bool>,
    signed: RwLock<Vec<String>>,
}

impl MockSigner {
    /// Signer for `address`.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            reject: RwLock::new(false),
            signed: RwLock::new(Vec::new()),
        }
    }

    /// Make subsequent requests fail as if the user declined.
    pub fn set_reject(&self, reject: bool) {
        *self.reject.write() = reject;
    }

    /// Messages signed so far.
    pub fn signed(&self) -> Vec<String> {
        self.signed.read().clone()
    }
}

#[async_trait]
impl MessageSigner for MockSigner {
    fn address(&self) -> Address {
        self.address
    }

    async fn sign_message(&self, message: &str) -> Result<String, GovernanceError> {
        if *self.reject.read() {
            return Err(GovernanceError::SignatureRejected(
                "User denied message signature".to_string(),
            ));
        }
        self.signed.write().push(message.to_string());
        Ok(format!("0x{}", "ab".repeat(65)))
    }
}

/// Relay that records messages and answers from a script.
pub struct MockRelayClient {
    response: RwLock<Result<RelayReceipt, GovernanceError>>,
    power: RwLock<Result<f64, GovernanceError>>,
    sent: RwLock<Vec<SignedMessage>>,
    power_requests: RwLock<Vec<VotingPowerRequest>>,
}

impl MockRelayClient {
    /// Relay accepting every message as `ipfs_hash`.
    pub fn accepting(ipfs_hash: &str) -> Self {
        Self {
            response: RwLock::new(Ok(RelayReceipt {
                ipfs_hash: ipfs_hash.to_string(),
            })),
            power: RwLock::new(Ok(0.0)),
            sent: RwLock::new(Vec::new()),
            power_requests: RwLock::new(Vec::new()),
        }
    }

    /// Replace the scripted submission result.
    pub fn set_response(&self, response: Result<RelayReceipt, GovernanceError>) {
        *self.response.write() = response;
    }

    /// Replace the scripted voting-power result.
    pub fn set_voting_power(&self, power: Result<f64, GovernanceError>) {
        *self.power.write() = power;
    }

    /// Messages received so far.
    pub fn sent(&self) -> Vec<SignedMessage> {
        self.sent.read().clone()
    }

    /// Voting-power queries received so far.
    pub fn power_requests(&self) -> Vec<VotingPowerRequest> {
        self.power_requests.read().clone()
    }
}

#[async_trait]
impl RelayClient for MockRelayClient {
    async fn send_message(&self, message: &SignedMessage) -> Result<RelayReceipt, GovernanceError> {
        self.sent.write().push(message.clone());
        self.response.read().clone()
    }

    async fn voting_power(&self, request: &VotingPowerRequest) -> Result<f64, GovernanceError> {
        self.power_requests.write().push(request.clone());
        self.power.read().clone()
    }
}

/// Navigator that remembers every path.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: RwLock<Vec<String>>,
}

impl RecordingNavigator {
    /// Empty navigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths pushed so far.
    pub fn paths(&self) -> Vec<String> {
        self.paths.read().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.paths.write().push(path.to_string());
    }
}
