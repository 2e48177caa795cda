//! # Domain Errors
//!
//! Every error is scoped to the single user action that raised it.

use hv_01_chain_calls::ChainCallError;
use thiserror::Error;

use super::config::ConfigError;
use super::form::FormField;

/// Governance error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovernanceError {
    /// Submission attempted while the form has validation errors.
    #[error("Form has errors in: {0:?}")]
    InvalidForm(Vec<FormField>),

    /// Vote choice outside the proposal's 1-based range.
    #[error("Invalid vote choice: {0}")]
    InvalidChoice(u32),

    /// The user declined or failed to sign.
    #[error("Signature rejected: {0}")]
    SignatureRejected(String),

    /// Private key bytes do not form a valid secp256k1 key.
    #[error("Invalid signing key")]
    InvalidKey,

    /// Relay answered with a non-success status.
    #[error("Relay rejected message: {status}")]
    RelayRejected {
        /// HTTP status text.
        status: String,
    },

    /// Network failure talking to the relay.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Relay body could not be parsed.
    #[error("Malformed relay response: {0}")]
    MalformedResponse(String),

    /// Payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Chain client failure (snapshot block lookup).
    #[error("Chain error: {0}")]
    Chain(#[from] ChainCallError),

    /// Invalid relay configuration.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl From<serde_json::Error> for GovernanceError {
    fn from(err: serde_json::Error) -> Self {
        GovernanceError::Serialization(err.to_string())
    }
}
