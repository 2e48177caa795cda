//! # Domain Errors
//!
//! Error types for contract calls and batched reads.

use shared_types::Address;
use thiserror::Error;

/// Chain call error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainCallError {
    /// Input is not a valid non-negative decimal numeral for the precision.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The contract call reverted.
    #[error("Call reverted: {contract}.{method}: {reason}")]
    Reverted {
        /// Target contract
        contract: Address,
        /// Method name
        method: String,
        /// Revert reason
        reason: String,
    },

    /// Return data could not be decoded into the expected shape.
    #[error("Decode failed for {method}: {reason}")]
    Decode {
        /// Method name
        method: String,
        /// What went wrong
        reason: String,
    },

    /// Method is not part of the ABI descriptor.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// Transport or node failure.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A batch with `require_success` hit a failing call.
    #[error("Batch call {index} failed: {reason}")]
    BatchFailed {
        /// Index of the first failing spec
        index: usize,
        /// Failure description
        reason: String,
    },
}
