//! # Domain Errors
//!
//! Only whole-query failures surface as errors. A single pool whose reads
//! fail is reported as "not active".

use hv_01_chain_calls::ChainCallError;
use shared_types::ChainId;
use thiserror::Error;

/// Pool eligibility error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EligibilityError {
    /// Could not resolve the current chain head.
    #[error("Chain head unavailable: {0}")]
    ChainHead(ChainCallError),

    /// A batched read failed as a whole.
    #[error("Batch read failed: {0}")]
    Batch(ChainCallError),

    /// A per-pool contract read failed.
    #[error("Read failed for pool {sous_id}: {source}")]
    Read {
        /// Pool identifier
        sous_id: u32,
        /// Underlying failure
        source: ChainCallError,
    },

    /// Pool has no contract on the configured network.
    #[error("Pool {sous_id} has no address on chain {chain_id}")]
    MissingAddress {
        /// Pool identifier
        sous_id: u32,
        /// Configured network
        chain_id: ChainId,
    },

    /// No pool with this sous id is configured.
    #[error("Pool not found: {0}")]
    PoolNotFound(u32),
}
