//! # HV-01 Chain Calls
//!
//! Contract interaction primitives for the Harvest front-end core.
//!
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Exact decimal → on-chain integer conversion ([`convert_amount`])
//! - Staking, unstaking and harvesting helpers ([`StakingCalls`])
//! - Batched, block-pinned reads with per-call failure isolation
//!   ([`BatchReader`])
//!
//! ## Module Structure
//!
//! ```text
//! hv-01-chain-calls/
//! ├── domain/     # Amounts, call descriptors, config, errors
//! ├── ports/      # ChainCallAdapter, BatchCaller
//! ├── adapters/   # InMemoryChain
//! ├── batch.rs    # BatchReader
//! └── staking.rs  # StakingCalls
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod batch;
pub mod domain;
pub mod ports;
pub mod staking;

// Re-exports
pub use adapters::{InMemoryChain, RecordedWrite};
pub use batch::BatchReader;
pub use domain::{
    convert_amount, convert_default, from_base_units, to_base_units, AbiDescriptor,
    BatchCallResult, BatchCallSpec, BatchOptions, CallArg, CallConfig, CallValue,
    ChainCallError, ConfigError, PendingTransaction, TxOptions, TxReceipt, DEFAULT_GAS_LIMIT,
    MAX_DECIMALS,
};
pub use ports::{BatchCaller, ChainCallAdapter};
pub use staking::{StakingCalls, MAIN_STAKING_PID};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
