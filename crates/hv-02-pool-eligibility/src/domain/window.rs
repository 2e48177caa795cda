//! # Eligibility Window
//!
//! Inclusive block range during which a pool distributes rewards.

use hv_01_chain_calls::{CallValue, ChainCallError};
use shared_types::{BlockNumber, U256};

/// Method returning the first rewarded block.
pub const START_BLOCK_METHOD: &str = "startBlock";

/// Method returning the last rewarded block.
pub const END_BLOCK_METHOD: &str = "bonusEndBlock";

/// Start/end blocks read from a pool contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EligibilityWindow {
    /// First block of the window (inclusive).
    pub start_block: U256,
    /// Last block of the window (inclusive).
    pub end_block: U256,
}

impl EligibilityWindow {
    /// Create a window.
    pub fn new(start_block: U256, end_block: U256) -> Self {
        Self {
            start_block,
            end_block,
        }
    }

    /// Decode from the raw `startBlock` / `bonusEndBlock` return values.
    pub fn from_values(start: &CallValue, end: &CallValue) -> Result<Self, ChainCallError> {
        Ok(Self {
            start_block: start.as_u256(START_BLOCK_METHOD)?,
            end_block: end.as_u256(END_BLOCK_METHOD)?,
        })
    }

    /// `start_block <= block <= end_block`.
    pub fn is_active_at(&self, block: BlockNumber) -> bool {
        let block = U256::from(block);
        self.start_block <= block && block <= self.end_block
    }
}
