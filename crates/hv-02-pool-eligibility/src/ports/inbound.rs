//! # Inbound Ports
//!
//! API trait shared by both eligibility strategies.

use async_trait::async_trait;
use shared_types::{BlockNumber, Pool};

use crate::domain::EligibilityError;

/// Pool eligibility API - inbound port.
///
/// Both implementations return the same pools, in configuration order, for
/// the same pool list and block.
#[async_trait]
pub trait PoolEligibility: Send + Sync {
    /// Pools active at `block`, or at the chain head when `None`.
    ///
    /// The main pool and finished pools are never returned.
    async fn active_pools(&self, block: Option<BlockNumber>) -> Result<Vec<Pool>, EligibilityError>;
}
