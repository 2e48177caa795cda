//! # Reward Pool Configuration
//!
//! Static pool list loaded once at startup. Pools are immutable; the
//! registry is shared read-only.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

use crate::entities::{Address, ChainId};
use crate::errors::TypesError;

/// Sous id of the main staking pool. Excluded from auxiliary pool checks.
pub const MAIN_POOL_SOUS_ID: u32 = 0;

/// Default token precision (18 decimals).
pub const DEFAULT_TOKEN_DECIMALS: u32 = 18;

fn default_decimals() -> u32 {
    DEFAULT_TOKEN_DECIMALS
}

/// A reward-distribution contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Pool identifier. `0` is the main staking pool.
    pub sous_id: u32,
    /// Contract address per network.
    pub contract_address: BTreeMap<ChainId, Address>,
    /// Explicitly retired pools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_finished: Option<bool>,
    /// Decimals of the staked token.
    #[serde(default = "default_decimals")]
    pub stake_token_decimals: u32,
}

impl Pool {
    /// Create a pool deployed on a single network.
    pub fn new(sous_id: u32, chain_id: ChainId, address: Address) -> Self {
        let mut contract_address = BTreeMap::new();
        contract_address.insert(chain_id, address);
        Self {
            sous_id,
            contract_address,
            is_finished: None,
            stake_token_decimals: DEFAULT_TOKEN_DECIMALS,
        }
    }

    /// Mark the pool finished (builder style).
    pub fn finished(mut self, finished: bool) -> Self {
        self.is_finished = Some(finished);
        self
    }

    /// True for the main staking pool sentinel.
    pub fn is_main_pool(&self) -> bool {
        self.sous_id == MAIN_POOL_SOUS_ID
    }

    /// True only when `is_finished` is explicitly set.
    pub fn is_finished(&self) -> bool {
        self.is_finished == Some(true)
    }

    /// Candidate for eligibility checks: not the sentinel, not finished.
    pub fn is_candidate(&self) -> bool {
        !self.is_main_pool() && !self.is_finished()
    }

    /// Contract address on the given network.
    pub fn address_on(&self, chain_id: ChainId) -> Option<Address> {
        self.contract_address.get(&chain_id).copied()
    }
}

/// Ordered, read-only pool list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolRegistry {
    pools: Vec<Pool>,
}

impl PoolRegistry {
    /// Build a registry, rejecting duplicate sous ids.
    pub fn new(pools: Vec<Pool>) -> Result<Self, TypesError> {
        let mut seen = HashSet::new();
        for pool in &pools {
            if !seen.insert(pool.sous_id) {
                return Err(TypesError::DuplicateSousId(pool.sous_id));
            }
        }
        Ok(Self { pools })
    }

    /// Load from a JSON array of pools.
    pub fn from_json(json: &str) -> Result<Self, TypesError> {
        let pools: Vec<Pool> = serde_json::from_str(json)
            .map_err(|e| TypesError::InvalidPoolConfig(e.to_string()))?;
        let registry = Self::new(pools)?;
        debug!(pools = registry.len(), "Loaded pool registry");
        Ok(registry)
    }

    /// All pools in configuration order.
    pub fn pools(&self) -> &[Pool] {
        &self.pools
    }

    /// Pools eligible for activity checks, in configuration order.
    pub fn candidates(&self) -> Vec<Pool> {
        self.pools.iter().filter(|p| p.is_candidate()).cloned().collect()
    }

    /// Look up a pool by sous id.
    pub fn get(&self, sous_id: u32) -> Option<&Pool> {
        self.pools.iter().find(|p| p.sous_id == sous_id)
    }

    /// Number of configured pools.
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// True when no pools are configured.
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
