//! Per-pool eligibility strategy.
//!
//! Reads `startBlock` and `bonusEndBlock` from each candidate contract.
//! Pools are checked concurrently and every check is awaited before the
//! result is reduced; a failed check excludes only that pool.

use async_trait::async_trait;
use futures::future::join_all;
use hv_01_chain_calls::ChainCallAdapter;
use shared_types::{BlockNumber, Pool, PoolRegistry};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{
    collect_active, CheckOutcome, EligibilityConfig, EligibilityError, EligibilityWindow,
    END_BLOCK_METHOD, START_BLOCK_METHOD,
};
use crate::ports::PoolEligibility;

/// Per-pool strategy over a [`ChainCallAdapter`].
pub struct PerPoolFilter<C: ChainCallAdapter> {
    chain: Arc<C>,
    registry: Arc<PoolRegistry>,
    config: EligibilityConfig,
}

impl<C: ChainCallAdapter> PerPoolFilter<C> {
    /// Create the filter.
    pub fn new(chain: Arc<C>, registry: Arc<PoolRegistry>, config: EligibilityConfig) -> Self {
        Self {
            chain,
            registry,
            config,
        }
    }

    /// Read a pool's window at `block`.
    pub async fn read_window(
        &self,
        pool: &Pool,
        block: BlockNumber,
    ) -> Result<EligibilityWindow, EligibilityError> {
        let address = pool
            .address_on(self.config.chain_id)
            .ok_or(EligibilityError::MissingAddress {
                sous_id: pool.sous_id,
                chain_id: self.config.chain_id,
            })?;

        let read_err = |source| EligibilityError::Read {
            sous_id: pool.sous_id,
            source,
        };

        let start = self
            .chain
            .read(address, START_BLOCK_METHOD, &[], Some(block))
            .await
            .map_err(read_err)?;
        let end = self
            .chain
            .read(address, END_BLOCK_METHOD, &[], Some(block))
            .await
            .map_err(read_err)?;

        EligibilityWindow::from_values(&start, &end).map_err(read_err)
    }

    /// Whether pool `sous_id` is active at `block`.
    pub async fn is_pool_active(
        &self,
        sous_id: u32,
        block: BlockNumber,
    ) -> Result<bool, EligibilityError> {
        let pool = self
            .registry
            .get(sous_id)
            .ok_or(EligibilityError::PoolNotFound(sous_id))?;
        let window = self.read_window(pool, block).await?;
        Ok(window.is_active_at(block))
    }
}

#[async_trait]
impl<C: ChainCallAdapter> PoolEligibility for PerPoolFilter<C> {
    async fn active_pools(&self, block: Option<BlockNumber>) -> Result<Vec<Pool>, EligibilityError> {
        let target = match block {
            Some(block) => block,
            None => self
                .chain
                .block_number()
                .await
                .map_err(EligibilityError::ChainHead)?,
        };

        let candidates = self.registry.candidates();
        debug!(
            candidates = candidates.len(),
            block = target,
            "[hv-02] Checking pools one by one"
        );

        let checks = candidates.iter().map(|pool| async move {
            let outcome: CheckOutcome<bool> = self
                .read_window(pool, target)
                .await
                .map(|window| window.is_active_at(target))
                .into();
            if let CheckOutcome::Rejected(err) = &outcome {
                debug!(sous_id = pool.sous_id, error = %err, "[hv-02] Pool check rejected");
            }
            outcome
        });
        let outcomes = join_all(checks).await;

        let active = collect_active(&candidates, &outcomes);
        info!(
            active = active.len(),
            block = target,
            "[hv-02] Active pools resolved"
        );
        Ok(active)
    }
}
