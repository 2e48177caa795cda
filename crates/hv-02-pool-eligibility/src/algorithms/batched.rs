//! Batched eligibility strategy.
//!
//! Issues two permissive batch reads pinned at the target block, one for
//! every candidate's `startBlock` and one for every `bonusEndBlock`, then
//! zips them by index. Scales with one round trip per method instead of
//! two per pool.

use async_trait::async_trait;
use hv_01_chain_calls::{
    AbiDescriptor, BatchCallResult, BatchCallSpec, BatchCaller, BatchOptions, ChainCallError,
};
use shared_types::{BlockNumber, Pool, PoolRegistry};
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{
    collect_active, CheckOutcome, EligibilityConfig, EligibilityError, EligibilityWindow,
    END_BLOCK_METHOD, START_BLOCK_METHOD,
};
use crate::ports::PoolEligibility;

/// Batched strategy over a [`BatchCaller`].
pub struct BatchedFilter<B: BatchCaller> {
    batch: Arc<B>,
    registry: Arc<PoolRegistry>,
    config: EligibilityConfig,
    abi: AbiDescriptor,
}

impl<B: BatchCaller> BatchedFilter<B> {
    /// Create the filter using the sous chef v2 interface.
    pub fn new(batch: Arc<B>, registry: Arc<PoolRegistry>, config: EligibilityConfig) -> Self {
        Self {
            batch,
            registry,
            config,
            abi: AbiDescriptor::sous_chef_v2(),
        }
    }

    fn outcome(
        pool: &Pool,
        start: &BatchCallResult,
        end: &BatchCallResult,
        block: BlockNumber,
    ) -> CheckOutcome<bool> {
        let read_err = |source| EligibilityError::Read {
            sous_id: pool.sous_id,
            source,
        };
        match (start, end) {
            (BatchCallResult::Success(start), BatchCallResult::Success(end)) => {
                EligibilityWindow::from_values(start, end)
                    .map(|window| window.is_active_at(block))
                    .map_err(read_err)
                    .into()
            }
            (BatchCallResult::Failure(err), _) | (_, BatchCallResult::Failure(err)) => {
                CheckOutcome::Rejected(read_err(err.clone()))
            }
        }
    }
}

#[async_trait]
impl<B: BatchCaller> PoolEligibility for BatchedFilter<B> {
    async fn active_pools(&self, block: Option<BlockNumber>) -> Result<Vec<Pool>, EligibilityError> {
        let target = match block {
            Some(block) => block,
            None => self
                .batch
                .block_number()
                .await
                .map_err(EligibilityError::ChainHead)?,
        };

        let candidates = self.registry.candidates();
        let chain_id = self.config.chain_id;

        // Only pools deployed on this network go into the batch; `slots`
        // maps each candidate to its batch index.
        let mut slots = Vec::with_capacity(candidates.len());
        let mut start_specs = Vec::new();
        let mut end_specs = Vec::new();
        for pool in &candidates {
            match pool.address_on(chain_id) {
                Some(address) => {
                    slots.push(Some(start_specs.len()));
                    start_specs.push(BatchCallSpec::new(address, START_BLOCK_METHOD));
                    end_specs.push(BatchCallSpec::new(address, END_BLOCK_METHOD));
                }
                None => slots.push(None),
            }
        }

        debug!(
            candidates = candidates.len(),
            batched = start_specs.len(),
            block = target,
            "[hv-02] Checking pools in two batches"
        );

        let options = BatchOptions::permissive().at_block(target);
        let (starts, ends) = futures::try_join!(
            self.batch.batch_read(&self.abi, &start_specs, options),
            self.batch.batch_read(&self.abi, &end_specs, options),
        )
        .map_err(EligibilityError::Batch)?;

        let outcomes: Vec<CheckOutcome<bool>> = candidates
            .iter()
            .zip(&slots)
            .map(|(pool, slot)| match slot {
                Some(index) => match (starts.get(*index), ends.get(*index)) {
                    (Some(start), Some(end)) => Self::outcome(pool, start, end, target),
                    _ => CheckOutcome::Rejected(EligibilityError::Batch(ChainCallError::Decode {
                        method: START_BLOCK_METHOD.to_string(),
                        reason: format!("batch result missing at index {index}"),
                    })),
                },
                None => CheckOutcome::Rejected(EligibilityError::MissingAddress {
                    sous_id: pool.sous_id,
                    chain_id,
                }),
            })
            .collect();

        let active = collect_active(&candidates, &outcomes);
        info!(
            active = active.len(),
            block = target,
            "[hv-02] Active pools resolved"
        );
        Ok(active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hv_01_chain_calls::{BatchReader, InMemoryChain};
    use shared_types::Address;

    fn addr(n: u32) -> Address {
        Address::new([n as u8; 20])
    }

    fn setup(head: BlockNumber) -> (Arc<InMemoryChain>, BatchedFilter<BatchReader<InMemoryChain>>) {
        let chain = Arc::new(InMemoryChain::new(head));
        let pools = vec![
            Pool::new(0, 56, addr(100)),
            Pool::new(1, 56, addr(1)),
            Pool::new(2, 56, addr(2)),
            Pool::new(3, 56, addr(3)).finished(true),
            Pool::new(4, 97, addr(4)),
            Pool::new(5, 56, addr(5)),
        ];
        for (a, start, end) in [
            (addr(100), 0, 10_000),
            (addr(1), 100, 200),
            (addr(2), 150, 300),
            (addr(3), 0, 10_000),
            (addr(4), 0, 10_000),
            (addr(5), 250, 400),
        ] {
            chain.set_uint(a, START_BLOCK_METHOD, start);
            chain.set_uint(a, END_BLOCK_METHOD, end);
        }
        let registry = Arc::new(PoolRegistry::new(pools).unwrap());
        let reader = Arc::new(BatchReader::new(Arc::clone(&chain)));
        (chain, BatchedFilter::new(reader, registry, EligibilityConfig::default()))
    }

    fn ids(pools: &[Pool]) -> Vec<u32> {
        pools.iter().map(|p| p.sous_id).collect()
    }

    #[tokio::test]
    async fn test_active_at_block() {
        let (_, filter) = setup(1_000);
        assert_eq!(ids(&filter.active_pools(Some(180)).await.unwrap()), vec![1, 2]);
        assert_eq!(ids(&filter.active_pools(Some(300)).await.unwrap()), vec![2, 5]);
    }

    #[tokio::test]
    async fn test_head_used_when_no_block() {
        let (_, filter) = setup(120);
        assert_eq!(ids(&filter.active_pools(None).await.unwrap()), vec![1]);
    }

    #[tokio::test]
    async fn test_other_network_pool_excluded() {
        let (_, filter) = setup(1_000);
        let active = ids(&filter.active_pools(Some(260)).await.unwrap());
        assert!(!active.contains(&4));
        assert!(!active.contains(&3));
        assert!(!active.contains(&0));
    }

    #[tokio::test]
    async fn test_one_failing_pool_isolated() {
        let (chain, filter) = setup(1_000);
        chain.set_reverting(addr(2));
        assert_eq!(ids(&filter.active_pools(Some(180)).await.unwrap()), vec![1]);
    }

    #[tokio::test]
    async fn test_every_read_pinned_to_target() {
        let (chain, filter) = setup(1_000);
        filter.active_pools(Some(777)).await.unwrap();

        let blocks = chain.read_blocks();
        assert_eq!(blocks.len(), 6);
        assert!(blocks.iter().all(|b| *b == Some(777)));
    }

    struct DownBatch;

    #[async_trait]
    impl BatchCaller for DownBatch {
        async fn batch_read(
            &self,
            _abi: &AbiDescriptor,
            _specs: &[BatchCallSpec],
            _options: BatchOptions,
        ) -> Result<Vec<BatchCallResult>, ChainCallError> {
            Err(ChainCallError::Transport("connection refused".to_string()))
        }

        async fn block_number(&self) -> Result<BlockNumber, ChainCallError> {
            Err(ChainCallError::Transport("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_query_error() {
        let registry = Arc::new(PoolRegistry::new(vec![Pool::new(1, 56, addr(1))]).unwrap());
        let filter = BatchedFilter::new(Arc::new(DownBatch), registry, EligibilityConfig::default());

        assert!(matches!(
            filter.active_pools(Some(10)).await,
            Err(EligibilityError::Batch(_))
        ));
        assert!(matches!(
            filter.active_pools(None).await,
            Err(EligibilityError::ChainHead(_))
        ));
    }
}
