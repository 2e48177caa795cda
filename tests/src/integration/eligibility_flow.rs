//! # Eligibility Flow
//!
//! Pool registry JSON → hv-01 batch reader → hv-02 filters.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hv_01_chain_calls::BatchReader;
    use hv_02_pool_eligibility::{
        BatchedFilter, EligibilityConfig, PerPoolFilter, PoolEligibility, END_BLOCK_METHOD,
    };
    use shared_types::Pool;

    use crate::integration::fixtures::{address, chain, registry, CHAIN_ID};

    fn ids(pools: &[Pool]) -> Vec<u32> {
        pools.iter().map(|p| p.sous_id).collect()
    }

    fn config() -> EligibilityConfig {
        EligibilityConfig { chain_id: CHAIN_ID }
    }

    #[tokio::test]
    async fn test_strategies_agree_across_blocks() {
        let chain = chain(10_000);
        let per_pool = PerPoolFilter::new(Arc::clone(&chain), registry(), config());
        let batched = BatchedFilter::new(
            Arc::new(BatchReader::new(Arc::clone(&chain))),
            registry(),
            config(),
        );

        for block in [0, 999, 1_000, 1_499, 1_500, 2_000, 2_001, 2_500, 3_000, 3_001, 4_000, 4_001] {
            let a = per_pool.active_pools(Some(block)).await.unwrap();
            let b = batched.active_pools(Some(block)).await.unwrap();
            assert_eq!(ids(&a), ids(&b), "block {block}");
        }
    }

    #[tokio::test]
    async fn test_inclusive_bounds_and_order() {
        let chain = chain(10_000);
        let batched = BatchedFilter::new(Arc::new(BatchReader::new(chain)), registry(), config());

        assert_eq!(ids(&batched.active_pools(Some(1_000)).await.unwrap()), vec![1]);
        assert_eq!(ids(&batched.active_pools(Some(2_000)).await.unwrap()), vec![1, 2]);
        assert_eq!(ids(&batched.active_pools(Some(2_500)).await.unwrap()), vec![2, 5]);
        assert_eq!(ids(&batched.active_pools(Some(4_001)).await.unwrap()), Vec::<u32>::new());
    }

    #[tokio::test]
    async fn test_sentinel_finished_and_foreign_pools_never_returned() {
        let chain = chain(10_000);
        let per_pool = PerPoolFilter::new(chain, registry(), config());

        for block in [0, 1_800, 3_500] {
            let active = ids(&per_pool.active_pools(Some(block)).await.unwrap());
            assert!(!active.contains(&0));
            assert!(!active.contains(&3));
            assert!(!active.contains(&4));
        }
    }

    #[tokio::test]
    async fn test_head_query_matches_explicit_block() {
        let chain = chain(2_600);
        let batched = BatchedFilter::new(
            Arc::new(BatchReader::new(Arc::clone(&chain))),
            registry(),
            config(),
        );

        let at_head = batched.active_pools(None).await.unwrap();
        let explicit = batched.active_pools(Some(2_600)).await.unwrap();
        assert_eq!(at_head, explicit);
    }

    #[tokio::test]
    async fn test_historical_query_reads_state_at_that_block() {
        // Pool 1 ended at 1_700 until its reward period was extended to 2_000.
        let chain = chain(1_900);
        let pool_1 = address("0x0000000000000000000000000000000000000101");
        chain.set_uint_at(pool_1, END_BLOCK_METHOD, 1_800, 1_700);

        let per_pool = PerPoolFilter::new(Arc::clone(&chain), registry(), config());
        let batched = BatchedFilter::new(
            Arc::new(BatchReader::new(Arc::clone(&chain))),
            registry(),
            config(),
        );

        for filter in [&per_pool as &dyn PoolEligibility, &batched] {
            assert_eq!(ids(&filter.active_pools(Some(1_800)).await.unwrap()), vec![2]);
            assert_eq!(ids(&filter.active_pools(None).await.unwrap()), vec![1, 2]);
        }
    }

    #[tokio::test]
    async fn test_testnet_config_sees_testnet_pools_only() {
        let chain = chain(10_000);
        let per_pool = PerPoolFilter::new(chain, registry(), EligibilityConfig { chain_id: 97 });

        // Nothing is scripted at the testnet addresses, so every read reverts.
        assert!(per_pool.active_pools(Some(1_500)).await.unwrap().is_empty());
    }
}
