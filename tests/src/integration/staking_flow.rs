//! # Staking Flow
//!
//! hv-01 helpers driven by the pool configuration.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hv_01_chain_calls::{convert_amount, CallArg, CallConfig, ChainCallAdapter, StakingCalls};
    use shared_types::U256;

    use crate::integration::fixtures::{address, chain, registry, CHAIN_ID};

    #[tokio::test]
    async fn test_sous_stake_uses_pool_decimals() {
        let chain = chain(1);
        let calls = StakingCalls::new(Arc::clone(&chain), CallConfig::default());
        let pool = registry().get(2).cloned().unwrap();
        let contract = pool.address_on(CHAIN_ID).unwrap();

        assert!(calls
            .sous_stake(contract, "12.5", pool.stake_token_decimals)
            .await
            .unwrap());

        let write = &chain.writes()[0];
        assert_eq!(write.contract, contract);
        assert_eq!(write.method, "deposit");
        assert_eq!(write.args, vec![CallArg::Uint(U256::from(1_250_000_000u64))]);
    }

    #[tokio::test]
    async fn test_approve_then_stake_then_harvest() {
        let chain = chain(1);
        let calls = StakingCalls::new(Arc::clone(&chain), CallConfig::default());
        let token = address("0x0e09fabb73bd3ade0a17ecc321fd13a19e81ce82");
        let master_chef = address("0x73feaa1ee314f8c655e354234017be2193c9e24e");

        calls.approve(token, master_chef).await.unwrap();
        calls.stake(master_chef, 0, "1.5").await.unwrap();
        calls.harvest(master_chef, 0).await.unwrap();

        let methods: Vec<_> = chain.writes().into_iter().map(|w| w.method).collect();
        assert_eq!(methods, vec!["approve", "enterStaking", "leaveStaking"]);
        assert_eq!(
            chain.writes()[1].args,
            vec![CallArg::Uint(U256::from_dec_str(&convert_amount("1.5", 18).unwrap()).unwrap())]
        );
    }

    #[tokio::test]
    async fn test_each_transaction_mined_in_new_block() {
        let chain = chain(10);
        let calls = StakingCalls::new(Arc::clone(&chain), CallConfig::default());
        let contract = address("0x0000000000000000000000000000000000000101");

        calls.sous_harvest(contract).await.unwrap();
        calls.sous_emergency_unstake(contract).await.unwrap();

        assert_eq!(chain.block_number().await.unwrap(), 12);
    }
}
