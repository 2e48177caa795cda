//! Shared fixtures: a small pool configuration and a chain scripted to match.

use hv_01_chain_calls::InMemoryChain;
use hv_02_pool_eligibility::{END_BLOCK_METHOD, START_BLOCK_METHOD};
use shared_types::{Address, PoolRegistry};
use std::str::FromStr;
use std::sync::Arc;

/// Configured network.
pub const CHAIN_ID: u64 = 56;

/// Pool configuration as it would ship with the front-end.
pub const POOLS_JSON: &str = r#"[
    {"sousId": 0, "contractAddress": {"56": "0x73feaa1ee314f8c655e354234017be2193c9e24e"}},
    {"sousId": 1, "contractAddress": {"56": "0x0000000000000000000000000000000000000101", "97": "0x0000000000000000000000000000000000000201"}},
    {"sousId": 2, "contractAddress": {"56": "0x0000000000000000000000000000000000000102"}, "isFinished": false, "stakeTokenDecimals": 8},
    {"sousId": 3, "contractAddress": {"56": "0x0000000000000000000000000000000000000103"}, "isFinished": true},
    {"sousId": 4, "contractAddress": {"97": "0x0000000000000000000000000000000000000204"}},
    {"sousId": 5, "contractAddress": {"56": "0x0000000000000000000000000000000000000105"}}
]"#;

/// (sous id, startBlock, bonusEndBlock) scripted on chain 56.
pub const WINDOWS: [(u32, u64, u64); 5] = [
    (0, 0, 99_999_999),
    (1, 1_000, 2_000),
    (2, 1_500, 3_000),
    (3, 0, 99_999_999),
    (5, 2_500, 4_000),
];

/// Parse an address literal.
pub fn address(hex: &str) -> Address {
    Address::from_str(hex).unwrap()
}

/// Loaded registry.
pub fn registry() -> Arc<PoolRegistry> {
    Arc::new(PoolRegistry::from_json(POOLS_JSON).unwrap())
}

/// Chain at `head` with every pool window scripted.
pub fn chain(head: u64) -> Arc<InMemoryChain> {
    let chain = Arc::new(InMemoryChain::new(head));
    let registry = registry();
    for (sous_id, start, end) in WINDOWS {
        let pool = registry.get(sous_id).unwrap();
        let contract = pool.address_on(CHAIN_ID).unwrap();
        chain.set_uint(contract, START_BLOCK_METHOD, start);
        chain.set_uint(contract, END_BLOCK_METHOD, end);
    }
    chain
}
