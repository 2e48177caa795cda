//! Integration flows across the Harvest crates.

pub mod eligibility_flow;
pub mod fixtures;
pub mod governance_http;
pub mod staking_flow;
