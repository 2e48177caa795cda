//! # HV-02 Pool Eligibility
//!
//! Answers "which reward pools were active at block B".
//!
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Activity Predicate
//!
//! Pool P is active at block B iff `startBlock(P) <= B <= bonusEndBlock(P)`.
//! The main pool (sous id 0) and pools marked finished are never returned.
//! Results keep configuration order.
//!
//! ## Strategies
//!
//! | Strategy | Round trips | Use |
//! |----------|-------------|-----|
//! | [`PerPoolFilter`] | 2 per pool, concurrent | small pool lists, tests |
//! | [`BatchedFilter`] | 2 total | production |
//!
//! Both report a pool whose reads fail as inactive rather than failing
//! the query.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::{BatchedFilter, PerPoolFilter};
pub use domain::{
    collect_active, CheckOutcome, ConfigError, EligibilityConfig, EligibilityError,
    EligibilityWindow, DEFAULT_CHAIN_ID, END_BLOCK_METHOD, START_BLOCK_METHOD,
};
pub use ports::PoolEligibility;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
