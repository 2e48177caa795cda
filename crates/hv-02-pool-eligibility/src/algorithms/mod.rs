//! # Eligibility Strategies
//!
//! - `per_pool`: independent reads per pool, fanned out concurrently
//! - `batched`: two block-pinned batch reads across all pools

mod batched;
mod per_pool;

pub use batched::BatchedFilter;
pub use per_pool::PerPoolFilter;
