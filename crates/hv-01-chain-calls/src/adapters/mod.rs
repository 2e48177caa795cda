//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits for contract calls.

mod in_memory;

pub use in_memory::{InMemoryChain, RecordedWrite};
