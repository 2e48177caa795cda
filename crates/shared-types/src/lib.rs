//! # Shared Types Crate
//!
//! Primitives used across the Harvest workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: addresses, block numbers and the pool
//!   configuration are defined once here.
//! - **Read-only configuration**: a [`PoolRegistry`] is loaded at startup and
//!   only ever shared behind an `Arc`.

pub mod entities;
pub mod errors;
pub mod pools;

pub use entities::*;
pub use errors::*;
pub use pools::*;
