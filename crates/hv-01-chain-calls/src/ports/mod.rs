//! # Ports Layer (Hexagonal Architecture)
//!
//! Outbound interfaces to the chain client.

pub mod outbound;

pub use outbound::*;
