//! # Domain Module
//!
//! Call descriptors, amounts and configuration for contract interaction.

pub mod amount;
pub mod call;
pub mod config;
pub mod errors;

pub use amount::*;
pub use call::*;
pub use config::*;
pub use errors::*;
