//! # Error Types
//!
//! Errors raised while parsing shared primitives and configuration.

use thiserror::Error;

/// Errors from parsing shared types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Address string is not `0x` followed by 40 hex characters.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Pool configuration could not be decoded.
    #[error("Invalid pool configuration: {0}")]
    InvalidPoolConfig(String),

    /// Two pools share the same sous id.
    #[error("Duplicate pool sous id: {0}")]
    DuplicateSousId(u32),
}
