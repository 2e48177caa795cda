//! # Domain Module
//!
//! Payload shapes, form state and proposal helpers. No I/O.

pub mod config;
pub mod errors;
pub mod form;
pub mod payload;
pub mod proposal;

pub use config::*;
pub use errors::*;
pub use form::*;
pub use payload::*;
pub use proposal::*;
