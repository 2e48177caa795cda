//! # Domain Module
//!
//! Eligibility windows, per-pool outcomes and their reduction.

pub mod config;
pub mod errors;
pub mod outcome;
pub mod window;

pub use config::*;
pub use errors::*;
pub use outcome::*;
pub use window::*;
