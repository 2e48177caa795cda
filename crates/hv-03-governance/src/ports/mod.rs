//! # Ports Layer
//!
//! Outbound collaborators of the governance flow.

pub mod outbound;

pub use outbound::*;
