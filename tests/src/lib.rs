//! # Harvest Test Suite
//!
//! Cross-crate integration flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs          # Pool registry + scripted chain
//!     ├── staking_flow.rs      # hv-01 helpers against one chain
//!     ├── eligibility_flow.rs  # hv-01 batch reader feeding hv-02
//!     └── governance_http.rs   # hv-03 over HTTP against a mock relay
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p hv-tests
//! cargo test -p hv-tests integration::governance_http
//! ```

#![allow(dead_code)]

pub mod integration;
