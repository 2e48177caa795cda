//! # Harvest Telemetry
//!
//! Structured logging for the Harvest crates via `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use harvest_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&TelemetryConfig::from_env())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `harvest` | Service name in log events |
//! | `HV_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `HV_JSON_LOGS` | `false` | JSON output |
//! | `HV_CONSOLE_OUTPUT` | `true` | Console output |

#![warn(missing_docs)]

mod config;
mod subscriber;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use subscriber::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),

    /// Filter directive could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
