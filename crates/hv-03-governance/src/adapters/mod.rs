//! # Adapters Layer
//!
//! - `HttpRelayClient`: reqwest relay client
//! - `LocalKeySigner`: in-process secp256k1 personal_sign
//! - Mocks for tests

mod http_relay;
mod local_signer;
mod mock;

pub use http_relay::HttpRelayClient;
pub use local_signer::{personal_message_hash, LocalKeySigner};
pub use mock::{MockRelayClient, MockSigner, RecordingNavigator};
