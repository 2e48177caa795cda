//! # HV-03 Governance
//!
//! Off-chain governance for the Harvest front-end: proposals and votes are
//! built as canonical JSON, personal-signed by the user's chain identity and
//! posted to a Snapshot-style relay.
//!
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Submission Flow
//!
//! 1. `ProposalWorkflow::open` reads the chain head once (snapshot block)
//! 2. Form edits flow through the `FormAction` reducer
//! 3. `submit` validates, builds the payload and serializes it
//! 4. The signer signs that exact string (no timeout; user may decline)
//! 5. `{address, msg, sig}` is POSTed to the hub
//! 6. On success the navigator is sent to `/voting/proposal/{ipfsHash}`
//!
//! ## Module Structure
//!
//! ```text
//! hv-03-governance/
//! ├── domain/     # Payloads, form reducer, proposal helpers, config, errors
//! ├── ports/      # MessageSigner, RelayClient, Navigator
//! ├── adapters/   # HttpRelayClient, LocalKeySigner, mocks
//! └── service.rs  # ProposalWorkflow, VoteWorkflow
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    personal_message_hash, HttpRelayClient, LocalKeySigner, MockRelayClient, MockSigner,
    RecordingNavigator,
};
pub use domain::{
    build_proposal, build_vote, canonical_json, combine_date_and_time, filter_proposals_by_state,
    filter_proposals_by_type, generate_metadata, ipfs_link, is_core_proposal, proposal_path,
    reduce, short_id, Choice, ConfigError, FieldError, FormAction, FormErrors, FormField,
    FormState, GovernanceError, Metadata, PayloadEnvelope, ProposalDraft, ProposalPayload,
    ProposalState, ProposalSummary, ProposalType, SignedMessage, SnapshotCommand,
    SnapshotConfig, TouchedFields, VotePayload, MINIMUM_CHOICES,
};
pub use ports::{MessageSigner, Navigator, RelayClient, RelayReceipt, VotingPowerRequest};
pub use service::{get_voting_power, ProposalWorkflow, VoteWorkflow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
