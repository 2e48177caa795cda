//! # Snapshot Payloads
//!
//! Canonical message shapes accepted by the relay. Field declaration order
//! is the serialized order and is part of the signed form:
//!
//! ```text
//! {version, timestamp, space, type, payload: {...}}
//! ```
//!
//! Builders always return fresh values; nothing is mutated after build.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::BlockNumber;

use super::config::SnapshotConfig;
use super::errors::GovernanceError;

/// Relay command tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotCommand {
    /// Create a proposal.
    Proposal,
    /// Cast a vote.
    Vote,
}

/// Fields common to every relay message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadEnvelope<T> {
    /// Protocol version.
    pub version: String,
    /// Submission time, whole epoch seconds as a decimal string.
    pub timestamp: String,
    /// Governance namespace.
    pub space: String,
    /// Command tag.
    #[serde(rename = "type")]
    pub command: SnapshotCommand,
    /// Command body.
    pub payload: T,
}

/// Parameters of the voting strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyParams {
    /// Governance token address.
    pub address: String,
    /// Chef contracts counted by the strategy (always empty here).
    #[serde(rename = "chefAddresses")]
    pub chef_addresses: Vec<String>,
}

/// Voting strategy descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    /// Strategy name.
    pub name: String,
    /// Strategy parameters.
    pub params: StrategyParams,
}

/// Metadata the relay uses to validate a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Strategies in effect.
    pub strategies: Vec<Strategy>,
}

/// Body of a proposal-creation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalPayload {
    /// Title.
    pub name: String,
    /// Markdown body.
    pub body: String,
    /// Block at which voting power is measured.
    pub snapshot: BlockNumber,
    /// Voting start, epoch seconds.
    pub start: i64,
    /// Voting end, epoch seconds.
    pub end: i64,
    /// Ordered choices.
    pub choices: Vec<String>,
    /// Strategy metadata.
    pub metadata: Metadata,
}

/// Body of a vote message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotePayload {
    /// Proposal identifier (IPFS hash).
    pub proposal: String,
    /// 1-based choice index.
    pub choice: u32,
    /// Strategy metadata.
    pub metadata: Metadata,
}

/// Validated proposal content, ready to be built into a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDraft {
    /// Title.
    pub name: String,
    /// Markdown body.
    pub body: String,
    /// Choices in display order; blank entries are dropped at build.
    pub choices: Vec<String>,
    /// Voting start, epoch seconds.
    pub start: i64,
    /// Voting end, epoch seconds.
    pub end: i64,
    /// Snapshot block captured when the form opened.
    pub snapshot: BlockNumber,
}

/// Message posted to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    /// Signer address.
    pub address: String,
    /// Exact JSON string that was signed.
    pub msg: String,
    /// Hex signature over `msg`.
    pub sig: String,
}

/// Strategy metadata for the configured space and token.
pub fn generate_metadata(config: &SnapshotConfig) -> Metadata {
    Metadata {
        strategies: vec![Strategy {
            name: config.strategy_name.clone(),
            params: StrategyParams {
                address: config.token_address.to_checksum(),
                chef_addresses: Vec::new(),
            },
        }],
    }
}

/// Epoch seconds of `now`, rounded to the nearest second.
fn submission_timestamp(now: DateTime<Utc>) -> i64 {
    (now.timestamp_millis() + 500).div_euclid(1000)
}

fn envelope<T>(
    config: &SnapshotConfig,
    command: SnapshotCommand,
    now: DateTime<Utc>,
    payload: T,
) -> PayloadEnvelope<T> {
    PayloadEnvelope {
        version: config.version.clone(),
        timestamp: submission_timestamp(now).to_string(),
        space: config.space.clone(),
        command,
        payload,
    }
}

/// Build a proposal-creation message. Empty choices are dropped.
pub fn build_proposal(
    config: &SnapshotConfig,
    draft: &ProposalDraft,
    now: DateTime<Utc>,
) -> PayloadEnvelope<ProposalPayload> {
    let choices = draft
        .choices
        .iter()
        .filter(|choice| !choice.trim().is_empty())
        .cloned()
        .collect();

    envelope(
        config,
        SnapshotCommand::Proposal,
        now,
        ProposalPayload {
            name: draft.name.clone(),
            body: draft.body.clone(),
            snapshot: draft.snapshot,
            start: draft.start,
            end: draft.end,
            choices,
            metadata: generate_metadata(config),
        },
    )
}

/// Build a vote message for `proposal`.
pub fn build_vote(
    config: &SnapshotConfig,
    proposal: &str,
    choice: u32,
    now: DateTime<Utc>,
) -> PayloadEnvelope<VotePayload> {
    envelope(
        config,
        SnapshotCommand::Vote,
        now,
        VotePayload {
            proposal: proposal.to_string(),
            choice,
            metadata: generate_metadata(config),
        },
    )
}

/// Deterministic JSON rendering; this exact string is what gets signed.
pub fn canonical_json<T: Serialize>(envelope: &PayloadEnvelope<T>) -> Result<String, GovernanceError> {
    Ok(serde_json::to_string(envelope)?)
}
