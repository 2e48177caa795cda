//! # Governance Workflows
//!
//! [`ProposalWorkflow`] owns one proposal form from open to submit:
//!
//! ```text
//! open ──► apply(FormAction)* ──► submit(now)
//!            │                       │
//!            ▼                       ▼
//!      errors / visible_errors   build ─► sign ─► relay ─► navigate
//! ```
//!
//! The snapshot block is read once in `open` and never re-fetched. A
//! rejected signature leaves the form intact so the user can retry; every
//! retry builds a fresh, newly timestamped payload.

use chrono::{DateTime, Utc};
use hv_01_chain_calls::ChainCallAdapter;
use shared_types::{Address, BlockNumber};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::{
    build_proposal, build_vote, canonical_json, proposal_path, reduce, FormAction, FormErrors,
    FormState, GovernanceError, SignedMessage, SnapshotConfig, TouchedFields,
};
use crate::ports::{MessageSigner, Navigator, RelayClient, RelayReceipt, VotingPowerRequest};

/// Proposal authoring session.
pub struct ProposalWorkflow<S: MessageSigner, R: RelayClient, N: Navigator> {
    signer: Arc<S>,
    relay: Arc<R>,
    navigator: Arc<N>,
    config: SnapshotConfig,
    state: FormState,
    touched: TouchedFields,
}

impl<S: MessageSigner, R: RelayClient, N: Navigator> ProposalWorkflow<S, R, N> {
    /// Open a blank form, capturing the current head as the snapshot block.
    pub async fn open<C: ChainCallAdapter + ?Sized>(
        chain: &C,
        signer: Arc<S>,
        relay: Arc<R>,
        navigator: Arc<N>,
        config: SnapshotConfig,
    ) -> Result<Self, GovernanceError> {
        config.validate()?;
        let snapshot = chain.block_number().await?;
        debug!(snapshot, "[hv-03] Proposal form opened");

        Ok(Self {
            signer,
            relay,
            navigator,
            config,
            state: FormState::new(snapshot),
            touched: TouchedFields::default(),
        })
    }

    /// Current form state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Fields edited so far.
    pub fn touched(&self) -> &TouchedFields {
        &self.touched
    }

    /// Snapshot block captured at open.
    pub fn snapshot(&self) -> BlockNumber {
        self.state.snapshot
    }

    /// Apply one form edit.
    pub fn apply(&mut self, action: FormAction) {
        let (state, touched) = reduce(&self.state, &self.touched, action);
        self.state = state;
        self.touched = touched;
    }

    /// All validation errors.
    pub fn errors(&self) -> FormErrors {
        self.state.validate()
    }

    /// Errors on fields the user has touched.
    pub fn visible_errors(&self) -> FormErrors {
        self.errors().visible(&self.touched)
    }

    /// Submission is allowed only when the form is error-free.
    pub fn can_submit(&self) -> bool {
        self.errors().is_empty()
    }

    /// Build, sign and relay the proposal, then navigate to it.
    ///
    /// Returns the relay's identifier for the new proposal.
    pub async fn submit(&mut self, now: DateTime<Utc>) -> Result<String, GovernanceError> {
        let draft = self
            .state
            .to_draft()
            .map_err(|errors| GovernanceError::InvalidForm(errors.fields()))?;

        let payload = build_proposal(&self.config, &draft, now);
        let msg = canonical_json(&payload)?;

        let sig = self.signer.sign_message(&msg).await.inspect_err(|err| {
            warn!(error = %err, "[hv-03] Proposal signature failed, form kept");
        })?;

        let message = SignedMessage {
            address: self.signer.address().to_checksum(),
            msg,
            sig,
        };
        let receipt = self.relay.send_message(&message).await.inspect_err(|err| {
            warn!(error = %err, "[hv-03] Proposal submission failed");
        })?;

        self.navigator.push(&proposal_path(&receipt.ipfs_hash));
        info!(
            ipfs_hash = %receipt.ipfs_hash,
            snapshot = draft.snapshot,
            "[hv-03] Proposal created"
        );
        Ok(receipt.ipfs_hash)
    }
}

/// Vote casting.
pub struct VoteWorkflow<S: MessageSigner, R: RelayClient> {
    signer: Arc<S>,
    relay: Arc<R>,
    config: SnapshotConfig,
}

impl<S: MessageSigner, R: RelayClient> VoteWorkflow<S, R> {
    /// Create the workflow.
    pub fn new(signer: Arc<S>, relay: Arc<R>, config: SnapshotConfig) -> Self {
        Self {
            signer,
            relay,
            config,
        }
    }

    /// Vote for 1-based `choice` on `proposal`.
    pub async fn cast(
        &self,
        proposal: &str,
        choice: u32,
        now: DateTime<Utc>,
    ) -> Result<RelayReceipt, GovernanceError> {
        if choice == 0 {
            return Err(GovernanceError::InvalidChoice(choice));
        }

        let msg = canonical_json(&build_vote(&self.config, proposal, choice, now))?;
        let sig = self.signer.sign_message(&msg).await.inspect_err(|err| {
            warn!(error = %err, "[hv-03] Vote signature failed");
        })?;

        let message = SignedMessage {
            address: self.signer.address().to_checksum(),
            msg,
            sig,
        };
        let receipt = self.relay.send_message(&message).await?;
        info!(proposal, choice, "[hv-03] Vote cast");
        Ok(receipt)
    }
}

/// Voting power of `account` from the given pools at `block` (head when `None`).
pub async fn get_voting_power<R: RelayClient + ?Sized>(
    relay: &R,
    account: &Address,
    pool_addresses: &[Address],
    block: Option<BlockNumber>,
) -> Result<f64, GovernanceError> {
    let request = VotingPowerRequest {
        address: account.to_checksum(),
        block,
        pool_addresses: pool_addresses.iter().map(Address::to_checksum).collect(),
    };
    relay.voting_power(&request).await
}
