//! Proposal listing and detail helpers.

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber};

/// Lifecycle state reported by the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalState {
    /// Voting open
    Active,
    /// Not started
    Pending,
    /// Voting ended
    Closed,
}

/// Listing filter by author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalType {
    /// Every proposal
    #[default]
    All,
    /// Authored by the admin address
    Core,
    /// Everything else
    Community,
}

/// Proposal as listed by the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSummary {
    /// IPFS hash.
    pub id: String,
    /// Title.
    pub title: String,
    /// Author address as reported (any case).
    pub author: String,
    /// Lifecycle state.
    pub state: ProposalState,
    /// Snapshot block.
    pub snapshot: BlockNumber,
}

/// Route of a proposal's detail view.
pub fn proposal_path(ipfs_hash: &str) -> String {
    format!("/voting/proposal/{ipfs_hash}")
}

/// Whether the proposal was authored by `admin` (case-insensitive).
pub fn is_core_proposal(proposal: &ProposalSummary, admin: &Address) -> bool {
    admin.eq_ignore_case(&proposal.author)
}

/// Keep proposals matching `proposal_type`.
pub fn filter_proposals_by_type(
    proposals: &[ProposalSummary],
    proposal_type: ProposalType,
    admin: &Address,
) -> Vec<ProposalSummary> {
    proposals
        .iter()
        .filter(|p| match proposal_type {
            ProposalType::All => true,
            ProposalType::Core => is_core_proposal(p, admin),
            ProposalType::Community => !is_core_proposal(p, admin),
        })
        .cloned()
        .collect()
}

/// Keep proposals in `state`.
pub fn filter_proposals_by_state(
    proposals: &[ProposalSummary],
    state: ProposalState,
) -> Vec<ProposalSummary> {
    proposals.iter().filter(|p| p.state == state).cloned().collect()
}

/// Gateway link to the proposal's IPFS document.
pub fn ipfs_link(gateway: &str, id: &str) -> String {
    format!("{}/{}", gateway.trim_end_matches('/'), id)
}

/// First eight characters of the identifier.
pub fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
