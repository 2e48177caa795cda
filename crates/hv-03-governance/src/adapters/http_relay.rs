//! HTTP relay adapter.
//!
//! Posts JSON to the hub and voting-power endpoints. No retry and no
//! timeout is applied here; callers own that policy through the
//! `reqwest::Client` they pass in.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{GovernanceError, SignedMessage, SnapshotConfig};
use crate::ports::{RelayClient, RelayReceipt, VotingPowerRequest};

#[derive(Deserialize)]
struct VotingPowerResponse {
    data: f64,
}

/// Decode a voting-power body; `data` must be a JSON number.
fn decode_voting_power(body: &[u8]) -> Result<f64, GovernanceError> {
    serde_json::from_slice::<VotingPowerResponse>(body)
        .map(|response| response.data)
        .map_err(|e| GovernanceError::MalformedResponse(e.to_string()))
}

/// `reqwest` implementation of [`RelayClient`].
#[derive(Clone)]
pub struct HttpRelayClient {
    client: Client,
    hub_api: String,
    voting_api: String,
}

impl HttpRelayClient {
    /// Client with default HTTP settings.
    pub fn new(config: &SnapshotConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Client reusing an existing connection pool.
    pub fn with_client(client: Client, config: &SnapshotConfig) -> Self {
        Self {
            client,
            hub_api: config.hub_api.clone(),
            voting_api: config.voting_api.trim_end_matches('/').to_string(),
        }
    }

    fn check_status(response: &Response) -> Result<(), GovernanceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());
        warn!(status = %status, "[hv-03] Relay rejected request");
        Err(GovernanceError::RelayRejected { status: text })
    }
}

fn transport(err: reqwest::Error) -> GovernanceError {
    GovernanceError::Transport(err.to_string())
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn send_message(&self, message: &SignedMessage) -> Result<RelayReceipt, GovernanceError> {
        debug!(url = %self.hub_api, address = %message.address, "[hv-03] Posting signed message");
        let response = self
            .client
            .post(&self.hub_api)
            .header(ACCEPT, "application/json")
            .json(message)
            .send()
            .await
            .map_err(transport)?;

        Self::check_status(&response)?;

        response
            .json::<RelayReceipt>()
            .await
            .map_err(|e| GovernanceError::MalformedResponse(e.to_string()))
    }

    async fn voting_power(
        &self,
        request: &VotingPowerRequest,
    ) -> Result<f64, GovernanceError> {
        let url = format!("{}/voting-power", self.voting_api);
        debug!(url = %url, address = %request.address, "[hv-03] Querying voting power");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        Self::check_status(&response)?;

        let body = response.bytes().await.map_err(transport)?;
        decode_voting_power(&body)
    }
}
