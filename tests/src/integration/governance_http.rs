//! # Governance over HTTP
//!
//! hv-03 workflows with the HTTP relay client and local-key signer,
//! against an `axum` mock relay on a loopback port.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
    use hv_03_governance::{
        get_voting_power, personal_message_hash, FormAction, GovernanceError, HttpRelayClient,
        LocalKeySigner, MessageSigner, PayloadEnvelope, ProposalPayload, ProposalWorkflow,
        RecordingNavigator, SnapshotCommand, SnapshotConfig, VoteWorkflow,
    };
    use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use shared_types::{keccak256, Address};

    use crate::integration::fixtures::{address, chain};

    const SECRET: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    struct RelayState {
        status: Mutex<StatusCode>,
        reply: Mutex<Value>,
        power_reply: Mutex<Value>,
        messages: Mutex<Vec<Value>>,
        power_requests: Mutex<Vec<Value>>,
    }

    impl RelayState {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                status: Mutex::new(StatusCode::OK),
                reply: Mutex::new(json!({"ipfsHash": "Qm123"})),
                power_reply: Mutex::new(json!({"data": 42.5})),
                messages: Mutex::new(Vec::new()),
                power_requests: Mutex::new(Vec::new()),
            })
        }
    }

    async fn hub(
        State(state): State<Arc<RelayState>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        state.messages.lock().push(body);
        let status = *state.status.lock();
        let reply = state.reply.lock().clone();
        (status, Json(reply))
    }

    async fn voting_power(
        State(state): State<Arc<RelayState>>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        state.power_requests.lock().push(body);
        Json(state.power_reply.lock().clone())
    }

    async fn spawn_relay(state: Arc<RelayState>) -> SnapshotConfig {
        let app = Router::new()
            .route("/api/message", post(hub))
            .route("/api/voting-power", post(voting_power))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        config_for(&format!("http://{addr}"))
    }

    fn config_for(base: &str) -> SnapshotConfig {
        SnapshotConfig {
            hub_api: format!("{base}/api/message"),
            voting_api: format!("{base}/api"),
            token_address: address("0x0e09fabb73bd3ade0a17ecc321fd13a19e81ce82"),
            ..Default::default()
        }
    }

    fn fill() -> Vec<FormAction> {
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        vec![
            FormAction::SetName("Test".to_string()),
            FormAction::SetBody("Body".to_string()),
            FormAction::UpdateChoice { id: 0, value: "A".to_string() },
            FormAction::UpdateChoice { id: 1, value: "B".to_string() },
            FormAction::SetStartDate(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            FormAction::SetStartTime(midnight),
            FormAction::SetEndDate(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            FormAction::SetEndTime(midnight),
        ]
    }

    fn recover(msg: &str, sig_hex: &str) -> Address {
        let bytes = hex::decode(sig_hex.trim_start_matches("0x")).unwrap();
        let signature = Signature::from_slice(&bytes[..64]).unwrap();
        let recid = RecoveryId::from_byte(bytes[64] - 27).unwrap();
        let key =
            VerifyingKey::recover_from_prehash(&personal_message_hash(msg), &signature, recid)
                .unwrap();
        let point = key.to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);
        let mut out = [0u8; 20];
        out.copy_from_slice(&hash[12..]);
        Address::new(out)
    }

    #[tokio::test]
    async fn test_proposal_submitted_over_http() {
        let _ = harvest_telemetry::init_logging(&harvest_telemetry::TelemetryConfig::default());

        let state = RelayState::new();
        let config = spawn_relay(Arc::clone(&state)).await;
        let signer = Arc::new(LocalKeySigner::from_hex(SECRET).unwrap());
        let navigator = Arc::new(RecordingNavigator::new());
        let chain = chain(100);

        let mut workflow = ProposalWorkflow::open(
            chain.as_ref(),
            Arc::clone(&signer),
            Arc::new(HttpRelayClient::new(&config)),
            Arc::clone(&navigator),
            config,
        )
        .await
        .unwrap();
        for action in fill() {
            workflow.apply(action);
        }
        assert!(workflow.can_submit());

        let now = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        let hash = workflow.submit(now).await.unwrap();

        assert_eq!(hash, "Qm123");
        assert!(navigator.paths()[0].contains("Qm123"));

        let messages = state.messages.lock().clone();
        assert_eq!(messages.len(), 1);
        let body = &messages[0];
        let msg = body["msg"].as_str().unwrap();
        let sig = body["sig"].as_str().unwrap();
        assert_eq!(body["address"], signer.address().to_checksum());

        let payload: PayloadEnvelope<ProposalPayload> = serde_json::from_str(msg).unwrap();
        assert_eq!(payload.command, SnapshotCommand::Proposal);
        assert_eq!(payload.payload.choices, vec!["A", "B"]);
        assert_eq!(payload.payload.snapshot, 100);
        assert_eq!(payload.timestamp, now.timestamp().to_string());

        assert_eq!(recover(msg, sig), signer.address());
    }

    #[tokio::test]
    async fn test_relay_error_status_surfaces() {
        let state = RelayState::new();
        *state.status.lock() = StatusCode::BAD_REQUEST;
        *state.reply.lock() = json!({"error": "unauthorized space"});
        let config = spawn_relay(Arc::clone(&state)).await;
        let navigator = Arc::new(RecordingNavigator::new());

        let mut workflow = ProposalWorkflow::open(
            chain(100).as_ref(),
            Arc::new(LocalKeySigner::from_hex(SECRET).unwrap()),
            Arc::new(HttpRelayClient::new(&config)),
            Arc::clone(&navigator),
            config,
        )
        .await
        .unwrap();
        for action in fill() {
            workflow.apply(action);
        }

        let result = workflow.submit(Utc::now()).await;
        assert_eq!(
            result,
            Err(GovernanceError::RelayRejected {
                status: "Bad Request".to_string()
            })
        );
        assert!(navigator.paths().is_empty());
        assert!(workflow.can_submit());
    }

    #[tokio::test]
    async fn test_success_without_hash_is_malformed() {
        let state = RelayState::new();
        *state.reply.lock() = json!({"ok": true});
        let config = spawn_relay(Arc::clone(&state)).await;

        let votes = VoteWorkflow::new(
            Arc::new(LocalKeySigner::from_hex(SECRET).unwrap()),
            Arc::new(HttpRelayClient::new(&config)),
            config,
        );
        let result = votes.cast("QmProposal", 1, Utc::now()).await;
        assert!(matches!(result, Err(GovernanceError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_vote_over_http() {
        let state = RelayState::new();
        let config = spawn_relay(Arc::clone(&state)).await;

        let votes = VoteWorkflow::new(
            Arc::new(LocalKeySigner::from_hex(SECRET).unwrap()),
            Arc::new(HttpRelayClient::new(&config)),
            config,
        );
        let receipt = votes.cast("QmProposal", 2, Utc::now()).await.unwrap();
        assert_eq!(receipt.ipfs_hash, "Qm123");

        let msg: Value =
            serde_json::from_str(state.messages.lock()[0]["msg"].as_str().unwrap()).unwrap();
        assert_eq!(msg["type"], "vote");
        assert_eq!(msg["payload"]["proposal"], "QmProposal");
        assert_eq!(msg["payload"]["choice"], 2);
    }

    #[tokio::test]
    async fn test_voting_power_over_http() -> anyhow::Result<()> {
        let state = RelayState::new();
        let config = spawn_relay(Arc::clone(&state)).await;
        let client = HttpRelayClient::new(&config);
        let account: Address = "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23".parse()?;
        let pool: Address = "0x0000000000000000000000000000000000000101".parse()?;

        let power = get_voting_power(&client, &account, &[pool], None).await?;
        assert_eq!(power, 42.5);

        let request = state.power_requests.lock()[0].clone();
        assert_eq!(request["address"], account.to_checksum());
        assert_eq!(request["poolAddresses"], json!([pool.to_checksum()]));
        assert!(request.get("block").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_voting_power_is_malformed() {
        let state = RelayState::new();
        *state.power_reply.lock() = json!({"data": "not-a-number"});
        let config = spawn_relay(Arc::clone(&state)).await;
        let client = HttpRelayClient::new(&config);
        let account = address("0x2c7536e3605d9c16a7a3d7b1898e529396a65c23");

        let result = get_voting_power(&client, &account, &[], Some(900)).await;
        assert!(matches!(result, Err(GovernanceError::MalformedResponse(_))));
        assert_eq!(state.power_requests.lock()[0]["block"], 900);
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let config = config_for(&format!("http://{addr}"));

        let votes = VoteWorkflow::new(
            Arc::new(LocalKeySigner::from_hex(SECRET).unwrap()),
            Arc::new(HttpRelayClient::new(&config)),
            config,
        );
        let result = votes.cast("QmProposal", 1, Utc::now()).await;
        assert!(matches!(result, Err(GovernanceError::Transport(_))));
    }
}
