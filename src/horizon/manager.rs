//! Spawns one network task per user action and reports completions back to
//! the event loop. Tasks never panic the loop; every failure becomes an
//! event carrying the error's message.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::event::{AppEvent, FundOutcome};
use crate::horizon::client::{Error, HorizonClient};
use crate::stellar::{
    amount, Asset, Keypair, LiquidityPoolAsset, Operation, PoolId, TransactionBuilder,
    LIQUIDITY_POOL_FEE,
};

/// Validity window baked into every transaction, in seconds.
const TX_TIMEOUT_SECS: u64 = 30;

/// Trust-line limit when none is requested.
const MAX_TRUST_LIMIT: i64 = i64::MAX;

pub struct HorizonManager {
    client: Arc<HorizonClient>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl HorizonManager {
    pub fn new(client: HorizonClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            event_tx,
        }
    }

    /// Single faucet attempt; every outcome comes back as one event.
    pub fn fund_account(&self, public_key: String) {
        let client = Arc::clone(&self.client);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = match client.fund_account(&public_key).await {
                Ok(()) => FundOutcome::Funded,
                Err(Error::FaucetRejected(status)) => {
                    tracing::warn!(%status, "faucet rejected funding request");
                    FundOutcome::Rejected
                }
                Err(e) => FundOutcome::Failed(e.to_string()),
            };
            let _ = events.send(AppEvent::FundCompleted {
                public_key,
                outcome,
            });
        });
    }

    pub fn create_liquidity_pool(
        &self,
        keypair: Keypair,
        asset_name: String,
        token_a_amount: String,
        token_b_amount: String,
    ) {
        let client = Arc::clone(&self.client);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = create_pool_flow(
                &client,
                &events,
                &keypair,
                &asset_name,
                &token_a_amount,
                &token_b_amount,
            )
            .await;
            let _ = events.send(AppEvent::PoolCreateCompleted {
                result: result.map_err(|e| e.to_string()),
            });
        });
    }

    pub fn withdraw_from_pool(&self, keypair: Keypair, pool_id: String, amount: String) {
        let client = Arc::clone(&self.client);
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = withdraw_flow(&client, &keypair, &pool_id, &amount).await;
            let _ = events.send(AppEvent::WithdrawCompleted {
                result: result.map_err(|e| e.to_string()),
            });
        });
    }
}

async fn create_pool_flow(
    client: &HorizonClient,
    events: &mpsc::UnboundedSender<AppEvent>,
    keypair: &Keypair,
    asset_name: &str,
    token_a_amount: &str,
    token_b_amount: &str,
) -> anyhow::Result<String> {
    let account = client.get_account(&keypair.public_key()).await?;
    let sequence = account.sequence_number()?;
    tracing::debug!(account = %account.account_id, sequence, "fetched source account");

    let custom_asset = Asset::new(asset_name, &keypair.public_key())?;
    let pool_asset = LiquidityPoolAsset::new(Asset::native(), custom_asset, LIQUIDITY_POOL_FEE);
    let pool_id = pool_asset.pool_id();

    // The id exists before submission; the session keeps it either way.
    let _ = events.send(AppEvent::PoolIdDerived {
        pool_id: pool_id.to_hex(),
    });

    let max_amount_a = amount::to_stroops(token_a_amount)?;
    let max_amount_b = amount::to_stroops(token_b_amount)?;

    let tx = TransactionBuilder::new(keypair.public_bytes(), sequence)
        .add_operation(Operation::ChangeTrust {
            line: pool_asset,
            limit: MAX_TRUST_LIMIT,
        })
        .add_operation(Operation::LiquidityPoolDeposit {
            pool_id,
            max_amount_a,
            max_amount_b,
            min_price: (1, 1),
            max_price: (1, 1),
        })
        .set_timeout(TX_TIMEOUT_SECS)
        .build();

    tracing::info!(%pool_id, "submitting liquidity pool deposit");
    let hash = client
        .submit_transaction(&tx.sign(keypair).to_envelope_base64())
        .await?;
    Ok(hash)
}

async fn withdraw_flow(
    client: &HorizonClient,
    keypair: &Keypair,
    pool_id: &str,
    amount_text: &str,
) -> anyhow::Result<String> {
    let account = client.get_account(&keypair.public_key()).await?;
    let sequence = account.sequence_number()?;

    let pool_id = PoolId::from_hex(pool_id)?;
    let amount = amount::to_stroops(amount_text)?;

    let tx = TransactionBuilder::new(keypair.public_bytes(), sequence)
        .add_operation(Operation::LiquidityPoolWithdraw {
            pool_id,
            amount,
            min_amount_a: 0,
            min_amount_b: 0,
        })
        .set_timeout(TX_TIMEOUT_SECS)
        .build();

    tracing::info!(%pool_id, "submitting liquidity pool withdrawal");
    let hash = client
        .submit_transaction(&tx.sign(keypair).to_envelope_base64())
        .await?;
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handler;
    use crate::app::state::{ActionKind, AppState, LogKind};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Router answering both Horizon routes with canned success payloads.
    fn horizon_router(hash: &'static str) -> Router {
        Router::new()
            .route(
                "/accounts/:id",
                get(|Path(id): Path<String>| async move {
                    Json(json!({ "account_id": id, "sequence": "103720918407216" }))
                }),
            )
            .route(
                "/transactions",
                post(move || async move { Json(json!({ "hash": hash })) }),
            )
    }

    fn manager_with_events(url: String) -> (HorizonManager, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = HorizonClient::new(url.clone(), url);
        (HorizonManager::new(client, tx), rx)
    }

    #[tokio::test]
    async fn test_faucet_success_appends_one_success_line() {
        let url = serve(Router::new().route("/", get(|| async { "ok" }))).await;
        let (manager, mut rx) = manager_with_events(url);

        let kp = Keypair::random();
        manager.fund_account(kp.public_key());
        let event = rx.recv().await.unwrap();

        let mut state = AppState::new();
        state.busy.set(ActionKind::FundAccount, true);
        handler::handle_event(&mut state, event);

        assert_eq!(state.log.lines.len(), 1);
        assert_eq!(state.log.lines[0].kind, LogKind::Success);
        assert_eq!(
            state.log.lines[0].text,
            format!("Account {} successfully funded.", kp.public_key())
        );
        assert!(!state.busy.fund_account);
    }

    #[tokio::test]
    async fn test_faucet_rejection_appends_one_generic_failure_line() {
        let url = serve(Router::new().route(
            "/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        ))
        .await;
        let (manager, mut rx) = manager_with_events(url);

        let kp = Keypair::random();
        manager.fund_account(kp.public_key());
        let event = rx.recv().await.unwrap();

        let mut state = AppState::new();
        handler::handle_event(&mut state, event);

        assert_eq!(state.log.lines.len(), 1);
        assert_eq!(
            state.log.lines[0].text,
            format!("Something went wrong funding account: {}.", kp.public_key())
        );
    }

    #[tokio::test]
    async fn test_faucet_transport_error_carries_message() {
        // Bind and drop a listener so the port refuses connections.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let (manager, mut rx) = manager_with_events(url);

        manager.fund_account(Keypair::random().public_key());
        let event = rx.recv().await.unwrap();

        let message = match &event {
            AppEvent::FundCompleted {
                outcome: FundOutcome::Failed(message),
                ..
            } => message.clone(),
            other => panic!("unexpected event: {other:?}"),
        };

        let mut state = AppState::new();
        handler::handle_event(&mut state, event);
        assert_eq!(state.log.lines.len(), 1);
        assert_eq!(state.log.lines[0].kind, LogKind::Error);
        assert!(state.log.lines[0].text.contains(&message));
    }

    #[tokio::test]
    async fn test_create_pool_stores_derived_id_and_logs_hash_url() {
        let url = serve(horizon_router("cafebabe")).await;
        let (manager, mut rx) = manager_with_events(url);

        let kp = Keypair::random();
        let expected_id = LiquidityPoolAsset::new(
            Asset::native(),
            Asset::new("POOL", &kp.public_key()).unwrap(),
            LIQUIDITY_POOL_FEE,
        )
        .pool_id()
        .to_hex();

        manager.create_liquidity_pool(kp, "POOL".into(), "100".into(), "50".into());

        let mut state = AppState::new();
        state.busy.set(ActionKind::CreatePool, true);
        handler::handle_event(&mut state, rx.recv().await.unwrap());
        assert_eq!(state.pool_id.as_deref(), Some(expected_id.as_str()));

        handler::handle_event(&mut state, rx.recv().await.unwrap());
        assert!(!state.busy.create_pool);
        let last = state.log.lines.last().unwrap();
        assert_eq!(last.kind, LogKind::Success);
        assert!(last
            .text
            .contains("https://stellar.expert/explorer/testnet/tx/cafebabe"));
    }

    #[tokio::test]
    async fn test_rejected_submission_still_leaves_pool_id_set() {
        let router = Router::new()
            .route(
                "/accounts/:id",
                get(|Path(id): Path<String>| async move {
                    Json(json!({ "account_id": id, "sequence": "7" }))
                }),
            )
            .route(
                "/transactions",
                post(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "extras": { "result_codes": { "transaction": "tx_failed" } }
                        })),
                    )
                }),
            );
        let url = serve(router).await;
        let (manager, mut rx) = manager_with_events(url);

        manager.create_liquidity_pool(Keypair::random(), "POOL".into(), "1".into(), "1".into());

        let mut state = AppState::new();
        handler::handle_event(&mut state, rx.recv().await.unwrap());
        assert!(state.pool_id.is_some());

        handler::handle_event(&mut state, rx.recv().await.unwrap());
        assert!(state.pool_id.is_some());
        let last = state.log.lines.last().unwrap();
        assert_eq!(last.kind, LogKind::Error);
        assert!(last.text.starts_with("Error creating Liquidity Pool:"));
        assert!(last.text.contains("tx_failed"));
    }

    #[tokio::test]
    async fn test_invalid_amount_surfaces_as_error_after_derivation() {
        let url = serve(horizon_router("unused")).await;
        let (manager, mut rx) = manager_with_events(url);

        manager.create_liquidity_pool(
            Keypair::random(),
            "POOL".into(),
            "not-a-number".into(),
            "1".into(),
        );

        let mut state = AppState::new();
        handler::handle_event(&mut state, rx.recv().await.unwrap());
        assert!(state.pool_id.is_some());

        handler::handle_event(&mut state, rx.recv().await.unwrap());
        let last = state.log.lines.last().unwrap();
        assert_eq!(last.kind, LogKind::Error);
        assert!(last.text.contains("not-a-number"));
    }

    #[tokio::test]
    async fn test_withdraw_success_logs_explorer_url() {
        let url = serve(horizon_router("feedface")).await;
        let (manager, mut rx) = manager_with_events(url);

        manager.withdraw_from_pool(Keypair::random(), "ab".repeat(32), "5".into());

        let mut state = AppState::new();
        state.busy.set(ActionKind::Withdraw, true);
        handler::handle_event(&mut state, rx.recv().await.unwrap());

        assert!(!state.busy.withdraw);
        let last = state.log.lines.last().unwrap();
        assert_eq!(
            last.text,
            "Withdrawal successful. Transaction URL: \
             https://stellar.expert/explorer/testnet/tx/feedface"
        );
    }
}
