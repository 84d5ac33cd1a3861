//! HTTP gateway for Horizon and the friendbot faucet.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error as ThisError;

pub const TESTNET_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";
pub const TESTNET_FRIENDBOT_URL: &str = "https://friendbot.stellar.org";

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("faucet returned HTTP {0}")]
    FaucetRejected(StatusCode),
    #[error("transaction rejected ({status}): {detail}")]
    TransactionRejected { status: StatusCode, detail: String },
    #[error("malformed account record: {0}")]
    MalformedAccount(String),
}

/// The slice of a Horizon account record this client needs.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub account_id: String,
    pub sequence: String,
}

impl AccountRecord {
    /// Current sequence number; Horizon serves it as a decimal string.
    pub fn sequence_number(&self) -> Result<i64, Error> {
        self.sequence
            .parse()
            .map_err(|_| Error::MalformedAccount(format!("sequence {:?}", self.sequence)))
    }
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    hash: String,
}

#[derive(Debug, Deserialize)]
struct SubmitErrorResponse {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    extras: Option<SubmitErrorExtras>,
}

#[derive(Debug, Deserialize)]
struct SubmitErrorExtras {
    #[serde(default)]
    result_codes: Option<serde_json::Value>,
}

/// Shared, read-only handle to the remote endpoints. Constructed once at
/// startup; tests point it at local servers.
pub struct HorizonClient {
    http: reqwest::Client,
    horizon_url: String,
    friendbot_url: String,
}

impl HorizonClient {
    pub fn testnet() -> Self {
        Self::new(TESTNET_HORIZON_URL, TESTNET_FRIENDBOT_URL)
    }

    pub fn new(horizon_url: impl Into<String>, friendbot_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            horizon_url: horizon_url.into(),
            friendbot_url: friendbot_url.into(),
        }
    }

    /// Ask the faucet to fund an account. Success iff it answers 2xx.
    pub async fn fund_account(&self, account_id: &str) -> Result<(), Error> {
        let res = self
            .http
            .get(&self.friendbot_url)
            .query(&[("addr", account_id)])
            .send()
            .await?;
        tracing::debug!(status = %res.status(), account_id, "friendbot response");
        if res.status().is_success() {
            Ok(())
        } else {
            Err(Error::FaucetRejected(res.status()))
        }
    }

    pub async fn get_account(&self, account_id: &str) -> Result<AccountRecord, Error> {
        let res = self
            .http
            .get(format!("{}/accounts/{}", self.horizon_url, account_id))
            .send()
            .await?
            .error_for_status()?;
        Ok(res.json().await?)
    }

    /// Submit a signed transaction envelope; returns the transaction hash.
    pub async fn submit_transaction(&self, envelope_b64: &str) -> Result<String, Error> {
        let res = self
            .http
            .post(format!("{}/transactions", self.horizon_url))
            .form(&[("tx", envelope_b64)])
            .send()
            .await?;
        let status = res.status();
        if !status.is_success() {
            // Horizon explains rejections in extras.result_codes when it can.
            let detail = res
                .json::<SubmitErrorResponse>()
                .await
                .ok()
                .and_then(|e| {
                    e.extras
                        .and_then(|x| x.result_codes)
                        .map(|codes| codes.to_string())
                        .or(e.detail)
                })
                .unwrap_or_else(|| "no detail".to_string());
            return Err(Error::TransactionRejected { status, detail });
        }
        let body: SubmitResponse = res.json().await?;
        tracing::debug!(hash = %body.hash, "transaction accepted");
        Ok(body.hash)
    }
}
