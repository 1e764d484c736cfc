//! algod v2 REST client.

use crate::address::application_address;
use crate::errors::ChainError;
use crate::state::{decode_global_state, OnChainGoal, TealKeyValue};
use algosave_core::Sourced;
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const API_TOKEN_HEADER: &str = "X-Algo-API-Token";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Read-only client for an Algorand node.
pub struct AlgodClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

// ============================================================================
// Response structures for the algod v2 API
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApplicationResponse {
    params: ApplicationParams,
}

#[derive(Debug, Deserialize)]
struct ApplicationParams {
    #[serde(rename = "global-state", default)]
    global_state: Vec<TealKeyValue>,
}

#[derive(Debug, Deserialize)]
struct AccountResponse {
    amount: u64,
}

impl AlgodClient {
    /// `api_token` may be empty for public nodes.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());
        AlgodClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ChainError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url}");

        let mut request = self.client.get(&url);
        if let Some(token) = &self.api_token {
            request = request.header(API_TOKEN_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("{context}: node returned {status}");
            return Err(ChainError::NodeStatus {
                status: status.as_u16(),
                context: context.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Fetch the authoritative state of a goal contract.
    ///
    /// `app_id == 0` marks goals created before contract integration; those
    /// degrade to a zeroed state tagged as a fallback instead of hitting the
    /// node. Node failures for real app ids propagate as errors.
    pub async fn fetch_goal_state(&self, app_id: u64) -> Result<Sourced<OnChainGoal>, ChainError> {
        if app_id == 0 {
            return Ok(Sourced::Fallback {
                value: OnChainGoal::default(),
                reason: "goal has no deployed contract (app id 0)".to_string(),
            });
        }

        let app: ApplicationResponse = self
            .get_json(
                &format!("/v2/applications/{app_id}"),
                &format!("application {app_id}"),
            )
            .await
            .map_err(|e| match e {
                ChainError::NodeStatus { status: 404, .. } => {
                    ChainError::ApplicationNotFound(app_id)
                }
                other => other,
            })?;

        let mut goal = decode_global_state(&app.params.global_state)?;

        let escrow = application_address(app_id);
        let account: AccountResponse = self
            .get_json(
                &format!("/v2/accounts/{escrow}"),
                &format!("escrow account of application {app_id}"),
            )
            .await?;
        goal.balance = account.amount;

        Ok(Sourced::Fresh(goal))
    }
}
