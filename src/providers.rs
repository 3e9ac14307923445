// src/providers.rs
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::abi;
use crate::address::{is_address, to_checksum_address};
use crate::amount::TokenAmount;
use crate::claim::data::{unclaimed_amount, ClaimsFile, UserClaimData};
use crate::claim::tip::TipPercentage;
use crate::config::ClaimConfig;
use crate::error::ClaimError;
use crate::rpc::EthRpcClient;

/// Read side of the distributor: who can claim what
#[async_trait]
pub trait ClaimDataSource: Send + Sync {
    fn token_decimals(&self) -> u8;

    async fn user_claim_data(&self, account: &str) -> Result<Option<UserClaimData>, ClaimError>;

    async fn is_claimed(&self, index: u64) -> Result<bool, ClaimError>;

    /// Zero when the account has no entry or already claimed
    async fn unclaimed_amount(&self, account: &str) -> Result<TokenAmount, ClaimError> {
        let decimals = self.token_decimals();
        match self.user_claim_data(account).await? {
            Some(data) => {
                let claimed = self.is_claimed(data.index).await?;
                unclaimed_amount(Some(&data), claimed, decimals)
            }
            None => unclaimed_amount(None, false, decimals),
        }
    }
}

/// Write side: sends the claim and returns the transaction hash
#[async_trait]
pub trait ClaimSubmitter: Send + Sync {
    async fn submit_claim(&self, account: &str, tip: TipPercentage) -> Result<String, ClaimError>;
}

/// Capabilities handed to the claim modals through context
#[derive(Clone)]
pub struct ClaimServices {
    pub data: Arc<dyn ClaimDataSource>,
    pub submitter: Arc<dyn ClaimSubmitter>,
    pub config: ClaimConfig,
}

/// Claims file over HTTP, distributor reads and writes over the wallet's JSON-RPC
pub struct RpcClaimService {
    client: Arc<EthRpcClient>,
    http: Client,
    config: ClaimConfig,
    claims: OnceCell<ClaimsFile>,
}

impl RpcClaimService {
    pub fn new(client: Arc<EthRpcClient>, config: ClaimConfig) -> Self {
        Self {
            client,
            http: Client::new(),
            config,
            claims: OnceCell::new(),
        }
    }

    async fn claims_file(&self) -> Result<&ClaimsFile, ClaimError> {
        self.claims
            .get_or_try_init(|| async {
                log::info!("🔄 Fetching claims from {}", self.config.claims_url);
                let response = self.http.get(&self.config.claims_url).send().await?;
                if !response.status().is_success() {
                    return Err(ClaimError::Network(format!(
                        "Claims file request failed: {}",
                        response.status()
                    )));
                }
                let body = response.text().await?;
                ClaimsFile::from_json(&body)
            })
            .await
    }
}

#[async_trait]
impl ClaimDataSource for RpcClaimService {
    fn token_decimals(&self) -> u8 {
        self.config.token_decimals
    }

    async fn user_claim_data(&self, account: &str) -> Result<Option<UserClaimData>, ClaimError> {
        if !is_address(account) {
            return Err(ClaimError::InvalidAddress(account.to_string()));
        }
        Ok(self.claims_file().await?.for_account(account).cloned())
    }

    async fn is_claimed(&self, index: u64) -> Result<bool, ClaimError> {
        self.client.is_claimed(&self.config.distributor, index).await
    }
}

#[async_trait]
impl ClaimSubmitter for RpcClaimService {
    async fn submit_claim(&self, account: &str, tip: TipPercentage) -> Result<String, ClaimError> {
        let recipient = to_checksum_address(account)
            .ok_or_else(|| ClaimError::InvalidAddress(account.to_string()))?;
        let data = self
            .user_claim_data(&recipient)
            .await?
            .ok_or_else(|| ClaimError::NoClaim(recipient.clone()))?;
        let amount = data.amount(self.config.token_decimals)?;

        let calldata = abi::encode_claim(data.index, &recipient, amount.raw, &data.proof, tip.as_percent())
            .map_err(ClaimError::Decode)?;

        // the connected wallet pays gas even when claiming for someone else
        let from = self.client.account().await?.unwrap_or_else(|| recipient.clone());

        log::info!(
            "Submitting claim #{} for {} with {}% tip",
            data.index,
            recipient,
            tip.as_percent()
        );
        self.client
            .send_transaction(&from, &self.config.distributor, &calldata)
            .await
    }
}
