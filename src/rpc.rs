use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::abi;
use crate::error::ClaimError;

/// EIP-1193 "user rejected request"
pub const USER_REJECTED_CODE: i64 = 4001;

#[derive(Debug, Serialize)]
struct RpcRequest {
    jsonrpc: String,
    id: u64,
    method: String,
    params: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

/// The parts of a transaction receipt the tracker keeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(rename = "blockNumber", default)]
    pub block_number: Option<String>,
    /// "0x1" on success, "0x0" on revert; absent before Byzantium
    #[serde(default)]
    pub status: Option<String>,
}

impl Receipt {
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() != Some("0x0")
    }
}

fn parse_response(response: RpcResponse) -> Result<Value, ClaimError> {
    if let Some(error) = response.error {
        if error.code == USER_REJECTED_CODE {
            return Err(ClaimError::Rejected(error.message));
        }
        return Err(ClaimError::Rpc(format!("{} (code {})", error.message, error.code)));
    }
    Ok(response.result.unwrap_or(Value::Null))
}

pub fn parse_hex_u64(value: &str) -> Result<u64, ClaimError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| ClaimError::Decode(format!("Missing 0x prefix: {}", value)))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| ClaimError::Decode(format!("Invalid quantity {}: {}", value, e)))
}

fn expect_str(value: &Value, what: &str) -> Result<String, ClaimError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClaimError::Decode(format!("Expected {} string, got {}", what, value)))
}

/// JSON-RPC client for the wallet's node endpoint
pub struct EthRpcClient {
    client: Client,
    rpc_url: String,
    next_id: AtomicU64,
}

impl EthRpcClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            client: Client::new(),
            rpc_url: rpc_url.to_string(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn request(&self, method: &str, params: Vec<Value>) -> Result<Value, ClaimError> {
        let request = RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method: method.to_string(),
            params,
        };

        let response = self
            .client
            .post(&self.rpc_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClaimError::Network(format!("{} returned {}", method, response.status())));
        }

        let body: RpcResponse = response.json().await?;
        parse_response(body)
    }

    pub async fn chain_id(&self) -> Result<u64, ClaimError> {
        let result = self.request("eth_chainId", vec![]).await?;
        parse_hex_u64(&expect_str(&result, "chain id")?)
    }

    /// First account the wallet exposes, if any is unlocked
    pub async fn account(&self) -> Result<Option<String>, ClaimError> {
        let result = self.request("eth_accounts", vec![]).await?;
        let accounts: Vec<String> = serde_json::from_value(result)?;
        Ok(accounts.into_iter().next())
    }

    pub async fn is_claimed(&self, distributor: &str, index: u64) -> Result<bool, ClaimError> {
        let call = json!({
            "to": distributor,
            "data": abi::encode_is_claimed(index),
        });
        let result = self.request("eth_call", vec![call, json!("latest")]).await?;
        abi::decode_bool(&expect_str(&result, "call result")?).map_err(ClaimError::Decode)
    }

    /// Hand a transaction to the wallet to sign and broadcast; returns its hash
    pub async fn send_transaction(&self, from: &str, to: &str, data: &str) -> Result<String, ClaimError> {
        let tx = json!({
            "from": from,
            "to": to,
            "data": data,
        });
        let result = self.request("eth_sendTransaction", vec![tx]).await?;
        expect_str(&result, "transaction hash")
    }

    /// `None` until the transaction is mined
    pub async fn transaction_receipt(&self, hash: &str) -> Result<Option<Receipt>, ClaimError> {
        let result = self.request("eth_getTransactionReceipt", vec![json!(hash)]).await?;
        if result.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(result)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> RpcResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_result() {
        let value = parse_response(response(r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#)).unwrap();
        assert_eq!(value, json!("0x1"));

        let value = parse_response(response(r#"{"jsonrpc":"2.0","id":1,"result":null}"#)).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_user_rejection_is_distinct() {
        let err = parse_response(response(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":4001,"message":"User denied transaction signature."}}"#,
        ))
        .unwrap_err();
        assert_eq!(err, ClaimError::Rejected("User denied transaction signature.".to_string()));

        let err = parse_response(response(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ClaimError::Rpc(msg) if msg.contains("execution reverted")));
    }

    #[test]
    fn test_parse_hex_u64() {
        assert_eq!(parse_hex_u64("0x1").unwrap(), 1);
        assert_eq!(parse_hex_u64("0x2a").unwrap(), 42);
        assert!(parse_hex_u64("42").is_err());
        assert!(parse_hex_u64("0xnope").is_err());
    }

    #[test]
    fn test_receipt_status() {
        let receipt: Receipt = serde_json::from_value(json!({
            "transactionHash": "0xabc",
            "blockNumber": "0x10",
            "status": "0x1",
            "gasUsed": "0x5208"
        }))
        .unwrap();
        assert!(receipt.succeeded());
        assert_eq!(receipt.block_number.as_deref(), Some("0x10"));

        let reverted = Receipt {
            status: Some("0x0".to_string()),
            ..receipt
        };
        assert!(!reverted.succeeded());
    }
}
