use serde::{Deserialize, Serialize};

use crate::address::is_address;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_CHAIN_ID: u64 = 1;
pub const DEFAULT_TOKEN_SYMBOL: &str = "DAI";
pub const DEFAULT_TOKEN_ADDRESS: &str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
pub const DEFAULT_RECEIPT_POLL_SECS: u64 = 4;

/// Claim distributor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimConfig {
    /// Wallet JSON-RPC endpoint; also used to sign and send the claim
    pub rpc_url: String,
    /// Chain the distributor lives on
    pub chain_id: u64,
    /// Merkle distributor contract address
    pub distributor: String,
    /// Location of the distributor's claims JSON
    pub claims_url: String,
    pub token_symbol: String,
    /// ERC-20 being distributed, linked from the page header
    pub token_address: String,
    pub token_decimals: u8,
    /// Seconds between receipt checks for pending claims
    pub receipt_poll_secs: u64,
}

impl Default for ClaimConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            distributor: String::new(),
            claims_url: String::new(),
            token_symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            token_address: DEFAULT_TOKEN_ADDRESS.to_string(),
            token_decimals: DEFAULT_TOKEN_DECIMALS,
            receipt_poll_secs: DEFAULT_RECEIPT_POLL_SECS,
        }
    }
}

impl ClaimConfig {
    /// Load claim configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            rpc_url: lookup("CLAIM_RPC_URL").unwrap_or(defaults.rpc_url),
            chain_id: lookup("CLAIM_CHAIN_ID")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.chain_id),
            distributor: lookup("CLAIM_DISTRIBUTOR").unwrap_or_default(),
            claims_url: lookup("CLAIM_CLAIMS_URL").unwrap_or_default(),
            token_symbol: lookup("CLAIM_TOKEN_SYMBOL").unwrap_or(defaults.token_symbol),
            token_address: lookup("CLAIM_TOKEN_ADDRESS").unwrap_or(defaults.token_address),
            token_decimals: lookup("CLAIM_TOKEN_DECIMALS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.token_decimals),
            receipt_poll_secs: lookup("CLAIM_RECEIPT_POLL_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.receipt_poll_secs),
        }
    }

    /// Check if the distributor is properly configured
    pub fn is_valid(&self) -> bool {
        is_address(&self.distributor) && !self.rpc_url.is_empty() && !self.claims_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = ClaimConfig::from_lookup(|_| None);
        assert_eq!(config, ClaimConfig::default());
        assert!(!config.is_valid());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CLAIM_RPC_URL", "https://rpc.example"),
            ("CLAIM_CHAIN_ID", "4"),
            ("CLAIM_DISTRIBUTOR", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
            ("CLAIM_CLAIMS_URL", "https://claims.example/claims.json"),
            ("CLAIM_RECEIPT_POLL_SECS", "0"),
            ("CLAIM_TOKEN_DECIMALS", "not a number"),
            ("CLAIM_TOKEN_ADDRESS", "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
        ]);
        let config = ClaimConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.chain_id, 4);
        assert_eq!(config.rpc_url, "https://rpc.example");
        assert_eq!(config.receipt_poll_secs, DEFAULT_RECEIPT_POLL_SECS);
        assert_eq!(config.token_decimals, DEFAULT_TOKEN_DECIMALS);
        assert_eq!(config.token_address, "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359");
        assert!(config.is_valid());
    }
}
