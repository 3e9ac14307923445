// src/claim/data.rs
//! Claims file published alongside the merkle distributor.
//!
//! ```json
//! {
//!   "merkleRoot": "0x…",
//!   "tokenTotal": "0x…",
//!   "claims": {
//!     "0xAbC…": { "index": 0, "amount": "0x…", "proof": ["0x…"], "flags": { "isSOCKS": false, "isLP": true, "isUser": true } }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::address::normalize_address;
use crate::amount::TokenAmount;
use crate::error::ClaimError;

/// Whole tokens granted to SOCKS holders outside the LP allocation
pub const SOCKS_AMOUNT: u64 = 1000;
/// Whole tokens granted to direct users outside the LP allocation
pub const USER_AMOUNT: u64 = 400;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimFlags {
    #[serde(rename = "isSOCKS", default)]
    pub is_socks: bool,
    #[serde(rename = "isLP", default)]
    pub is_lp: bool,
    #[serde(rename = "isUser", default)]
    pub is_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaimData {
    pub index: u64,
    /// Hex encoded raw amount
    pub amount: String,
    pub proof: Vec<String>,
    #[serde(default)]
    pub flags: Option<ClaimFlags>,
}

impl UserClaimData {
    pub fn amount(&self, decimals: u8) -> Result<TokenAmount, ClaimError> {
        TokenAmount::from_hex(&self.amount, decimals).map_err(ClaimError::Decode)
    }

    /// Portion of the claim that did not come from LP positions.
    pub fn non_lp_amount(&self, decimals: u8) -> TokenAmount {
        let flags = self.flags.unwrap_or_default();
        let socks = if flags.is_socks { SOCKS_AMOUNT } else { 0 };
        let user = if flags.is_user { USER_AMOUNT } else { 0 };
        let whole = socks + user;
        TokenAmount::from_whole(whole, decimals).unwrap_or(TokenAmount::zero(decimals))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClaimsFile {
    merkle_root: String,
    claims: HashMap<String, UserClaimData>,
}

/// Claims keyed by lowercased address.
#[derive(Debug, Clone, Default)]
pub struct ClaimsFile {
    claims: HashMap<String, UserClaimData>,
}

impl ClaimsFile {
    pub fn from_json(json: &str) -> Result<Self, ClaimError> {
        let raw: RawClaimsFile = serde_json::from_str(json)?;

        let mut claims = HashMap::with_capacity(raw.claims.len());
        for (address, claim) in raw.claims {
            match normalize_address(&address) {
                Some(key) => {
                    claims.insert(key, claim);
                }
                None => log::warn!("⚠️ Skipping claim with invalid address: {}", address),
            }
        }

        log::info!("Loaded {} claims (root {})", claims.len(), raw.merkle_root);
        Ok(Self { claims })
    }

    /// Case-insensitive lookup
    pub fn for_account(&self, account: &str) -> Option<&UserClaimData> {
        normalize_address(account).and_then(|key| self.claims.get(&key))
    }
}

/// What is still claimable: zero once claimed or when the account has no entry.
pub fn unclaimed_amount(
    claim: Option<&UserClaimData>,
    is_claimed: bool,
    decimals: u8,
) -> Result<TokenAmount, ClaimError> {
    match claim {
        Some(data) if !is_claimed => data.amount(decimals),
        _ => Ok(TokenAmount::zero(decimals)),
    }
}
