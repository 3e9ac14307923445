// src/transactions.rs
//! Claim transactions submitted from this app, per chain.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::rpc::{EthRpcClient, Receipt};
use crate::storage::save_transactions_to_storage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimInfo {
    pub recipient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub hash: String,
    pub from: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub claim: Option<ClaimInfo>,
    #[serde(default)]
    pub receipt: Option<Receipt>,
    /// Unix millis
    pub added_time: i64,
    #[serde(default)]
    pub confirmed_time: Option<i64>,
}

impl TransactionDetails {
    pub fn claim(hash: &str, from: &str, recipient: &str, summary: Option<String>) -> Self {
        Self {
            hash: hash.to_string(),
            from: from.to_string(),
            summary,
            claim: Some(ClaimInfo {
                recipient: recipient.to_string(),
            }),
            receipt: None,
            added_time: chrono::Utc::now().timestamp_millis(),
            confirmed_time: None,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.receipt.is_some()
    }
}

/// Whether an account already has a claim in flight or confirmed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSubmission {
    pub submitted: bool,
    pub transaction: Option<TransactionDetails>,
}

impl ClaimSubmission {
    pub fn confirmed(&self) -> bool {
        self.transaction.as_ref().map_or(false, TransactionDetails::is_confirmed)
    }

    pub fn hash(&self) -> Option<&str> {
        self.transaction.as_ref().map(|tx| tx.hash.as_str())
    }
}

/// Transactions keyed by chain id, then by hash
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionStore {
    chains: HashMap<u64, HashMap<String, TransactionDetails>>,
}

impl TransactionStore {
    pub fn add_transaction(&mut self, chain_id: u64, details: TransactionDetails) {
        let chain = self.chains.entry(chain_id).or_default();
        if chain.contains_key(&details.hash) {
            log::warn!("Transaction {} already tracked", details.hash);
            return;
        }
        chain.insert(details.hash.clone(), details);
    }

    /// Record the receipt; returns false when the hash is unknown
    pub fn finalize_transaction(&mut self, chain_id: u64, hash: &str, receipt: Receipt) -> bool {
        match self.chains.get_mut(&chain_id).and_then(|c| c.get_mut(hash)) {
            Some(tx) => {
                tx.receipt = Some(receipt);
                tx.confirmed_time = Some(chrono::Utc::now().timestamp_millis());
                true
            }
            None => false,
        }
    }

    pub fn pending_hashes(&self, chain_id: u64) -> Vec<String> {
        self.chains
            .get(&chain_id)
            .map(|chain| {
                chain
                    .values()
                    .filter(|tx| !tx.is_confirmed())
                    .map(|tx| tx.hash.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Latest claim transaction whose recipient is `account`
    pub fn user_has_submitted_claim(&self, chain_id: u64, account: Option<&str>) -> ClaimSubmission {
        let Some(account) = account else {
            return ClaimSubmission::default();
        };

        let transaction = self.chains.get(&chain_id).and_then(|chain| {
            chain
                .values()
                .filter(|tx| {
                    tx.claim
                        .as_ref()
                        .map_or(false, |c| c.recipient.eq_ignore_ascii_case(account))
                })
                .max_by_key(|tx| tx.added_time)
                .cloned()
        });

        ClaimSubmission {
            submitted: transaction.is_some(),
            transaction,
        }
    }
}

/// Checks pending hashes for receipts until the app exits
pub async fn poll_receipts_loop(
    client: Arc<EthRpcClient>,
    mut store: Signal<TransactionStore>,
    chain_id: u64,
    interval_secs: u64,
) {
    loop {
        let pending = store.read().pending_hashes(chain_id);
        for hash in pending {
            match client.transaction_receipt(&hash).await {
                Ok(Some(receipt)) => {
                    if !receipt.succeeded() {
                        log::warn!("⚠️ Claim transaction {} reverted", hash);
                    }
                    log::info!(
                        "✅ Receipt found for {} in block {}",
                        hash,
                        receipt.block_number.as_deref().unwrap_or("unknown")
                    );
                    store.write().finalize_transaction(chain_id, &hash, receipt);
                    save_transactions_to_storage(&store.read());
                }
                Ok(None) => log::debug!("No receipt yet for {}", hash),
                Err(e) => log::warn!("Failed to fetch receipt for {}: {}", hash, e),
            }
        }

        tokio::time::sleep(std::time::Duration::from_secs(interval_secs)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn receipt(hash: &str) -> Receipt {
        Receipt {
            transaction_hash: hash.to_string(),
            block_number: Some("0x1".to_string()),
            status: Some("0x1".to_string()),
        }
    }

    #[test]
    fn test_submitted_then_confirmed() {
        let mut store = TransactionStore::default();
        assert!(!store.user_has_submitted_claim(1, Some(ACCOUNT)).submitted);

        store.add_transaction(1, TransactionDetails::claim("0xaa", ACCOUNT, ACCOUNT, None));
        let submission = store.user_has_submitted_claim(1, Some(&ACCOUNT.to_lowercase()));
        assert!(submission.submitted);
        assert!(!submission.confirmed());
        assert_eq!(submission.hash(), Some("0xaa"));
        assert_eq!(store.pending_hashes(1), vec!["0xaa".to_string()]);

        assert!(store.finalize_transaction(1, "0xaa", receipt("0xaa")));
        let submission = store.user_has_submitted_claim(1, Some(ACCOUNT));
        assert!(submission.confirmed());
        assert!(store.pending_hashes(1).is_empty());
        assert!(store.chains[&1]["0xaa"].confirmed_time.is_some());
    }

    #[test]
    fn test_scoped_by_chain_and_recipient() {
        let mut store = TransactionStore::default();
        store.add_transaction(4, TransactionDetails::claim("0xbb", ACCOUNT, ACCOUNT, None));

        assert!(!store.user_has_submitted_claim(1, Some(ACCOUNT)).submitted);
        assert!(!store
            .user_has_submitted_claim(4, Some("0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"))
            .submitted);
        assert!(!store.user_has_submitted_claim(4, None).submitted);
        assert!(!store.finalize_transaction(1, "0xbb", receipt("0xbb")));
    }

    #[test]
    fn test_duplicate_hash_ignored() {
        let mut store = TransactionStore::default();
        let mut first = TransactionDetails::claim("0xcc", ACCOUNT, ACCOUNT, Some("first".into()));
        first.added_time = 1;
        store.add_transaction(1, first);
        store.add_transaction(1, TransactionDetails::claim("0xcc", ACCOUNT, ACCOUNT, Some("second".into())));
        assert_eq!(store.chains[&1]["0xcc"].summary.as_deref(), Some("first"));
    }

    #[test]
    fn test_store_serializes() {
        let mut store = TransactionStore::default();
        store.add_transaction(1, TransactionDetails::claim("0xdd", ACCOUNT, ACCOUNT, None));
        let json = serde_json::to_string(&store).unwrap();
        let restored: TransactionStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
    }
}
