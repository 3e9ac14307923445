// src/claim/view.rs
use crate::address::is_address;
use crate::amount::TokenAmount;
use crate::explorer::{etherscan_link, ExplorerLinkKind};

/// Everything the claim modal looks at to decide what to draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimViewInputs<'a> {
    pub loading: bool,
    /// The unclaimed amount for `account` has been requested but not answered
    pub lookup_pending: bool,
    pub unclaimed: Option<&'a TokenAmount>,
    pub token_symbol: &'a str,
    pub account: Option<&'a str>,
    pub chain_id: Option<u64>,
    pub attempting: bool,
    pub submitted: bool,
    pub confirmed: bool,
    pub tx_hash: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InFlightStage {
    /// Waiting for the user to approve in their wallet
    AwaitingWallet,
    /// Broadcast, waiting on a receipt
    AwaitingChain { explorer_url: Option<String> },
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimView {
    Loading,
    /// Nothing to claim for the connected account; hand off to address lookup
    NoClaim,
    PreClaim {
        amount_label: String,
        claim_enabled: bool,
    },
    InFlight {
        amount_label: String,
        stage: InFlightStage,
    },
}

/// "1,234 DAI"
pub fn amount_label(amount: &TokenAmount, symbol: &str) -> String {
    format!("{} {}", amount.to_fixed(0, Some(',')), symbol)
}

/// Nothing to claim when the amount is unknown or rounds to zero.
pub fn has_no_claim(unclaimed: Option<&TokenAmount>) -> bool {
    unclaimed.map_or(true, |amount| amount.displays_as_zero())
}

pub fn select_view(inputs: &ClaimViewInputs) -> ClaimView {
    if inputs.loading || inputs.lookup_pending {
        return ClaimView::Loading;
    }

    let amount = match inputs.unclaimed {
        Some(amount) if !has_no_claim(Some(amount)) => amount,
        _ => return ClaimView::NoClaim,
    };
    let amount_label = amount_label(amount, inputs.token_symbol);

    if !inputs.attempting && !inputs.confirmed {
        return ClaimView::PreClaim {
            amount_label,
            claim_enabled: inputs.account.map_or(false, is_address),
        };
    }

    let stage = if inputs.confirmed {
        InFlightStage::Confirmed
    } else if !inputs.submitted {
        InFlightStage::AwaitingWallet
    } else {
        let explorer_url = match (inputs.chain_id, inputs.tx_hash) {
            (Some(chain_id), Some(hash)) => {
                Some(etherscan_link(chain_id, hash, ExplorerLinkKind::Transaction))
            }
            _ => None,
        };
        InFlightStage::AwaitingChain { explorer_url }
    };

    ClaimView::InFlight { amount_label, stage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    const ACCOUNT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn dai(whole: u64) -> TokenAmount {
        TokenAmount::from_whole(whole, 18).unwrap()
    }

    fn base(amount: &TokenAmount) -> ClaimViewInputs<'_> {
        ClaimViewInputs {
            unclaimed: Some(amount),
            token_symbol: "DAI",
            account: Some(ACCOUNT),
            chain_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_pre_claim_scenario() {
        let amount = dai(1234);
        assert_eq!(
            select_view(&base(&amount)),
            ClaimView::PreClaim {
                amount_label: "1,234 DAI".to_string(),
                claim_enabled: true,
            }
        );
    }

    #[test]
    fn test_loading_takes_precedence() {
        let amount = dai(1234);
        for (attempting, submitted, confirmed) in [
            (false, false, false),
            (true, false, false),
            (true, true, false),
            (true, true, true),
            (false, true, true),
        ] {
            let inputs = ClaimViewInputs {
                loading: true,
                attempting,
                submitted,
                confirmed,
                ..base(&amount)
            };
            assert_eq!(select_view(&inputs), ClaimView::Loading);
        }

        let inputs = ClaimViewInputs {
            loading: true,
            unclaimed: None,
            ..base(&amount)
        };
        assert_eq!(select_view(&inputs), ClaimView::Loading);
    }

    #[test]
    fn test_pending_lookup_shows_loading() {
        // account known, amount not back yet
        let amount = dai(1234);
        let inputs = ClaimViewInputs {
            unclaimed: None,
            lookup_pending: true,
            ..base(&amount)
        };
        assert_eq!(select_view(&inputs), ClaimView::Loading);

        // a stale amount from the previous account is hidden too
        let inputs = ClaimViewInputs {
            lookup_pending: true,
            ..base(&amount)
        };
        assert_eq!(select_view(&inputs), ClaimView::Loading);

        let answered = ClaimViewInputs {
            unclaimed: None,
            ..base(&amount)
        };
        assert_eq!(select_view(&answered), ClaimView::NoClaim);
    }

    #[test]
    fn test_no_claim_when_missing_or_zero() {
        let amount = dai(1234);
        let missing = ClaimViewInputs {
            unclaimed: None,
            attempting: true,
            confirmed: true,
            ..base(&amount)
        };
        assert_eq!(select_view(&missing), ClaimView::NoClaim);

        let zero = dai(0);
        assert_eq!(select_view(&base(&zero)), ClaimView::NoClaim);

        // rounds to "0"
        let dust = TokenAmount::new(U256::from(1u64), 18);
        let inputs = ClaimViewInputs {
            attempting: true,
            ..base(&dust)
        };
        assert_eq!(select_view(&inputs), ClaimView::NoClaim);
    }

    #[test]
    fn test_invalid_account_disables_claim() {
        let amount = dai(10);
        for account in [None, Some(""), Some("0x1234"), Some("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD")] {
            let inputs = ClaimViewInputs {
                account,
                ..base(&amount)
            };
            match select_view(&inputs) {
                ClaimView::PreClaim { claim_enabled, .. } => assert!(!claim_enabled),
                other => panic!("unexpected view {other:?}"),
            }
        }
    }

    #[test]
    fn test_in_flight_stages() {
        let amount = dai(5);
        let hash = "0xfeed";

        let wallet = ClaimViewInputs {
            attempting: true,
            ..base(&amount)
        };
        assert_eq!(
            select_view(&wallet),
            ClaimView::InFlight {
                amount_label: "5 DAI".to_string(),
                stage: InFlightStage::AwaitingWallet,
            }
        );

        let chain = ClaimViewInputs {
            attempting: true,
            submitted: true,
            tx_hash: Some(hash),
            ..base(&amount)
        };
        assert_eq!(
            select_view(&chain),
            ClaimView::InFlight {
                amount_label: "5 DAI".to_string(),
                stage: InFlightStage::AwaitingChain {
                    explorer_url: Some("https://etherscan.io/tx/0xfeed".to_string()),
                },
            }
        );

        let no_chain_id = ClaimViewInputs {
            chain_id: None,
            ..chain
        };
        assert_eq!(
            select_view(&no_chain_id),
            ClaimView::InFlight {
                amount_label: "5 DAI".to_string(),
                stage: InFlightStage::AwaitingChain { explorer_url: None },
            }
        );

        let confirmed = ClaimViewInputs {
            attempting: false,
            submitted: true,
            confirmed: true,
            ..base(&amount)
        };
        assert_eq!(
            select_view(&confirmed),
            ClaimView::InFlight {
                amount_label: "5 DAI".to_string(),
                stage: InFlightStage::Confirmed,
            }
        );
    }
}
