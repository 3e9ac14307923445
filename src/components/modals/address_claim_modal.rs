use dioxus::prelude::*;

use crate::address::{shorten_address, to_checksum_address};
use crate::amount::TokenAmount;
use crate::claim::{
    reconcile_attempt, select_view, AttemptState, ClaimView, ClaimViewInputs, ReconcileInputs,
    TipPercentage,
};
use crate::components::common::{Confetti, Spinner};
use crate::components::modals::claim_modal::{InFlightCard, PreClaimCard, TipSection};
use crate::providers::ClaimServices;
use crate::state::AccountContext;
use crate::storage::save_transactions_to_storage;
use crate::transactions::{TransactionDetails, TransactionStore};

/// Claim on behalf of an address typed by the user
#[component]
pub fn AddressClaimModal() -> Element {
    let services = use_context::<ClaimServices>();
    let accounts = use_context::<AccountContext>();
    let mut transactions = use_context::<Signal<TransactionStore>>();

    let mut typed_address = use_signal(String::new);
    let mut attempt = use_signal(AttemptState::default);
    let mut tip = use_signal(TipPercentage::default);
    let mut unclaimed = use_signal(|| None as Option<TokenAmount>);
    let mut looking_up = use_signal(|| false);

    let tracked_chain = services.config.chain_id;
    let token_symbol = services.config.token_symbol.clone();

    let data_source = services.data.clone();
    use_effect(move || {
        let typed = typed_address();
        unclaimed.set(None);

        let Some(recipient) = to_checksum_address(&typed) else {
            looking_up.set(false);
            return;
        };

        looking_up.set(true);
        let data_source = data_source.clone();
        spawn(async move {
            let result = data_source.unclaimed_amount(&recipient).await;

            // Ignore answers for an address the user has since edited away
            if to_checksum_address(&typed_address.peek()).as_deref() != Some(recipient.as_str()) {
                return;
            }
            match result {
                Ok(amount) => unclaimed.set(Some(amount)),
                Err(e) => log::warn!("Failed to look up unclaimed amount for {}: {}", recipient, e),
            }
            looking_up.set(false);
        });
    });

    use_effect(move || {
        let recipient = to_checksum_address(&typed_address());
        let submission = transactions
            .read()
            .user_has_submitted_claim(tracked_chain, recipient.as_deref());
        let outcome = reconcile_attempt(ReconcileInputs {
            attempting: attempt.read().is_attempting(),
            submitted: submission.submitted,
            confirmed: submission.confirmed(),
            modal_open: true,
        });
        if !outcome.attempting && attempt.peek().is_attempting() {
            attempt.write().complete();
        }
    });

    let typed = typed_address();
    let recipient = to_checksum_address(&typed);
    let submission = transactions
        .read()
        .user_has_submitted_claim(tracked_chain, recipient.as_deref());
    let claim_confirmed = submission.confirmed();
    let unclaimed_amount = unclaimed();

    let view = select_view(&ClaimViewInputs {
        loading: false,
        lookup_pending: looking_up(),
        unclaimed: unclaimed_amount.as_ref(),
        token_symbol: &token_symbol,
        account: recipient.as_deref(),
        chain_id: accounts.chain_id(),
        attempting: attempt.read().is_attempting(),
        submitted: submission.submitted,
        confirmed: claim_confirmed,
        tx_hash: submission.hash(),
    });

    let hint = if typed.trim().is_empty() {
        None
    } else if let Some(addr) = &recipient {
        match view {
            ClaimView::NoClaim => Some(format!("No unclaimed {} for {}", token_symbol, shorten_address(addr))),
            _ => None,
        }
    } else {
        Some("Enter a valid Ethereum address".to_string())
    };

    let submitter = services.submitter.clone();
    let on_claim = move |_: MouseEvent| {
        let Some(recipient) = to_checksum_address(&typed_address.peek()) else {
            return;
        };
        let submitter = submitter.clone();
        let tip_value = tip();
        let from = accounts.account().unwrap_or_else(|| recipient.clone());

        attempt.write().begin();
        spawn(async move {
            let result = submitter.submit_claim(&recipient, tip_value).await;
            if let Some(hash) = attempt.write().settle(result) {
                transactions.write().add_transaction(
                    tracked_chain,
                    TransactionDetails::claim(&hash, &from, &recipient, None),
                );
                save_transactions_to_storage(&transactions.read());
            }
        });
    };

    let attempting = attempt.read().is_attempting();

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal-content claim-modal address-claim-modal",
                Confetti { start: claim_confirmed }
                h2 { class: "modal-title", "Claim {token_symbol} for an address" }
                div {
                    class: "info-message",
                    "The connected wallet has nothing to claim. Enter an address to check its allocation and claim it on its behalf."
                }
                input {
                    class: "address-input",
                    r#type: "text",
                    placeholder: "0x…",
                    value: "{typed}",
                    disabled: attempting,
                    oninput: move |e| typed_address.set(e.value()),
                }
                if let Some(hint) = hint {
                    div { class: "input-hint", "{hint}" }
                }
                {match view {
                    ClaimView::Loading => rsx! {
                        div { class: "loading-wrap", Spinner { size: 48 } }
                    },
                    ClaimView::NoClaim => rsx! {},
                    ClaimView::PreClaim { amount_label, claim_enabled } => rsx! {
                        PreClaimCard {
                            title: format!("Unclaimed {}", token_symbol),
                            amount_label,
                            claim_label: format!("Claim {}", token_symbol),
                            claim_enabled,
                            onclaim: on_claim,
                        }
                        TipSection { tip: tip(), onchange: move |value| tip.set(value) }
                    },
                    ClaimView::InFlight { amount_label, stage } => rsx! {
                        InFlightCard { amount_label, stage, token_symbol: token_symbol.clone() }
                    },
                }}
            }
        }
    }
}
