use dioxus::prelude::*;

use crate::amount::TokenAmount;
use crate::claim::view::amount_label as format_amount_label;
use crate::claim::{
    clamp_tip, reconcile_attempt, select_view, AttemptState, ClaimView, ClaimViewInputs,
    InFlightStage, ReconcileInputs, TipPercentage,
};
use crate::components::common::{Confetti, Spinner, TokenBadge};
use crate::components::modals::AddressClaimModal;
use crate::providers::ClaimServices;
use crate::state::{AccountContext, ApplicationModal, LoadingFlag, ModalVisibility};
use crate::storage::save_transactions_to_storage;
use crate::transactions::{TransactionDetails, TransactionStore};

#[component]
pub fn ClaimModal() -> Element {
    let services = use_context::<ClaimServices>();
    let accounts = use_context::<AccountContext>();
    let loading = use_context::<LoadingFlag>();
    let mut modals = use_context::<ModalVisibility>();
    let mut transactions = use_context::<Signal<TransactionStore>>();

    // used for UI loading states
    let mut attempt = use_signal(AttemptState::default);
    let mut tip = use_signal(TipPercentage::default);
    let mut unclaimed = use_signal(|| None as Option<TokenAmount>);
    let mut non_lp = use_signal(|| None as Option<TokenAmount>);
    let mut lookup_pending = use_signal(|| false);

    let tracked_chain = services.config.chain_id;
    let token_symbol = services.config.token_symbol.clone();

    // Look up the unclaimed amount whenever the connected account changes
    let data_source = services.data.clone();
    use_effect(move || {
        unclaimed.set(None);
        non_lp.set(None);
        let Some(account) = accounts.account() else {
            lookup_pending.set(false);
            return;
        };

        lookup_pending.set(true);
        let data_source = data_source.clone();
        spawn(async move {
            let result = data_source.unclaimed_amount(&account).await;

            // the wallet may have switched accounts while we waited
            if accounts.peek_account().as_deref() != Some(account.as_str()) {
                return;
            }
            match result {
                Ok(amount) => unclaimed.set(Some(amount)),
                Err(e) => log::warn!("Failed to look up unclaimed amount for {}: {}", account, e),
            }
            lookup_pending.set(false);

            if let Ok(Some(data)) = data_source.user_claim_data(&account).await {
                let amount = data.non_lp_amount(data_source.token_decimals());
                non_lp.set((!amount.is_zero()).then_some(amount));
            }
        });
    });

    // Once our claim's receipt shows up the attempt is over; reopen the modal if it was closed
    use_effect(move || {
        let account = accounts.account();
        let submission = transactions
            .read()
            .user_has_submitted_claim(tracked_chain, account.as_deref());
        let outcome = reconcile_attempt(ReconcileInputs {
            attempting: attempt.read().is_attempting(),
            submitted: submission.submitted,
            confirmed: submission.confirmed(),
            modal_open: modals.is_open(ApplicationModal::SelfClaim),
        });

        if !outcome.attempting && attempt.peek().is_attempting() {
            attempt.write().complete();
        }
        if outcome.reopen_modal {
            modals.toggle(ApplicationModal::SelfClaim);
        }
    });

    let account = accounts.account();
    let chain_id = accounts.chain_id();
    let is_open = modals.is_open(ApplicationModal::SelfClaim);
    let submission = transactions
        .read()
        .user_has_submitted_claim(tracked_chain, account.as_deref());
    let claim_confirmed = submission.confirmed();
    let unclaimed_amount = unclaimed();

    let view = select_view(&ClaimViewInputs {
        loading: loading.is_loading(),
        lookup_pending: lookup_pending(),
        unclaimed: unclaimed_amount.as_ref(),
        token_symbol: &token_symbol,
        account: account.as_deref(),
        chain_id,
        attempting: attempt.read().is_attempting(),
        submitted: submission.submitted,
        confirmed: claim_confirmed,
        tx_hash: submission.hash(),
    });

    let detail = non_lp().map(|amount| {
        format!("Includes {} from SOCKS and user allocations", format_amount_label(&amount, &token_symbol))
    });

    let submitter = services.submitter.clone();
    let on_claim = move |_: MouseEvent| {
        let Some(account) = accounts.account() else {
            return;
        };
        let submitter = submitter.clone();
        let tip_value = tip();
        let summary = (*unclaimed.peek())
            .map(|amount| format!("Claim {} {}", amount.to_fixed(0, Some(',')), services.config.token_symbol));

        attempt.write().begin();
        spawn(async move {
            let result = submitter.submit_claim(&account, tip_value).await;
            // reset modal and log error on failure
            if let Some(hash) = attempt.write().settle(result) {
                transactions.write().add_transaction(
                    tracked_chain,
                    TransactionDetails::claim(&hash, &account, &account, summary),
                );
                save_transactions_to_storage(&transactions.read());
            }
        });
    };

    match view {
        ClaimView::Loading => rsx! {
            div {
                class: "modal-backdrop",
                div {
                    class: "modal-content loading-wrap",
                    div { class: "load-text", "Looking for {token_symbol}" }
                    Spinner { size: 90 }
                }
            }
        },
        ClaimView::NoClaim => rsx! {
            AddressClaimModal {}
        },
        _ if !is_open => rsx! {
            button {
                class: "modal-button primary reopen-claim",
                onclick: move |_| modals.toggle(ApplicationModal::SelfClaim),
                "Claim {token_symbol}"
            }
        },
        ClaimView::PreClaim { amount_label, claim_enabled } => rsx! {
            div {
                class: "modal-backdrop",
                div {
                    class: "modal-content claim-modal",
                    onclick: move |e| e.stop_propagation(),
                    button {
                        class: "modal-close",
                        onclick: move |_| modals.toggle(ApplicationModal::SelfClaim),
                        "×"
                    }
                    PreClaimCard {
                        title: format!("Claim {} from Eminence", token_symbol),
                        amount_label,
                        detail,
                        claim_label: format!("Claim {}", token_symbol),
                        claim_enabled,
                        onclaim: on_claim,
                    }
                    TipSection { tip: tip(), onchange: move |value| tip.set(value) }
                }
            }
        },
        ClaimView::InFlight { amount_label, stage } => rsx! {
            div {
                class: "modal-backdrop",
                div {
                    class: "modal-content claim-modal",
                    onclick: move |e| e.stop_propagation(),
                    Confetti { start: is_open && claim_confirmed }
                    button {
                        class: "modal-close",
                        onclick: move |_| modals.toggle(ApplicationModal::SelfClaim),
                        "×"
                    }
                    InFlightCard { amount_label, stage, token_symbol: token_symbol.clone() }
                    TipSection { tip: tip(), onchange: move |value| tip.set(value) }
                }
            }
        },
    }
}

#[component]
pub fn PreClaimCard(
    title: String,
    amount_label: String,
    claim_label: String,
    claim_enabled: bool,
    onclaim: EventHandler<MouseEvent>,
    detail: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "claim-card",
            div { class: "claim-card-title", "{title}" }
            div { class: "claim-amount", "{amount_label}" }
            if let Some(detail) = detail {
                div { class: "claim-detail", "{detail}" }
            }
        }
        div {
            class: "modal-buttons",
            button {
                class: "modal-button primary claim-button",
                disabled: !claim_enabled,
                onclick: move |e| onclaim.call(e),
                "{claim_label}"
            }
        }
    }
}

#[component]
pub fn InFlightCard(amount_label: String, stage: InFlightStage, token_symbol: String) -> Element {
    let confirmed = stage == InFlightStage::Confirmed;

    rsx! {
        div {
            class: "confirm-or-loading",
            div {
                class: "confirmed-icon",
                if confirmed {
                    TokenBadge { symbol: token_symbol }
                } else {
                    Spinner { size: 90 }
                }
            }
            div {
                class: "claim-status",
                h2 { class: "modal-title", if confirmed { "Claimed!" } else { "Claiming" } }
                if !confirmed {
                    div { class: "claim-amount", "{amount_label}" }
                }
            }
            {match stage {
                InFlightStage::Confirmed => rsx! {
                    div {
                        class: "claim-subheader",
                        span { role: "img", "aria-label": "party-hat", "🎉 " }
                        "Welcome to team half rekt :) "
                        span { role: "img", "aria-label": "party-hat", "🎉" }
                    }
                },
                InFlightStage::AwaitingWallet => rsx! {
                    div { class: "claim-subheader", "Confirm this transaction in your wallet" }
                },
                InFlightStage::AwaitingChain { explorer_url: Some(url) } => rsx! {
                    a {
                        class: "external-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View transaction on Etherscan"
                    }
                },
                InFlightStage::AwaitingChain { explorer_url: None } => rsx! {},
            }}
        }
    }
}

#[component]
pub fn TipSection(tip: TipPercentage, onchange: EventHandler<TipPercentage>) -> Element {
    let value = tip.input_value();

    rsx! {
        div {
            class: "tip-wrap",
            div { class: "tip-text", "Tip developers: {value}%" }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                value: "{value}",
                oninput: move |e| onchange.call(clamp_tip(&e.value())),
            }
            div {
                class: "disclaimer",
                "The return of funds to you was made possible by a team of volunteers who worked for free to make this happen. "
                "Please consider tipping them a portion of your recovered funds as a way to say thank you."
            }
        }
    }
}
