// src/components/claim_page.rs
use dioxus::prelude::*;

use crate::address::shorten_address;
use crate::components::modals::ClaimModal;
use crate::explorer::{checked_address_link, ExplorerLinkKind};
use crate::providers::ClaimServices;
use crate::state::AccountContext;

#[component]
pub fn ClaimPage() -> Element {
    let services = use_context::<ClaimServices>();
    let accounts = use_context::<AccountContext>();

    let account = accounts.account();
    let account_label = account
        .as_deref()
        .map(shorten_address)
        .unwrap_or_else(|| "Not connected".to_string());

    let link_chain = accounts.chain_id().unwrap_or(services.config.chain_id);
    let account_url = account
        .as_deref()
        .and_then(|a| checked_address_link(link_chain, a, ExplorerLinkKind::Address));
    let token_url = checked_address_link(
        services.config.chain_id,
        &services.config.token_address,
        ExplorerLinkKind::Token,
    );
    let token_symbol = services.config.token_symbol.clone();

    let wrong_network = matches!(
        accounts.chain_id(),
        Some(id) if id != services.config.chain_id
    );

    rsx! {
        div {
            class: "claim-page",
            header {
                class: "claim-header",
                div {
                    class: "claim-brand",
                    "half rekt"
                    if let Some(url) = token_url {
                        a {
                            class: "token-link",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{token_symbol}"
                        }
                    }
                }
                if let Some(url) = account_url {
                    a {
                        class: "account-pill",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{account_label}"
                    }
                } else {
                    div { class: "account-pill", "{account_label}" }
                }
            }
            if !services.config.is_valid() {
                div {
                    class: "warning-banner",
                    "Claim distributor is not configured. Set CLAIM_DISTRIBUTOR and CLAIM_CLAIMS_URL."
                }
            }
            if wrong_network {
                div {
                    class: "warning-banner",
                    "Your wallet is connected to a different network than the distributor."
                }
            }
            ClaimModal {}
        }
    }
}
