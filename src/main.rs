use dioxus::prelude::*;
use std::sync::Arc;

mod abi;
mod address;
mod amount;
mod claim;
mod components;
mod config;
mod error;
mod explorer;
mod providers;
mod rpc;
mod state;
mod storage;
mod transactions;

use components::*;
use config::ClaimConfig;
use providers::{ClaimServices, RpcClaimService};
use rpc::EthRpcClient;
use state::{AccountContext, ApplicationModal, LoadingFlag, ModalVisibility};
use transactions::poll_receipts_loop;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    ClaimPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ClaimConfig::from_env);
    let client = use_hook(|| Arc::new(EthRpcClient::new(&config.rpc_url)));
    let services = use_hook(|| {
        let service = Arc::new(RpcClaimService::new(client.clone(), config.clone()));
        ClaimServices {
            data: service.clone(),
            submitter: service,
            config: config.clone(),
        }
    });

    let mut account = use_signal(|| None as Option<String>);
    let mut chain_id = use_signal(|| None as Option<u64>);
    let mut loading = use_signal(|| true);
    let open_modal = use_signal(|| Some(ApplicationModal::SelfClaim));
    let transactions = use_signal(storage::load_transactions_from_storage);

    use_context_provider(|| services.clone());
    use_context_provider(|| AccountContext::new(account, chain_id));
    use_context_provider(|| LoadingFlag::new(loading));
    use_context_provider(|| ModalVisibility::new(open_modal));
    use_context_provider(|| transactions);

    // Find the wallet account and warm the claims file before showing the claim
    let discovery_client = client.clone();
    let discovery_data = services.data.clone();
    let expected_chain = config.chain_id;
    use_effect(move || {
        let client = discovery_client.clone();
        let data = discovery_data.clone();
        spawn(async move {
            loading.set(true);

            match client.chain_id().await {
                Ok(id) => {
                    if id != expected_chain {
                        log::warn!("⚠️ Wallet is on chain {} but the distributor is on {}", id, expected_chain);
                    }
                    chain_id.set(Some(id));
                }
                Err(e) => log::error!("❌ Failed to read chain id from {}: {}", client.rpc_url(), e),
            }

            match client.account().await {
                Ok(Some(addr)) => {
                    log::info!("Connected account {}", addr);
                    if let Err(e) = data.user_claim_data(&addr).await {
                        log::warn!("Failed to load claim data for {}: {}", addr, e);
                    }
                    account.set(Some(addr));
                }
                Ok(None) => log::warn!("Wallet exposes no accounts"),
                Err(e) => log::error!("❌ Failed to read accounts: {}", e),
            }

            loading.set(false);
        });
    });

    // Pick up receipts for pending claims, including ones restored from storage
    let poll_client = client.clone();
    let poll_secs = config.receipt_poll_secs;
    use_effect(move || {
        spawn(poll_receipts_loop(poll_client.clone(), transactions, expected_chain, poll_secs));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

