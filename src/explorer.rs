// src/explorer.rs
use crate::address::to_checksum_address;

/// What an Etherscan link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerLinkKind {
    Transaction,
    Token,
    Address,
}

fn subdomain_prefix(chain_id: u64) -> &'static str {
    match chain_id {
        3 => "ropsten.",
        4 => "rinkeby.",
        5 => "goerli.",
        42 => "kovan.",
        _ => "",
    }
}

pub fn etherscan_link(chain_id: u64, data: &str, kind: ExplorerLinkKind) -> String {
    let base = format!("https://{}etherscan.io", subdomain_prefix(chain_id));
    match kind {
        ExplorerLinkKind::Transaction => format!("{}/tx/{}", base, data),
        ExplorerLinkKind::Token => format!("{}/token/{}", base, data),
        ExplorerLinkKind::Address => format!("{}/address/{}", base, data),
    }
}

/// Link to an account or contract page, `None` unless `address` is a valid address
pub fn checked_address_link(chain_id: u64, address: &str, kind: ExplorerLinkKind) -> Option<String> {
    to_checksum_address(address).map(|checksummed| etherscan_link(chain_id, &checksummed, kind))
}
