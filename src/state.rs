// src/state.rs
//! Context handles shared by the claim modals.
//!
//! Each is a thin `Copy` wrapper over signals owned by `App`, exposing only
//! what a modal is allowed to do with it.

use dioxus::prelude::*;

/// Connected wallet account and chain
#[derive(Clone, Copy, PartialEq)]
pub struct AccountContext {
    account: Signal<Option<String>>,
    chain_id: Signal<Option<u64>>,
}

impl AccountContext {
    pub fn new(account: Signal<Option<String>>, chain_id: Signal<Option<u64>>) -> Self {
        Self { account, chain_id }
    }

    pub fn account(&self) -> Option<String> {
        self.account.read().clone()
    }

    /// Current account without subscribing the caller
    pub fn peek_account(&self) -> Option<String> {
        self.account.peek().clone()
    }

    pub fn chain_id(&self) -> Option<u64> {
        *self.chain_id.read()
    }
}

/// Read-only view of the app-wide "looking up claims" flag
#[derive(Clone, Copy, PartialEq)]
pub struct LoadingFlag {
    inner: Signal<bool>,
}

impl LoadingFlag {
    pub fn new(inner: Signal<bool>) -> Self {
        Self { inner }
    }

    pub fn is_loading(&self) -> bool {
        *self.inner.read()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationModal {
    SelfClaim,
}

/// Which modal slot is open, if any
#[derive(Clone, Copy, PartialEq)]
pub struct ModalVisibility {
    open: Signal<Option<ApplicationModal>>,
}

impl ModalVisibility {
    pub fn new(open: Signal<Option<ApplicationModal>>) -> Self {
        Self { open }
    }

    pub fn is_open(&self, modal: ApplicationModal) -> bool {
        *self.open.read() == Some(modal)
    }

    pub fn toggle(&mut self, modal: ApplicationModal) {
        let next = if self.is_open(modal) { None } else { Some(modal) };
        self.open.set(next);
    }
}
