pub mod claim_page;
pub mod common;
pub mod modals;

pub use claim_page::*;
