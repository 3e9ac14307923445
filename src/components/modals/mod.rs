pub mod address_claim_modal;
pub mod claim_modal;

pub use address_claim_modal::AddressClaimModal;
pub use claim_modal::ClaimModal;
