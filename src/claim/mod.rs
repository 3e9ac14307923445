pub mod attempt;
pub mod data;
pub mod tip;
pub mod view;

pub use attempt::{reconcile_attempt, AttemptState, ReconcileInputs, Reconciliation};
pub use data::{unclaimed_amount, ClaimFlags, ClaimsFile, UserClaimData};
pub use tip::{clamp_tip, TipPercentage};
pub use view::{select_view, ClaimView, ClaimViewInputs, InFlightStage};
