// src/claim/attempt.rs
use std::fmt::Display;

/// Whether a claim transaction is being submitted or awaited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttemptState {
    attempting: bool,
}

impl AttemptState {
    pub fn is_attempting(&self) -> bool {
        self.attempting
    }

    pub fn begin(&mut self) {
        self.attempting = true;
    }

    /// Receipt observed for our submission
    pub fn complete(&mut self) {
        self.attempting = false;
    }

    /// Submission failed: back to the pre-claim view and log it.
    pub fn fail(&mut self, error: &impl Display) {
        self.attempting = false;
        log::error!("❌ Claim submission failed: {}", error);
    }

    /// Apply the submitter's outcome. Success keeps the attempt running until
    /// the receipt shows up; the hash is returned so it can be tracked.
    pub fn settle<E: Display>(&mut self, result: Result<String, E>) -> Option<String> {
        match result {
            Ok(hash) => {
                log::info!("📤 Claim submitted: {}", hash);
                Some(hash)
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileInputs {
    pub attempting: bool,
    pub submitted: bool,
    pub confirmed: bool,
    pub modal_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub attempting: bool,
    /// The modal was closed while the claim confirmed; open it again
    pub reopen_modal: bool,
}

/// Recomputed whenever any input changes. Once the receipt for our submission
/// is observed the attempt is over.
pub fn reconcile_attempt(inputs: ReconcileInputs) -> Reconciliation {
    if inputs.confirmed && inputs.submitted && inputs.attempting {
        Reconciliation {
            attempting: false,
            reopen_modal: !inputs.modal_open,
        }
    } else {
        Reconciliation {
            attempting: inputs.attempting,
            reopen_modal: false,
        }
    }
}
