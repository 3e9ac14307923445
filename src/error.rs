// src/error.rs

/// Errors raised while looking up or submitting a claim.
///
/// The claim modal never shows these to the user; they are logged and the
/// modal falls back to the pre-claim view.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimError {
    /// Transport failure talking to the node or the claims host
    Network(String),
    /// JSON-RPC error object returned by the node
    Rpc(String),
    /// Response body did not have the expected shape
    Decode(String),
    InvalidAddress(String),
    /// Account has no entry in the claims file
    NoClaim(String),
    /// The wallet refused to sign (EIP-1193 code 4001)
    Rejected(String),
}

impl std::fmt::Display for ClaimError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ClaimError::Network(msg) => write!(f, "Network error: {}", msg),
            ClaimError::Rpc(msg) => write!(f, "RPC error: {}", msg),
            ClaimError::Decode(msg) => write!(f, "Failed to decode response: {}", msg),
            ClaimError::InvalidAddress(addr) => write!(f, "Invalid address: {}", addr),
            ClaimError::NoClaim(addr) => write!(f, "No claim found for {}", addr),
            ClaimError::Rejected(msg) => write!(f, "Transaction rejected: {}", msg),
        }
    }
}

impl std::error::Error for ClaimError {}

impl From<reqwest::Error> for ClaimError {
    fn from(e: reqwest::Error) -> Self {
        ClaimError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ClaimError {
    fn from(e: serde_json::Error) -> Self {
        ClaimError::Decode(e.to_string())
    }
}
