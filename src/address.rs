// src/address.rs
//! Ethereum address validation with EIP-55 checksums.

use alloy_primitives::Address;
use std::str::FromStr;

/// Parse an address with or without `0x`.
///
/// All-lowercase and all-uppercase inputs are accepted as-is; mixed case must
/// match the EIP-55 checksum exactly.
pub fn parse_address(value: &str) -> Option<Address> {
    let trimmed = value.trim();
    let address = Address::from_str(trimmed).ok()?;

    let body = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(format!("0x{}", body), None).ok();
    }

    Some(address)
}

/// Returns the checksummed form of `value`, or `None` when it is not an address.
pub fn to_checksum_address(value: &str) -> Option<String> {
    parse_address(value).map(|address| address.to_checksum(None))
}

pub fn is_address(value: &str) -> bool {
    parse_address(value).is_some()
}

/// Lowercased `0x`-prefixed form used as a lookup key.
pub fn normalize_address(value: &str) -> Option<String> {
    to_checksum_address(value).map(|a| a.to_ascii_lowercase())
}

/// `0x1234…abcd` style label for headers.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_vectors() {
        for addr in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            assert!(is_address(addr), "{addr} should be valid");
            assert_eq!(to_checksum_address(&addr.to_lowercase()).as_deref(), Some(addr));
        }
    }

    #[test]
    fn test_bad_checksum_rejected() {
        // last character case flipped
        assert!(!is_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAeD"));
    }

    #[test]
    fn test_single_case_and_prefixless() {
        assert!(is_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(is_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED"));
        assert!(is_address("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
    }

    #[test]
    fn test_malformed() {
        assert!(!is_address(""));
        assert!(!is_address("0x"));
        assert!(!is_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1bea"));
        assert!(!is_address("0xzzaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert!(!is_address("not an address"));
    }

    #[test]
    fn test_normalize_and_shorten() {
        let addr = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert_eq!(
            normalize_address(addr).as_deref(),
            Some("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed")
        );
        assert_eq!(shorten_address(addr), "0x5aAe…eAed");
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_shorten_non_ascii_account() {
        // wallets can hand back anything from eth_accounts
        assert_eq!(shorten_address("0xé1234567890ab€cdef"), "0xé123…cdef");
        assert_eq!(shorten_address("ééééééééééééé"), "éééééé…éééé");
    }

    #[test]
    fn test_parse_address_bytes() {
        let parsed = parse_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
        assert_eq!(parsed.as_slice()[0], 0x5a);
        assert_eq!(parsed.as_slice()[19], 0xed);
    }
}
