//! Calldata for the distributor calls the app makes

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::{sol, SolCall};

sol! {
    function isClaimed(uint256 index) external view returns (bool);
    function claim(uint256 index, address account, uint256 amount, bytes32[] merkleProof, uint256 tipPercent) external;
}

/// `isClaimed(index)` calldata as a 0x hex string
pub fn encode_is_claimed(index: u64) -> String {
    let call = isClaimedCall {
        index: U256::from(index),
    };
    format!("0x{}", hex::encode(call.abi_encode()))
}

/// `claim(index, account, amount, proof, tipPercent)` calldata as a 0x hex string
pub fn encode_claim(
    index: u64,
    account: &str,
    amount: U256,
    proof: &[String],
    tip_percent: u8,
) -> Result<String, String> {
    let account: Address = account
        .parse()
        .map_err(|e| format!("Invalid address {}: {}", account, e))?;
    let merkle_proof = proof
        .iter()
        .map(|node| {
            node.parse::<B256>()
                .map_err(|e| format!("Proof node must be 32 bytes: {} ({})", node, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let call = claimCall {
        index: U256::from(index),
        account,
        amount,
        merkleProof: merkle_proof,
        tipPercent: U256::from(tip_percent),
    };
    Ok(format!("0x{}", hex::encode(call.abi_encode())))
}

/// Decode the `isClaimed` return data
pub fn decode_bool(result: &str) -> Result<bool, String> {
    let body = result.strip_prefix("0x").unwrap_or(result);
    let bytes = hex::decode(body).map_err(|e| format!("Invalid return data {}: {}", result, e))?;
    isClaimedCall::abi_decode_returns(&bytes, true)
        .map(|ret| ret._0)
        .map_err(|e| format!("Invalid isClaimed return {}: {}", result, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::keccak256;

    #[test]
    fn test_selectors_match_signatures() {
        assert_eq!(claimCall::SIGNATURE, "claim(uint256,address,uint256,bytes32[],uint256)");
        assert_eq!(isClaimedCall::SIGNATURE, "isClaimed(uint256)");
        assert_eq!(isClaimedCall::SELECTOR, keccak256("isClaimed(uint256)")[..4]);
    }

    #[test]
    fn test_encode_is_claimed() {
        let data = encode_is_claimed(7);
        // 0x + selector + one word
        assert_eq!(data.len(), 2 + 8 + 64);
        assert!(data.ends_with("07"));
        assert!(data.starts_with(&format!("0x{}", hex::encode(isClaimedCall::SELECTOR))));
    }

    #[test]
    fn test_encode_claim_layout() {
        let proof = vec![format!("0x{}", "11".repeat(32)), format!("0x{}", "22".repeat(32))];
        let data = encode_claim(
            3,
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            U256::from(1_000u64),
            &proof,
            10,
        )
        .unwrap();
        let bytes = hex::decode(&data[2..]).unwrap();
        assert_eq!(bytes.len(), 4 + 32 * 8);
        assert_eq!(&bytes[..4], &claimCall::SELECTOR[..]);

        let word = |i: usize| &bytes[4 + 32 * i..4 + 32 * (i + 1)];
        assert_eq!(word(0)[31], 3);
        assert_eq!(&word(1)[12..], &hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap()[..]);
        assert_eq!(U256::from_be_slice(word(2)), U256::from(1_000u64));
        // proof offset sits just past the five head words
        assert_eq!(word(3)[31], 160);
        assert_eq!(word(4)[31], 10);
        assert_eq!(word(5)[31], 2);
        assert_eq!(word(6), &[0x11u8; 32][..]);
        assert_eq!(word(7), &[0x22u8; 32][..]);
    }

    #[test]
    fn test_encode_claim_full_width_amount() {
        let data = encode_claim(0, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", U256::MAX, &[], 0).unwrap();
        let bytes = hex::decode(&data[2..]).unwrap();
        assert_eq!(&bytes[4 + 64..4 + 96], &[0xffu8; 32][..]);
    }

    #[test]
    fn test_encode_claim_rejects_bad_input() {
        let proof = vec!["0x1234".to_string()];
        let result = encode_claim(0, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", U256::from(1u64), &proof, 0);
        assert!(result.unwrap_err().contains("32 bytes"));

        let result = encode_claim(0, "0x1234", U256::from(1u64), &[], 0);
        assert!(result.unwrap_err().contains("Invalid address"));
    }

    #[test]
    fn test_decode_bool() {
        assert!(decode_bool(&format!("0x{}01", "00".repeat(31))).unwrap());
        assert!(!decode_bool(&format!("0x{}", "00".repeat(32))).unwrap());
        assert!(decode_bool("0x01").is_err());
    }
}
