// src/amount.rs
use alloy_primitives::U256;

/// Largest decimals value whose scale factor still fits in a uint256.
pub const MAX_DECIMALS: u8 = 77;

fn ten_pow(exp: u8) -> U256 {
    U256::from(10u64).pow(U256::from(exp))
}

/// Raw on-chain token quantity together with its decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAmount {
    pub raw: U256,
    pub decimals: u8,
}

impl TokenAmount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self {
            raw,
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    pub fn zero(decimals: u8) -> Self {
        Self::new(U256::ZERO, decimals)
    }

    /// Whole-token quantity scaled up by `decimals`.
    pub fn from_whole(whole: u64, decimals: u8) -> Option<Self> {
        let decimals = decimals.min(MAX_DECIMALS);
        U256::from(whole)
            .checked_mul(ten_pow(decimals))
            .map(|raw| Self { raw, decimals })
    }

    /// Parse a `0x` prefixed hex quantity as found in claims files and RPC results.
    pub fn from_hex(value: &str, decimals: u8) -> Result<Self, String> {
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .ok_or_else(|| format!("Missing 0x prefix: {}", value))?;
        if digits.is_empty() {
            return Ok(Self::zero(decimals));
        }
        let raw = U256::from_str_radix(digits, 16)
            .map_err(|e| format!("Invalid hex amount {}: {}", value, e))?;
        Ok(Self::new(raw, decimals))
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Render with a fixed number of decimal places, rounding half up.
    ///
    /// `places` is capped at `decimals`. When `group_separator` is set the
    /// integer part is grouped in threes.
    pub fn to_fixed(&self, places: u8, group_separator: Option<char>) -> String {
        let places = places.min(self.decimals);
        let dropped = self.decimals - places;

        let divisor = ten_pow(dropped);
        let mut scaled = self.raw / divisor;
        let remainder = self.raw % divisor;
        if dropped > 0 && remainder >= divisor - remainder {
            scaled += U256::from(1u64);
        }

        let unit = ten_pow(places);
        let whole = (scaled / unit).to_string();
        let whole = match group_separator {
            Some(sep) => group_digits(&whole, sep),
            None => whole,
        };

        if places == 0 {
            whole
        } else {
            let fraction = (scaled % unit).to_string();
            format!("{}.{:0>width$}", whole, fraction, width = places as usize)
        }
    }

    /// True when the zero-decimal rendering is `"0"`, which is how the modal
    /// decides there is nothing left to claim.
    pub fn displays_as_zero(&self) -> bool {
        self.to_fixed(0, None) == "0"
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
