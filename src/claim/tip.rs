// src/claim/tip.rs

/// Developer tip chosen on the range slider.
///
/// `Empty` is kept distinct from zero so a cleared input renders as blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipPercentage {
    Empty,
    Percent(u8),
}

impl Default for TipPercentage {
    fn default() -> Self {
        TipPercentage::Percent(0)
    }
}

impl TipPercentage {
    /// Value handed to the claim submitter. An empty tip is sent as 0%.
    pub fn as_percent(&self) -> u8 {
        match self {
            TipPercentage::Empty => 0,
            TipPercentage::Percent(p) => *p,
        }
    }

    /// Text for the slider's `value` attribute and the percentage label
    pub fn input_value(&self) -> String {
        match self {
            TipPercentage::Empty => String::new(),
            TipPercentage::Percent(p) => p.to_string(),
        }
    }
}

/// Clamp raw slider text to a tip in [0, 100].
///
/// Numbers above 100 become 100 and negatives become 0. Fractions are
/// truncated, a trailing non-numeric suffix is ignored (`"12abc"` is 12) and
/// blank or unreadable input becomes `Empty`.
pub fn clamp_tip(raw: &str) -> TipPercentage {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return TipPercentage::Empty;
    }

    if let Ok(value) = trimmed.parse::<f64>() {
        if value.is_nan() {
            return TipPercentage::Empty;
        }
        return TipPercentage::Percent(value.trunc().clamp(0.0, 100.0) as u8);
    }

    match leading_integer(trimmed) {
        Some(value) => TipPercentage::Percent(value.clamp(0, 100) as u8),
        None => TipPercentage::Empty,
    }
}

/// Optional sign followed by base-10 digits, saturating on overflow.
fn leading_integer(s: &str) -> Option<i64> {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, d| {
        acc.saturating_mul(10).saturating_add((d - b'0') as i64)
    });
    Some(if negative { -magnitude } else { magnitude })
}
