//! Quantity and Amount Parsing
//!
//! Inputs come from text fields and server-rendered cells, so parsing is
//! lenient: a numeric prefix is accepted and trailing text ignored.

use crate::error::{CartError, CartResult};

/// Positive number of items
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quantity(u32);

impl Quantity {
    pub const ONE: Quantity = Quantity(1);

    /// Parse user input, rejecting non-numeric and non-positive values
    pub fn parse(raw: &str) -> CartResult<Self> {
        parse_int_prefix(raw)
            .and_then(Quantity::from_count)
            .ok_or_else(|| CartError::invalid_quantity(raw))
    }

    /// None for counts of zero or less; larger counts saturate at `u32::MAX`
    pub fn from_count(n: i64) -> Option<Self> {
        (n > 0).then(|| Quantity(n.min(u32::MAX as i64) as u32))
    }

    pub fn new(n: u32) -> Option<Self> {
        (n > 0).then_some(Quantity(n))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Leading integer of `raw`: optional whitespace, optional sign, digits.
/// `"12abc"` gives 12, `"abc"` and `""` give None.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value = digits[..end]
        .bytes()
        .fold(0i64, |acc, b| acc.saturating_mul(10).saturating_add((b - b'0') as i64));
    Some(if negative { -value } else { value })
}

/// Leading decimal amount of `raw`, skipping a currency label such as `RM `.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit() || c == '.' || c == '-' || c == '+')?;
    let s = &raw[start..];
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            has_digits = true;
            end = frac_end;
        } else if has_digits {
            end = frac_start;
        }
    }
    if !has_digits {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

/// Value of a catalog stepper after an edit; never below 1
pub fn clamp_stepper(value: i64) -> u32 {
    value.clamp(1, u32::MAX as i64) as u32
}
