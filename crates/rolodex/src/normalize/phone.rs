//! Australian numbering plan, canonicalized to E.164.
//!
//! Accepted shapes:
//!
//! | Input              | Canonical            |
//! |--------------------|----------------------|
//! | `04XXXXXXXX`       | `+614XXXXXXXX`       |
//! | `614XXXXXXXX`      | `+614XXXXXXXX`       |
//! | `0[2378]XXXXXXXX`  | `+61[2378]XXXXXXXX`  |
//! | `61[2378]XXXXXXXX` | `+61[2378]XXXXXXXX`  |
//! | `13XXXX`           | `+6113XXXX`          |
//! | `1300XXXXXX`       | `+611300XXXXXX`      |
//! | `1800XXXXXX`       | `+611800XXXXXX`      |
//!
//! Values already in `+61` form are checked against the same plan and kept.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const INTERNATIONAL_MESSAGE: &str = "expected Australian number in international format";
pub(crate) const NATIONAL_MESSAGE: &str =
    "not a valid Australian number: mobile, landline with area code, or 13/1300/1800 service";

/// Canonical `+61` shapes.
static INTERNATIONAL: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\+614\d{8}$").unwrap(),              // Mobile
        Regex::new(r"^\+61[2378]\d{8}$").unwrap(),         // Landline
        Regex::new(r"^\+6113\d{4}$").unwrap(),             // 13 service
        Regex::new(r"^\+611(?:300|800)\d{6}$").unwrap(),   // 1300/1800 service
    ]
});

/// How a matched digit string becomes canonical.
#[derive(Debug, Clone, Copy)]
enum Rewrite {
    /// Replace the trunk `0` with `+61`.
    TrunkToCountry,
    /// Prefix `+61`.
    PrefixCountry,
    /// Prefix `+`.
    PrefixPlus,
}

impl Rewrite {
    fn apply(self, digits: &str) -> String {
        match self {
            Rewrite::TrunkToCountry => format!("+61{}", &digits[1..]),
            Rewrite::PrefixCountry => format!("+61{digits}"),
            Rewrite::PrefixPlus => format!("+{digits}"),
        }
    }
}

/// National shapes, tried in order.
static NATIONAL: Lazy<Vec<(Regex, Rewrite)>> = Lazy::new(|| {
    vec![
        // Mobile
        (Regex::new(r"^04\d{8}$").unwrap(), Rewrite::TrunkToCountry),
        (Regex::new(r"^614\d{8}$").unwrap(), Rewrite::PrefixPlus),
        // Landline
        (Regex::new(r"^0[2378]\d{8}$").unwrap(), Rewrite::TrunkToCountry),
        (Regex::new(r"^61[2378]\d{8}$").unwrap(), Rewrite::PrefixPlus),
        // Service numbers
        (Regex::new(r"^13\d{4}$").unwrap(), Rewrite::PrefixCountry),
        (Regex::new(r"^1(?:300|800)\d{6}$").unwrap(), Rewrite::PrefixCountry),
        (Regex::new(r"^6113\d{4}$").unwrap(), Rewrite::PrefixPlus),
        (Regex::new(r"^61(?:300|800)\d{6}$").unwrap(), Rewrite::PrefixPlus),
    ]
});

/// Canonicalize a non-blank phone value.
///
/// Returns the rule message on failure; the caller attaches the field name.
pub fn canonicalize(raw: &str) -> Result<String, &'static str> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if kept.starts_with('+') {
        return if INTERNATIONAL.iter().any(|re| re.is_match(&kept)) {
            Ok(kept)
        } else {
            Err(INTERNATIONAL_MESSAGE)
        };
    }

    let digits: String = kept.chars().filter(|c| c.is_ascii_digit()).collect();
    NATIONAL
        .iter()
        .find(|(re, _)| re.is_match(&digits))
        .map(|(_, rewrite)| rewrite.apply(&digits))
        .ok_or(NATIONAL_MESSAGE)
}
