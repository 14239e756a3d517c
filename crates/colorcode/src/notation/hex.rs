//! Hexadecimal notation: `#rgb` and `#rrggbb`.
//!
//! Digits are case-insensitive. In the 3-digit short form every digit is
//! doubled, so `#abc` is `#aabbcc`. Lengths other than 3 and 6 are rejected.

use std::sync::LazyLock;

use colorcode_core::{Error, Result, Rgb};
use regex::Regex;

use super::strip_whitespace;

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid hex grammar")
});

/// Tokenizes whitespace-free text into channels, or `None` if it isn't hex.
pub(crate) fn components(code: &str) -> Option<Rgb> {
    let digits = HEX.captures(code)?.get(1)?.as_str();

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|d| [d, d]).collect()
    } else {
        digits.to_owned()
    };

    let pair = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb::new(pair(0)?, pair(2)?, pair(4)?))
}

/// Returns `true` if `code` is a 3- or 6-digit hex color code.
///
/// ```
/// use colorcode::notation::hex;
///
/// assert!(hex::accepts("#0f0"));
/// assert!(hex::accepts("#7A8F0E"));
/// assert!(!hex::accepts("#f0f0f0f"));
/// ```
pub fn accepts(code: &str) -> bool {
    components(&strip_whitespace(code)).is_some()
}

/// Decodes a hex color code.
///
/// # Errors
///
/// [`Error::Malformed`] if [`accepts`] would reject `code`.
pub fn decode(code: &str) -> Result<Rgb> {
    components(&strip_whitespace(code)).ok_or_else(|| Error::malformed("hex", code))
}
