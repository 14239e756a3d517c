//! Functional RGB notation: `rgb(R, G, B)`.
//!
//! Exactly three comma-separated decimal integers, each 1 to 3 digits and
//! at most 255. The `rgb` keyword is lowercase only; percentages, alpha and
//! signs are not part of the grammar.

use std::sync::LazyLock;

use colorcode_core::{Error, Result, Rgb};
use regex::Regex;

use super::strip_whitespace;

static RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(([0-9]{1,3}),([0-9]{1,3}),([0-9]{1,3})\)$").expect("valid rgb grammar")
});

/// Tokenizes whitespace-free text into channels, or `None` if it isn't `rgb(...)`.
///
/// Out-of-range values fail the `u8` parse.
pub(crate) fn components(code: &str) -> Option<Rgb> {
    let caps = RGB.captures(code)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u8>().ok();
    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Returns `true` if `code` is an `rgb(...)` color code with channels in [0, 255].
///
/// ```
/// use colorcode::notation::rgb;
///
/// assert!(rgb::accepts("rgb( 255,255 , 255)"));
/// assert!(!rgb::accepts("rgb(256, 0, 0)"));
/// ```
pub fn accepts(code: &str) -> bool {
    components(&strip_whitespace(code)).is_some()
}

/// Decodes an `rgb(...)` color code.
///
/// # Errors
///
/// [`Error::Malformed`] if [`accepts`] would reject `code`.
pub fn decode(code: &str) -> Result<Rgb> {
    components(&strip_whitespace(code)).ok_or_else(|| Error::malformed("rgb", code))
}
