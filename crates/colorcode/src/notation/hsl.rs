//! Functional HSL notation: `hsl(H, S%, L%)`.
//!
//! - hue: a bare integer in [0, 360), no `%`
//! - saturation, lightness: a number followed by `%`, in [0, 100]
//!
//! Percentages may have a fractional part (`13.5%`, `.5%`, `5.%`); exponent
//! forms such as `1e2%` are not accepted. Decoding goes through
//! [`hsl_to_rgb`](colorcode_core::convert::hsl_to_rgb), which floors.

use std::sync::LazyLock;

use colorcode_core::convert::hsl_to_rgb;
use colorcode_core::{Error, Hsl, Result, Rgb};
use regex::Regex;

use super::strip_whitespace;

static HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(([0-9]+),([0-9]+\.?[0-9]*|\.[0-9]+)%,([0-9]+\.?[0-9]*|\.[0-9]+)%\)$")
        .expect("valid hsl grammar")
});

/// Tokenizes whitespace-free text into HSL components, or `None` if it isn't
/// a well-formed, in-range `hsl(...)`.
pub(crate) fn hsl_components(code: &str) -> Option<Hsl> {
    let caps = HSL.captures(code)?;

    let hue = caps.get(1)?.as_str().parse::<u16>().ok().filter(|&h| h < 360)?;
    let percent = |i: usize| {
        caps.get(i)?
            .as_str()
            .parse::<f64>()
            .ok()
            .filter(|p| (0.0..=100.0).contains(p))
    };

    Some(Hsl::new(hue, percent(2)?, percent(3)?))
}

/// Tokenizes whitespace-free text straight into channels.
pub(crate) fn components(code: &str) -> Option<Rgb> {
    hsl_components(code).map(hsl_to_rgb)
}

/// Returns `true` if `code` is an in-range `hsl(...)` color code.
///
/// ```
/// use colorcode::notation::hsl;
///
/// assert!(hsl::accepts("hsl(0, 0%, 50%)"));
/// assert!(!hsl::accepts("hsl(360, 0%, 50%)"));
/// ```
pub fn accepts(code: &str) -> bool {
    hsl_components(&strip_whitespace(code)).is_some()
}

/// Parses an `hsl(...)` color code into its components without converting.
///
/// # Errors
///
/// [`Error::Malformed`] if [`accepts`] would reject `code`.
pub fn parse_components(code: &str) -> Result<Hsl> {
    hsl_components(&strip_whitespace(code)).ok_or_else(|| Error::malformed("hsl", code))
}

/// Decodes an `hsl(...)` color code to RGB.
///
/// # Errors
///
/// [`Error::Malformed`] if [`accepts`] would reject `code`.
pub fn decode(code: &str) -> Result<Rgb> {
    parse_components(code).map(hsl_to_rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        assert!(accepts("hsl(0, 0%, 50%)"));
        assert!(accepts("hsl(0,0%,50%)"));
        assert!(accepts("hsl(359, 100%, 0%)"));
        assert!(accepts("hsl(0, 0%, 13.5%)"));
    }

    #[test]
    fn test_fraction_forms() {
        assert_eq!(parse_components("hsl(0, .5%, 5.%)").unwrap(), Hsl::new(0, 0.5, 5.0));
        assert_eq!(parse_components("hsl(0, 100.%, 0.25%)").unwrap(), Hsl::new(0, 100.0, 0.25));
        assert!(!accepts("hsl(0, .%, 50%)"));
        assert!(!accepts("hsl(0, 1.2.3%, 50%)"));
        assert!(!accepts("hsl(0, 1e2%, 50%)"));
        assert!(!accepts("hsl(0, 100.5%, 50%)"));
        assert!(!accepts("hsl(.5, 0%, 50%)"));
    }

    #[test]
    fn test_rejects_range() {
        assert!(!accepts("hsl(-1, 0%, 50%)"));
        assert!(!accepts("hsl(360, 0%, 50%)"));
        assert!(!accepts("hsl(0, -1%, 50%)"));
        assert!(!accepts("hsl(0, 101%, 50%)"));
        assert!(!accepts("hsl(0, 0%, -1%)"));
        assert!(!accepts("hsl(0, 0%, 101%)"));
        assert!(!accepts("hsl(0, 0%, 100.5%)"));
        assert!(!accepts("hsl(99999999999, 0%, 0%)"));
    }

    #[test]
    fn test_rejects_syntax() {
        for code in [
            "hsl 0, 5%, 10%",
            "hsl(0 0% 100%)",
            "hsl(0, 0%, 100%)aa",
            "hsl(0%, 0%, 100%)",
            "hsl(0, 0, 100%)",
            "hsl(0, 5%, 100)",
            "hsl(0, 5%, 1a0%)",
            "hsl(0, 5a%, 10%)",
            "hsl(abc, 5%, 10%)",
            "hsl()",
            "HSL(0, 0%, 0%)",
            "hsla(0, 0%, 0%)",
        ] {
            assert!(!accepts(code), "{code}");
        }
    }

    #[test]
    fn test_parse_components() {
        let hsl = parse_components("hsl(51, 19%, 48%)").unwrap();
        assert_eq!(hsl, Hsl::new(51, 19.0, 48.0));

        let hsl = parse_components("hsl(0, 0%, 13.5%)").unwrap();
        assert_eq!(hsl.lightness, 13.5);
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("hsl(70, 82%, 31%)").unwrap(), Rgb::new(122, 143, 14));
        assert_eq!(decode("hsl(0, 0%, 100%)").unwrap(), Rgb::WHITE);
        assert_eq!(decode("hsl(0, 0%, 50%)").unwrap(), Rgb::gray(127));
    }

    #[test]
    fn test_decode_misuse() {
        assert!(decode("#fff").unwrap_err().is_malformed());
    }
}
