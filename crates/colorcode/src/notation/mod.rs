//! Notation grammars and the dispatcher that picks one for arbitrary text.
//!
//! Each notation module exposes the same trio:
//!
//! - `accepts(&str) -> bool` - total predicate, never fails
//! - `decode(&str) -> Result<Rgb>` - only meaningful for accepted text
//! - a crate-private `components` tokenizer both of the above call
//!
//! Sharing the tokenizer means a validator and its decoder can't disagree
//! about where a component starts or ends.
//!
//! # Whitespace
//!
//! All whitespace is removed before matching, so `rgb( 1, 2 ,3 )` and
//! `rgb(1,2,3)` are the same code.
//!
//! # Dispatch
//!
//! [`parse`] tries [`Notation::ALL`] in order and decodes with the first
//! notation that accepts. The grammars are mutually exclusive, so the order
//! only fixes which probe runs first.

pub mod hex;
pub mod hsl;
pub mod rgb;

use std::borrow::Cow;
use std::fmt;

use colorcode_core::{Error, Result, Rgb};
use tracing::{debug, trace};

/// A supported textual color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `#rgb` or `#rrggbb`
    Hex,
    /// `rgb(R, G, B)`
    Rgb,
    /// `hsl(H, S%, L%)`
    Hsl,
}

impl Notation {
    /// All notations in dispatch order.
    pub const ALL: [Notation; 3] = [Notation::Hex, Notation::Rgb, Notation::Hsl];

    /// Lowercase name of the notation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }

    /// Returns `true` if this notation's grammar accepts `code`.
    pub fn accepts(self, code: &str) -> bool {
        match self {
            Self::Hex => hex::accepts(code),
            Self::Rgb => rgb::accepts(code),
            Self::Hsl => hsl::accepts(code),
        }
    }

    /// Decodes `code` with this notation's decoder.
    ///
    /// # Errors
    ///
    /// [`Error::Malformed`] if this notation doesn't accept `code`.
    pub fn decode(self, code: &str) -> Result<Rgb> {
        match self {
            Self::Hex => hex::decode(code),
            Self::Rgb => rgb::decode(code),
            Self::Hsl => hsl::decode(code),
        }
    }

    /// Finds the notation `code` is written in.
    ///
    /// ```
    /// use colorcode::Notation;
    ///
    /// assert_eq!(Notation::detect("#0f0"), Some(Notation::Hex));
    /// assert_eq!(Notation::detect("hsl(0, 0%, 50%)"), Some(Notation::Hsl));
    /// assert_eq!(Notation::detect("red"), None);
    /// ```
    pub fn detect(code: &str) -> Option<Notation> {
        let normalized = strip_whitespace(code);
        Self::ALL
            .into_iter()
            .find(|n| n.components(&normalized).is_some())
    }

    /// Tokenizes already-normalized text.
    fn components(self, normalized: &str) -> Option<Rgb> {
        match self {
            Self::Hex => hex::components(normalized),
            Self::Rgb => rgb::components(normalized),
            Self::Hsl => hsl::components(normalized),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes `code` in whichever notation accepts it.
///
/// Returns the notation alongside the channels.
///
/// # Errors
///
/// [`Error::UnrecognizedColorCode`] carrying `code` verbatim if no notation
/// accepts it.
///
/// # Example
///
/// ```
/// use colorcode::notation::{parse, Notation};
/// use colorcode::Rgb;
///
/// let (notation, rgb) = parse("rgb(14, 116, 144)").unwrap();
/// assert_eq!(notation, Notation::Rgb);
/// assert_eq!(rgb, Rgb::new(14, 116, 144));
///
/// assert!(parse("#ggg").unwrap_err().is_unrecognized());
/// ```
pub fn parse(code: &str) -> Result<(Notation, Rgb)> {
    let normalized = strip_whitespace(code);

    for notation in Notation::ALL {
        trace!(%notation, code, "probing notation");
        if let Some(rgb) = notation.components(&normalized) {
            debug!(%notation, code, r = rgb.r, g = rgb.g, b = rgb.b, "decoded color code");
            return Ok((notation, rgb));
        }
    }

    debug!(code, "unrecognized color code");
    Err(Error::unrecognized(code))
}

/// Removes every whitespace character, borrowing when there is none.
pub(crate) fn strip_whitespace(code: &str) -> Cow<'_, str> {
    if code.chars().any(char::is_whitespace) {
        Cow::Owned(code.chars().filter(|c| !c.is_whitespace()).collect())
    } else {
        Cow::Borrowed(code)
    }
}
