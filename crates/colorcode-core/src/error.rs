//! Error types for color code handling.
//!
//! # Overview
//!
//! Two failure modes exist:
//! - [`Error::UnrecognizedColorCode`] - the input matched none of the
//!   supported notations. This is the only error a caller constructing a
//!   color from text should ever see.
//! - [`Error::Malformed`] - a notation decoder was handed text its own
//!   grammar rejects. The dispatcher only decodes accepted text, so this
//!   indicates a programming error in the caller of a decoder.
//!
//! # Usage
//!
//! ```rust
//! use colorcode_core::{Error, Result};
//!
//! fn require_hash(code: &str) -> Result<()> {
//!     if !code.starts_with('#') {
//!         return Err(Error::unrecognized(code));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_hash("red").unwrap_err().is_unrecognized());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning text into a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No supported notation accepts the input.
    ///
    /// Carries the offending input verbatim, before whitespace removal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorcode_core::Error;
    ///
    /// let err = Error::unrecognized("#ggg");
    /// assert_eq!(err.to_string(), "couldn't identify the color code type of '#ggg'");
    /// ```
    #[error("couldn't identify the color code type of '{code}'")]
    UnrecognizedColorCode {
        /// The rejected input
        code: String,
    },

    /// A decoder ran on text outside its notation's grammar.
    #[error("{notation} decoder received text outside its grammar: '{code}'")]
    Malformed {
        /// Name of the notation whose decoder was misused
        notation: &'static str,
        /// The text handed to the decoder
        code: String,
    },
}

impl Error {
    /// Creates an [`Error::UnrecognizedColorCode`] error.
    #[inline]
    pub fn unrecognized(code: impl Into<String>) -> Self {
        Self::UnrecognizedColorCode { code: code.into() }
    }

    /// Creates an [`Error::Malformed`] error.
    #[inline]
    pub fn malformed(notation: &'static str, code: impl Into<String>) -> Self {
        Self::Malformed {
            notation,
            code: code.into(),
        }
    }

    /// Returns the text that caused the error.
    pub fn code(&self) -> &str {
        match self {
            Self::UnrecognizedColorCode { code } | Self::Malformed { code, .. } => code,
        }
    }

    /// Returns `true` if no notation accepted the input.
    #[inline]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::UnrecognizedColorCode { .. })
    }

    /// Returns `true` if this is a decoder misuse.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}
