//! # colorcode-core
//!
//! Core types for textual color codes.
//!
//! This crate provides the canonical representation that every color code
//! notation decodes into, plus the math shared by the encoders:
//!
//! - [`Rgb`] - The RGB triple, three 8-bit components
//! - [`Hsl`] - Hue/saturation/lightness components as rendered in `hsl(...)`
//! - [`convert`] - HSL to RGB and RGB to HSL conversion, hex byte encoding
//! - [`Error`] - Dispatch and decoding errors
//!
//! ## Crate Structure
//!
//! ```text
//! colorcode-core (this crate)
//!    ^
//!    |
//!    +-- colorcode (grammars, dispatcher, Color value)
//!    +-- colorcode-bench
//! ```
//!
//! Grammar knowledge lives in `colorcode`; this crate never looks at text
//! other than to format it.
//!
//! ## Feature Flags
//!
//! - `serde` - Derive serialization for [`Rgb`] and [`Hsl`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod error;
pub mod rgb;

pub use error::*;
pub use rgb::{Hsl, Rgb};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use colorcode_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::convert::{hsl_to_rgb, rgb_to_hsl};
    pub use crate::error::{Error, Result};
    pub use crate::rgb::{Hsl, Rgb};
}
