//! # colorcode
//!
//! Parse textual color codes and render them in any supported notation.
//!
//! Three notations are understood:
//!
//! | Notation | Example | Notes |
//! |----------|---------|-------|
//! | Hex | `#7a8f0e`, `#0f0` | 3 or 6 digits, case-insensitive |
//! | RGB | `rgb(122, 143, 14)` | integers in [0, 255] |
//! | HSL | `hsl(70, 82%, 31%)` | hue in [0, 360), percentages in [0, 100] |
//!
//! Whitespace anywhere in the input is ignored.
//!
//! # Quick Start
//!
//! ```rust
//! use colorcode::Color;
//!
//! let color = Color::new("hsl(51, 19%, 48%)")?;
//! assert_eq!(color.hex(), "#918a63");
//! assert_eq!(color.rgb(), "rgb(145, 138, 99)");
//!
//! let gray: Color = "#222".parse()?;
//! assert_eq!(gray.hsl(), "hsl(0, 0%, 13.5%)");
//! # Ok::<(), colorcode::Error>(())
//! ```
//!
//! # Pipeline
//!
//! ```text
//! text -> notation::parse -> (hex | rgb | hsl tokenizer) -> Rgb -> Color
//!                                                                  |
//!                                          hex() / rgb() / hsl() <-+
//! ```
//!
//! Everything is pure: parsing and rendering allocate only their output and
//! can run from any number of threads.
//!
//! # Logging
//!
//! Dispatch emits `tracing` events at `trace` (each probe) and `debug`
//! (outcome) level. Install a subscriber to see them.
//!
//! # Feature Flags
//!
//! - `serde` - `Color` (de)serializes as a color code string

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
pub mod notation;

pub use color::Color;
pub use colorcode_core::{Error, Hsl, Result, Rgb, convert};
pub use notation::Notation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::notation::Notation;
    pub use colorcode_core::{Error, Hsl, Result, Rgb};
}
