//! The [`Color`] value and its render operations.

use std::fmt;
use std::str::FromStr;

use colorcode_core::convert::{hex_byte, rgb_to_hsl};
use colorcode_core::{Error, Hsl, Result, Rgb};

use crate::notation::{self, Notation};

/// A decoded color.
///
/// Holds only the RGB triple. It doesn't remember which notation it was
/// parsed from, so every render is computed from the channels alone and
/// always returns the same text for the same color.
///
/// # Example
///
/// ```
/// use colorcode::Color;
///
/// let color = Color::new("#7a8f0e").unwrap();
/// assert_eq!(color.rgb(), "rgb(122, 143, 14)");
/// assert_eq!(color.hsl(), "hsl(70, 82%, 31%)");
/// assert_eq!(color.hex(), "#7a8f0e");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: Rgb,
}

impl Color {
    /// Parses a color code in any supported notation.
    ///
    /// Whitespace anywhere in `code` is ignored.
    ///
    /// # Errors
    ///
    /// [`Error::UnrecognizedColorCode`] if `code` is not valid hex, `rgb(...)`
    /// or `hsl(...)`.
    pub fn new(code: &str) -> Result<Self> {
        let (_, rgb) = notation::parse(code)?;
        Ok(Self { rgb })
    }

    /// Creates a color from channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: Rgb::new(r, g, b),
        }
    }

    /// Red channel.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.rgb.r
    }

    /// Green channel.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.rgb.g
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.rgb.b
    }

    /// The RGB triple.
    #[inline]
    pub const fn to_rgb(&self) -> Rgb {
        self.rgb
    }

    /// HSL components as rendered by [`hsl`](Self::hsl).
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb)
    }

    /// Renders as `#rrggbb`, lowercase, always 6 digits.
    pub fn hex(&self) -> String {
        format!(
            "#{}{}{}",
            hex_byte(self.rgb.r),
            hex_byte(self.rgb.g),
            hex_byte(self.rgb.b)
        )
    }

    /// Renders as `rgb(R, G, B)`.
    pub fn rgb(&self) -> String {
        format!("rgb({}, {}, {})", self.rgb.r, self.rgb.g, self.rgb.b)
    }

    /// Renders as `hsl(H, S%, L%)`.
    ///
    /// Hue is whole degrees; saturation and lightness are rounded to the
    /// nearest half percent and printed without a trailing `.0`.
    pub fn hsl(&self) -> String {
        let Hsl {
            hue,
            saturation,
            lightness,
        } = self.to_hsl();
        format!("hsl({hue}, {saturation}%, {lightness}%)")
    }

    /// Renders in the given notation.
    pub fn render(&self, notation: Notation) -> String {
        match notation {
            Notation::Hex => self.hex(),
            Notation::Rgb => self.rgb(),
            Notation::Hsl => self.hsl(),
        }
    }
}

impl From<Rgb> for Color {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self { rgb }
    }
}

impl From<Color> for Rgb {
    #[inline]
    fn from(color: Color) -> Self {
        color.rgb
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = Error;

    fn try_from(code: &str) -> Result<Self> {
        Self::new(code)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(&code).map_err(serde::de::Error::custom)
    }
}
