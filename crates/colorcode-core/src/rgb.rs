//! Canonical color components.
//!
//! - [`Rgb`] - the one representation every notation decodes into
//! - [`Hsl`] - hue/saturation/lightness as written in `hsl(...)` codes
//!
//! # Invariants
//!
//! [`Rgb`] stores `u8` channels, so the [0, 255] range can't be violated
//! once a value exists. [`Hsl`] is a plain carrier; range checks belong to
//! the grammar that produced it.

use std::fmt;

/// An RGB triple with 8-bit channels.
///
/// # Example
///
/// ```
/// use colorcode_core::Rgb;
///
/// let teal = Rgb::new(14, 116, 144);
/// assert_eq!(teal.to_array(), [14, 116, 144]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new triple.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a triple with all channels equal.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled into [0, 1].
    #[inline]
    pub fn normalized(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }

    /// Returns `true` if all channels are equal.
    #[inline]
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue, saturation and lightness.
///
/// Hue is in whole degrees, saturation and lightness are percentages in
/// [0, 100]. Percentages may carry a fractional part; the RGB to HSL
/// encoder produces multiples of 0.5.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub hue: u16,
    /// Saturation percentage.
    pub saturation: f64,
    /// Lightness percentage.
    pub lightness: f64,
}

impl Hsl {
    /// Create new HSL components.
    #[inline]
    pub const fn new(hue: u16, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Rgb::gray(34), Rgb::new(34, 34, 34));
        assert_eq!(Rgb::from([1, 2, 3]), Rgb::new(1, 2, 3));
        assert_eq!(Rgb::from((1, 2, 3)), Rgb::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(Rgb::new(4, 5, 6)), [4, 5, 6]);
        assert_eq!(Rgb::default(), Rgb::BLACK);
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Rgb::WHITE.normalized(), [1.0, 1.0, 1.0]);
        assert_eq!(Rgb::BLACK.normalized(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_is_gray() {
        assert!(Rgb::gray(7).is_gray());
        assert!(!Rgb::new(7, 7, 8).is_gray());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb::new(145, 138, 99).to_string(), "(145, 138, 99)");
    }
}
