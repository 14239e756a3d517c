//! Color-space conversions between [`Rgb`] and [`Hsl`].
//!
//! Both directions are lossy in a specific, fixed way:
//!
//! - HSL to RGB floors each channel after scaling to [0, 255].
//! - RGB to HSL rounds hue to the nearest degree and saturation/lightness
//!   to the nearest half percent.
//!
//! The exact operation order matters for the rendered fixtures, so the
//! formulas below are evaluated term by term as written.
//!
//! # Reference
//!
//! <https://www.rapidtables.com/convert/color/hsl-to-rgb.html>
//! <https://www.rapidtables.com/convert/color/rgb-to-hsl.html>

use crate::rgb::{Hsl, Rgb};

/// Converts HSL components to an RGB triple.
///
/// # Formula
///
/// ```text
/// C = (1 - |2L - 1|) * S
/// X = C * (1 - |(H / 60) mod 2 - 1|)
/// m = L - C / 2
///
/// [0, 60)    -> (C, X, 0)     [180, 240) -> (0, X, C)
/// [60, 120)  -> (X, C, 0)     [240, 300) -> (X, 0, C)
/// [120, 180) -> (0, C, X)     [300, 360) -> (C, 0, X)
///
/// channel = floor((channel' + m) * 255)
/// ```
///
/// # Example
///
/// ```rust
/// use colorcode_core::{Hsl, Rgb};
/// use colorcode_core::convert::hsl_to_rgb;
///
/// assert_eq!(hsl_to_rgb(Hsl::new(70, 82.0, 31.0)), Rgb::new(122, 143, 14));
/// ```
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = f64::from(hsl.hue);
    let s = hsl.saturation / 100.0;
    let l = hsl.lightness / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - (((h / 60.0) % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

/// Converts an RGB triple to HSL components.
///
/// # Formula
///
/// ```text
/// max = max(r, g, b), min = min(r, g, b), delta = max - min
/// L = (max + min) / 2
/// delta == 0: H = 0, S = 0
/// otherwise:
///   S = delta / (1 - |2L - 1|)
///   max == r: H = 60 * ((g - b) / delta), +360 if negative
///   max == g: H = 60 * ((b - r) / delta + 2)
///   max == b: H = 60 * ((r - g) / delta + 4)
/// ```
///
/// Hue is rounded to whole degrees and a hue that rounds to 360 wraps to 0,
/// so the rendered `hsl(...)` stays inside the [0, 360) hue grammar and can
/// be parsed back.
/// Saturation and lightness are returned as percentages rounded to the
/// nearest 0.5.
///
/// # Example
///
/// ```rust
/// use colorcode_core::{Hsl, Rgb};
/// use colorcode_core::convert::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl(Rgb::gray(34)), Hsl::new(0, 0.0, 13.5));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.normalized();

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if rgb.is_gray() {
        return Hsl::new(0, 0.0, half_percent(l));
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());

    let h = if max == r {
        let h = 60.0 * ((g - b) / delta);
        if h < 0.0 { h + 360.0 } else { h }
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let hue = (h.round() as u16) % 360;

    Hsl::new(hue, half_percent(s), half_percent(l))
}

/// Formats a channel as two lowercase hex digits.
///
/// ```rust
/// use colorcode_core::convert::hex_byte;
///
/// assert_eq!(hex_byte(14), "0e");
/// assert_eq!(hex_byte(255), "ff");
/// ```
#[inline]
pub fn hex_byte(v: u8) -> String {
    format!("{v:02x}")
}

/// Scales a [0, 1] fraction to a channel, flooring.
#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Fraction to percentage, rounded to the nearest half unit.
#[inline]
fn half_percent(v: f64) -> f64 {
    (v * 100.0 * 2.0).round() / 2.0
}
