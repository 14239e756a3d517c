//! Literal conversion fixtures across all three notations.
//!
//! Every row must convert exactly, in every direction, including HSL input
//! despite the flooring in HSL decoding.

use colorcode::{Color, Notation};

/// (hex, rgb, hsl)
type Row = (&'static str, &'static str, &'static str);

const FIXTURES: &[Row] = &[
    ("#ffffff", "rgb(255, 255, 255)", "hsl(0, 0%, 100%)"),
    ("#7a8f0e", "rgb(122, 143, 14)", "hsl(70, 82%, 31%)"),
    ("#0e8f4f", "rgb(14, 143, 79)", "hsl(150, 82%, 31%)"),
    ("#640e8f", "rgb(100, 14, 143)", "hsl(280, 82%, 31%)"),
    ("#8f0e2e", "rgb(143, 14, 46)", "hsl(345, 82%, 31%)"),
    ("#000000", "rgb(0, 0, 0)", "hsl(0, 0%, 0%)"),
    ("#222222", "rgb(34, 34, 34)", "hsl(0, 0%, 13.5%)"),
    ("#0e738f", "rgb(14, 115, 143)", "hsl(193, 82%, 31%)"),
    ("#918a63", "rgb(145, 138, 99)", "hsl(51, 19%, 48%)"),
];

fn check_from(input: impl Fn(&Row) -> &'static str) {
    for row in FIXTURES {
        let (hex, rgb, hsl) = *row;
        let code = input(row);
        let color = Color::new(code).unwrap_or_else(|e| panic!("{code}: {e}"));
        assert_eq!(color.hex(), hex, "hex of {code}");
        assert_eq!(color.rgb(), rgb, "rgb of {code}");
        assert_eq!(color.hsl(), hsl, "hsl of {code}");
    }
}

#[test]
fn test_from_hex() {
    check_from(|row| row.0);
}

#[test]
fn test_from_rgb() {
    check_from(|row| row.1);
}

#[test]
fn test_from_hsl() {
    check_from(|row| row.2);
}

#[test]
fn test_detected_notation() {
    for &(hex, rgb, hsl) in FIXTURES {
        assert_eq!(Notation::detect(hex), Some(Notation::Hex));
        assert_eq!(Notation::detect(rgb), Some(Notation::Rgb));
        assert_eq!(Notation::detect(hsl), Some(Notation::Hsl));
    }
}

#[test]
fn test_short_hex() {
    let green = Color::new("#0f0").unwrap();
    assert_eq!(green.rgb(), "rgb(0, 255, 0)");
    assert_eq!(green.hex(), "#00ff00");

    let white = Color::new("#fff").unwrap();
    assert_eq!(white.rgb(), "rgb(255, 255, 255)");
    assert_eq!(white.hex(), "#ffffff");

    let gray = Color::new("#222").unwrap();
    assert_eq!(gray.rgb(), "rgb(34, 34, 34)");
    assert_eq!(gray.hex(), "#222222");
}

#[test]
fn test_cyan() {
    for code in ["#0e7490", "rgb(14, 116, 144)"] {
        let cyan = Color::new(code).unwrap();
        assert_eq!(cyan.rgb(), "rgb(14, 116, 144)");
        assert_eq!(cyan.hex(), "#0e7490");
    }
}

#[test]
fn test_mid_gray_hsl() {
    let color = Color::new("hsl(0, 0%, 50%)").unwrap();
    assert_eq!(color.rgb(), "rgb(127, 127, 127)");
    assert_eq!(color.hex(), "#7f7f7f");
}
