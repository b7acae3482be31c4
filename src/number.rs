//! Number formatting and lenient parsing
//!
//! Difficulty values travel through the converter as plain `f64`s and are
//! displayed to people, so two small pieces of plumbing matter a lot:
//!
//! - [`format_number`] strips floating-point noise (`7.000000000000001`)
//!   by rounding to 10 decimal places before printing the shortest form.
//! - [`parse_float`] reads the longest numeric prefix of a string, the way
//!   the leaderboard page always has (`"12abc"` is 12, `"abc"` is NaN).
//!
//! Rounding here is half-up (toward positive infinity), not Rust's
//! half-away-from-zero, so that `-1.5` rounds to `-1`.

use regex::Regex;
use std::sync::OnceLock;

/// Decimal places kept by [`format_number`]
const DISPLAY_PRECISION: usize = 10;

/// Only multiples of 2^-11 can land exactly halfway at the 10th place
const TIE_GRID: f64 = 2048.0;

fn float_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
            .expect("float prefix pattern is valid")
    })
}

/// Round to [`DISPLAY_PRECISION`] places, exact ties away from zero.
///
/// `{:.10}` breaks exact ties toward even digits, so those get bumped.
fn to_fixed(value: f64) -> f64 {
    let fixed: f64 = format!("{:.*}", DISPLAY_PRECISION, value)
        .parse()
        .unwrap_or(value);
    if (value * TIE_GRID).fract() != 0.0 || fixed.abs() >= value.abs() {
        return fixed;
    }

    let wider = format!("{:.*}", DISPLAY_PRECISION + 1, value);
    if !wider.ends_with('5') {
        return fixed;
    }

    let step = 10f64.powi(-(DISPLAY_PRECISION as i32)).copysign(value);
    format!("{:.*}", DISPLAY_PRECISION, fixed + step)
        .parse()
        .unwrap_or(value)
}

/// Format a difficulty value for display.
///
/// Rounds to 10 decimal places, then prints the shortest representation
/// (no trailing zeros, no dangling decimal point).
///
/// ```
/// use diffscale::format_number;
///
/// assert_eq!(format_number(7.00000000001), "7");
/// assert_eq!(format_number(2.50), "2.5");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let trimmed = to_fixed(value);

    // -0.0000000000001 collapses to negative zero
    if trimmed == 0.0 {
        return "0".to_string();
    }
    trimmed.to_string()
}

/// Parse the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped. Returns NaN when no number is present.
pub fn parse_float(text: &str) -> f64 {
    let text = text.trim_start();
    let Some(m) = float_prefix().find(text) else {
        return f64::NAN;
    };

    let literal = m.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `places` decimal places, ties toward positive infinity.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    round_half_up(value * factor) / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // FORMATTING TESTS
    // ==========================================================================

    #[test]
    fn test_format_strips_noise() {
        assert_eq!(format_number(7.00000000001), "7");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(7.000000000000001), "7");
    }

    #[test]
    fn test_format_keeps_meaningful_digits() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(13.75), "13.75");
        assert_eq!(format_number(0.1234567891), "0.1234567891");
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_format_exact_ties_round_away_from_zero() {
        // 2^-11 sits exactly halfway between two 10-place values
        assert_eq!(format_number(0.00048828125), "0.0004882813");
        assert_eq!(format_number(-0.00048828125), "-0.0004882813");
        assert_eq!(format_number(3.00048828125), "3.0004882813");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.00000000001), "0");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    // ==========================================================================
    // LENIENT PARSING TESTS
    // ==========================================================================
    //
    // Mirrors how people type into the converter box: trailing junk is
    // ignored, a missing number is NaN rather than an error.
    // ==========================================================================

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_float("12"), 12.0);
        assert_eq!(parse_float("  3.25"), 3.25);
        assert_eq!(parse_float("-4"), -4.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("1e2"), 100.0);
    }

    #[test]
    fn test_parse_prefix_only() {
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("2.5 stars"), 2.5);
        assert_eq!(parse_float("7."), 7.0);
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float("Grandmaster XIV").is_nan());
    }

    #[test]
    fn test_parse_ascii_digits_only() {
        assert_eq!(parse_float("5\u{663}"), 5.0);
        assert!(parse_float("\u{663}").is_nan());
    }

    #[test]
    fn test_parse_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    // ==========================================================================
    // ROUNDING TESTS
    // ==========================================================================

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
    }

    #[test]
    fn test_round_to_two_places() {
        assert!((round_to(9.98765, 2) - 9.99).abs() < 1e-12);
        assert!((round_to(3.3333, 2) - 3.33).abs() < 1e-12);
        assert!(round_to(f64::NAN, 2).is_nan());
    }
}
