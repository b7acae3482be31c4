//! Reading labels back into numbers
//!
//! The inverse of [`to_visual`](super::to_visual), plus the shorthands
//! people actually type. Anything that isn't a recognised label falls
//! back to lenient number parsing, so `"7.25"` works on every scale and
//! garbage comes out as NaN.

use super::glyph::{self, Glyph};
use super::roman::from_roman;
use super::{Tier, GRANDMASTER_II, GRASSY_TIERS, PUNTER_TIERS, SCHEEP_TIERS, TAS_BASE};
use crate::number::parse_float;
use crate::scale::Scale;
use regex::Regex;
use std::sync::OnceLock;

/// Fixed values for the three Grandmaster I sub-tiers
const GRANDMASTER_I_LOW: f64 = 7.5;
const GRANDMASTER_I_MEDIUM: f64 = 7.75;
const GRANDMASTER_I_HIGH: f64 = 8.0;

fn tas_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"TAS\+([0-9]+)").expect("TAS pattern is valid"))
}

fn grandmaster_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(low|medium|high)?\s*grandmaster\s+([ivxlcdm]+|[0-9]+)$")
            .expect("Grandmaster pattern is valid")
    })
}

/// Case-insensitive exact match against a tier table
fn lookup(tiers: &[Tier], text: &str) -> Option<f64> {
    let wanted = text.to_lowercase();
    tiers
        .iter()
        .find(|t| t.label.to_lowercase() == wanted)
        .map(|t| t.threshold)
}

fn punter_number(text: &str) -> f64 {
    if let Some(caps) = tas_pattern().captures(text) {
        return TAS_BASE + parse_float(&caps[1]);
    }
    lookup(PUNTER_TIERS, text).unwrap_or_else(|| parse_float(text))
}

fn michael_chan_number(text: &str) -> f64 {
    let text = glyph::normalize(text);

    if let Some(sum) = glyph::glyph_sum(&text) {
        return sum;
    }

    for g in Glyph::ALL {
        let symbol = g.symbol();
        if text.ends_with(symbol) {
            let stripped = text.replacen(symbol, "", 1);
            return parse_float(&stripped) * g.unit();
        }
    }

    parse_float(&text)
}

fn scheep_number(text: &str) -> f64 {
    lookup(SCHEEP_TIERS, text).unwrap_or_else(|| parse_float(text))
}

fn grassy_number(text: &str) -> f64 {
    if let Some(caps) = grandmaster_pattern().captures(text) {
        let token = &caps[2];
        let rank = if token.bytes().all(|b| b.is_ascii_digit()) {
            parse_float(token)
        } else {
            // The pattern only admits numeral letters here
            from_roman(token).map_or(f64::NAN, |n| n as f64)
        };

        if rank == 1.0 {
            let sub_tier = caps.get(1).map(|m| m.as_str().to_ascii_lowercase());
            match sub_tier.as_deref() {
                Some("low") => return GRANDMASTER_I_LOW,
                Some("medium") => return GRANDMASTER_I_MEDIUM,
                Some("high") => return GRANDMASTER_I_HIGH,
                _ => {}
            }
        }
        return GRANDMASTER_II + (rank - 2.0);
    }

    lookup(GRASSY_TIERS, text).unwrap_or_else(|| parse_float(text))
}

/// Parse a label (or a plain number) written in `scale`'s notation.
///
/// Leading and trailing whitespace is ignored. Returns NaN when the text
/// is neither a known label nor starts with a number.
///
/// ```
/// use diffscale::{visual_to_number, Scale};
///
/// assert_eq!(visual_to_number("TAS+3", Scale::Punter), 16.0);
/// assert_eq!(visual_to_number("2.5b", Scale::MichaelChan), 25.0);
/// assert_eq!(visual_to_number("Low Grandmaster I", Scale::Grassy), 7.5);
/// assert!(visual_to_number("???", Scale::Punter).is_nan());
/// ```
pub fn visual_to_number(text: &str, scale: Scale) -> f64 {
    let text = text.trim();
    match scale {
        Scale::Punter => punter_number(text),
        Scale::MichaelChan => michael_chan_number(text),
        Scale::Scheep => scheep_number(text),
        Scale::Grassy => grassy_number(text),
    }
}
