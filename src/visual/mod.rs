//! Human-readable difficulty labels
//!
//! Each scale names its difficulties differently:
//!
//! - **Punter**: tier names centred on integers (`Madness` covers 7.5-8.5)
//!   with a position prefix such as `Low`, `Peak` or `Skyline`. From 16 up
//!   the label is open-ended: `TAS+3`, `TAS+4`, ...
//! - **MichaelChan**: a rebased number with a unit glyph (`2.5💣` is 25).
//! - **Scheep**: plain tier names at fixed thresholds.
//! - **Grassy**: Low/Medium/High tier names on Punter numbers, then an
//!   open-ended `Grandmaster IV`, `Grandmaster V`, ... above 10.5.
//!
//! [`to_visual`] renders a number into a label; [`visual_to_number`]
//! reads one back.

mod glyph;
mod parse;
mod roman;

pub use glyph::Glyph;
pub use parse::visual_to_number;
pub use roman::{from_roman, to_roman};

use crate::number::{format_number, round_half_up};
use crate::scale::Scale;
use serde::Serialize;

/// A named tier starting at `threshold`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tier {
    pub threshold: f64,
    pub label: &'static str,
}

const fn tier(threshold: f64, label: &'static str) -> Tier {
    Tier { threshold, label }
}

/// Punter tiers by centre value. Labels for 16+ are generated.
pub static PUNTER_TIERS: &[Tier] = &[
    tier(1.0, "Easy"),
    tier(2.0, "Medium"),
    tier(3.0, "Hard"),
    tier(4.0, "Harder"),
    tier(5.0, "Insane"),
    tier(6.0, "Expert"),
    tier(7.0, "Extreme"),
    tier(8.0, "Madness"),
    tier(9.0, "Master"),
    tier(10.0, "Grandmaster"),
    tier(11.0, "Grandmaster+1"),
    tier(12.0, "Grandmaster+2"),
    tier(13.0, "TAS"),
    tier(14.0, "TAS+1"),
    tier(15.0, "TAS+2"),
];

pub static SCHEEP_TIERS: &[Tier] = &[
    tier(0.0, "Baby"),
    tier(1.0, "Easy"),
    tier(2.0, "Medium"),
    tier(3.0, "Hard"),
    tier(3.5, "Harder"),
    tier(4.0, "Difficult"),
    tier(5.0, "Intense"),
    tier(6.0, "Remorseless"),
    tier(7.0, "Insane"),
    tier(7.5, "Insane EX"),
    tier(8.0, "Madness"),
    tier(9.0, "Extreme"),
    tier(10.0, "Xtreme"),
    tier(11.0, "???????"),
    tier(12.0, "Impossible"),
    tier(13.0, "Ascended"),
    tier(14.0, "TAS"),
    tier(15.0, "Cwktao's Wrath"),
];

/// Grassy tiers on Punter numbers. Grandmaster IV and up are generated.
pub static GRASSY_TIERS: &[Tier] = &[
    tier(0.0, "Low Beginner"),
    tier(1.5, "Medium Beginner"),
    tier(2.0, "High Beginner"),
    tier(2.5, "Low Intermediate"),
    tier(3.0, "Medium Intermediate"),
    tier(3.25, "High Intermediate"),
    tier(3.5, "Low Advanced"),
    tier(3.75, "Medium Advanced"),
    tier(4.0, "High Advanced"),
    tier(4.5, "Low Expert"),
    tier(5.25, "Medium Expert"),
    tier(6.0, "High Expert"),
    tier(6.75, "Low Master"),
    tier(7.0, "Medium Master"),
    tier(7.25, "High Master"),
    tier(7.5, "Low Grandmaster I"),
    tier(7.75, "Medium Grandmaster I"),
    tier(8.0, "High Grandmaster I"),
    tier(8.75, "Grandmaster II"),
    tier(9.5, "Grandmaster III"),
];

/// Punter values at or above this are TAS+N
const TAS_OPEN_ENDED: f64 = 16.0;
/// TAS+N is N above this
const TAS_BASE: f64 = 13.0;

/// Grassy values above this are open-ended Grandmaster tiers
const GRASSY_OPEN_ENDED: f64 = 10.5;
/// Grandmaster II starts here; each tier is one Punter point
const GRANDMASTER_II: f64 = 8.5;
/// Tiers from here on are written in Roman numerals
const ROMAN_FROM_TIER: f64 = 4.0;

const FLOOR_WINDOW: (f64, f64) = (0.49, 0.51);
const SKYLINE_TOLERANCE: f64 = 0.005;

/// Position prefix for a Punter value within its tier.
///
/// Includes the trailing space when non-empty, so it can be glued onto
/// the tier name.
///
/// ```
/// use diffscale::punter_prefix;
///
/// assert_eq!(punter_prefix(1.5), "Skyline ");
/// assert_eq!(punter_prefix(7.3), "High ");
/// assert_eq!(punter_prefix(7.0), "");
/// ```
pub fn punter_prefix(value: f64) -> &'static str {
    let base = round_half_up(value);
    let delta = value - base;

    if value >= FLOOR_WINDOW.0 && value < FLOOR_WINDOW.1 {
        return "Floor ";
    }

    let frac = value - value.floor();
    if (frac - 0.5).abs() <= SKYLINE_TOLERANCE {
        return "Skyline ";
    }

    if delta <= -0.40 {
        "Bottom "
    } else if delta <= -0.25 {
        "Low "
    } else if delta < 0.25 {
        ""
    } else if delta < 0.40 {
        "High "
    } else if delta >= 0.40 {
        "Peak "
    } else {
        // NaN
        ""
    }
}

fn punter_visual(value: f64) -> String {
    if value >= TAS_OPEN_ENDED {
        let extra = (value - TAS_BASE).floor();
        return if extra > 0.0 {
            format!("TAS+{}", format_number(extra))
        } else {
            "TAS".to_string()
        };
    }

    let prefix = punter_prefix(value);
    if value == 0.5 {
        return "Floor Easy".to_string();
    }

    // A tier runs from its centre - 0.5 (exclusive) upward
    PUNTER_TIERS
        .iter()
        .rev()
        .find(|t| value > t.threshold - 0.5)
        .map(|t| format!("{}{}", prefix, t.label))
        .unwrap_or_else(|| format_number(value))
}

fn michael_chan_visual(value: f64) -> String {
    let glyph = Glyph::for_value(value);
    format!("{}{}", format_number(glyph.rebase(value)), glyph.symbol())
}

fn scheep_visual(value: f64) -> String {
    SCHEEP_TIERS
        .iter()
        .rev()
        .find(|t| value >= t.threshold)
        .map(|t| t.label.to_string())
        .unwrap_or_else(|| format_number(value))
}

fn grassy_visual(value: f64) -> String {
    if value > GRASSY_OPEN_ENDED {
        let rank = (value - GRANDMASTER_II).floor() + 2.0;
        return if (ROMAN_FROM_TIER..=u32::MAX as f64).contains(&rank) {
            format!("Grandmaster {}", to_roman(rank as u32))
        } else {
            // Beyond what a numeral can spell
            format!("Grandmaster {}", format_number(rank))
        };
    }

    // Strictly above the threshold, unlike Scheep
    GRASSY_TIERS
        .iter()
        .rev()
        .find(|t| value > t.threshold)
        .map(|t| t.label.to_string())
        .unwrap_or_else(|| format_number(value))
}

/// Render a value (in `scale`'s own numbers) as that scale's label.
///
/// ```
/// use diffscale::{to_visual, Scale};
///
/// assert_eq!(to_visual(16.0, Scale::Punter), "TAS+3");
/// assert_eq!(to_visual(25.0, Scale::MichaelChan), "2.5💣");
/// assert_eq!(to_visual(11.2, Scale::Grassy), "Grandmaster IV");
/// ```
pub fn to_visual(value: f64, scale: Scale) -> String {
    match scale {
        Scale::Punter => punter_visual(value),
        Scale::MichaelChan => michael_chan_visual(value),
        Scale::Scheep => scheep_visual(value),
        Scale::Grassy => grassy_visual(value),
    }
}
