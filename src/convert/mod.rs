//! Routing difficulty values between scales
//!
//! Every conversion goes `source -> Punter -> destination`:
//!
//! | Scale        | to Punter                | from Punter                |
//! |--------------|--------------------------|----------------------------|
//! | punter       | identity                 | identity                   |
//! | grassy       | identity                 | identity                   |
//! | michaelchan  | [`MICHAEL_CHAN_TABLE`]   | [`MICHAEL_CHAN_TABLE`]     |
//! | scheep       | [`SCHEEP_TABLE`]         | [`SCHEEP_TABLE`], 2 d.p.   |
//!
//! Converting a scale to itself skips the pivot entirely so a no-op never
//! picks up floating-point drift.

mod table;

pub use table::{interpolate, CalibrationTable, MICHAEL_CHAN_TABLE, SCHEEP_TABLE};

use crate::number::{format_number, round_to};
use crate::scale::Scale;
use crate::visual::{to_visual, visual_to_number};
use serde::Serialize;
use tracing::trace;

/// Scheep values are quantised to this many decimals
const SCHEEP_DECIMALS: i32 = 2;

/// A difficulty as a caller supplies it: already numeric, or a label
/// like `"High Madness"` / `"3💥"` / `"Grandmaster IV"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Value(f64),
    Label(&'a str),
}

impl Input<'_> {
    /// Numeric value in `scale`'s own domain (NaN when unparseable)
    pub fn resolve(self, scale: Scale) -> f64 {
        match self {
            Input::Value(v) => v,
            Input::Label(text) => visual_to_number(text, scale),
        }
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Input::Value(value)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Input::Label(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Input::Label(text.as_str())
    }
}

/// Bring a value from `scale` onto the Punter scale.
pub fn to_punter(value: f64, scale: Scale) -> f64 {
    match scale.calibration() {
        Some(table) => table.to_canonical(value),
        None => value,
    }
}

/// Take a Punter value onto `scale`, without display quantisation.
pub fn from_punter(value: f64, scale: Scale) -> f64 {
    match scale.calibration() {
        Some(table) => table.from_canonical(value),
        None => value,
    }
}

/// Convert a difficulty between two scales.
///
/// Labels are parsed with [`visual_to_number`] for the source scale first.
/// Unparseable labels yield NaN; out-of-table numbers clamp.
///
/// ```
/// use diffscale::{convert, Scale};
///
/// assert_eq!(convert(10.0, Scale::MichaelChan, Scale::Punter), 5.0);
/// assert_eq!(convert("TAS+3", Scale::Punter, Scale::Grassy), 16.0);
/// ```
pub fn convert<'a>(value: impl Into<Input<'a>>, from: Scale, to: Scale) -> f64 {
    let numeric = value.into().resolve(from);
    if from == to {
        return numeric;
    }

    let punter = to_punter(numeric, from);
    let result = from_punter(punter, to);
    trace!(%from, %to, numeric, punter, result, "converted via punter");

    match to {
        Scale::Scheep => round_to(result, SCHEEP_DECIMALS),
        Scale::Punter | Scale::MichaelChan | Scale::Grassy => result,
    }
}

/// One conversion with everything a results panel shows: the number,
/// its display form, and the destination scale's label for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub from: Scale,
    pub to: Scale,
    pub value: f64,
    pub formatted: String,
    pub visual: String,
}

impl Conversion {
    pub fn run<'a>(input: impl Into<Input<'a>>, from: Scale, to: Scale) -> Self {
        let input = input.into();
        let shown = match input {
            Input::Value(v) => format_number(v),
            Input::Label(text) => text.trim().to_string(),
        };
        let value = convert(input, from, to);

        Self {
            input: shown,
            from,
            to,
            value,
            formatted: format_number(value),
            visual: to_visual(value, to),
        }
    }

    /// False when the input couldn't be read as a difficulty
    pub fn ok(&self) -> bool {
        !self.value.is_nan()
    }
}
