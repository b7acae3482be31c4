//! Calibration tables and piecewise-linear interpolation
//!
//! A calibration table is a list of `(scale value, punter value)` pairs,
//! increasing in both coordinates. Converting to Punter walks the first
//! coordinate and interpolates the second; converting back walks the
//! second and interpolates the first. Outside the table we clamp to the
//! nearest endpoint instead of extrapolating.

use serde::Serialize;

/// Linear interpolation through `(x0, y0)` and `(x1, y1)`.
///
/// A degenerate segment (`x0 == x1`) yields `y0`.
pub fn interpolate(x0: f64, y0: f64, x1: f64, y1: f64, x: f64) -> f64 {
    if x1 == x0 {
        return y0;
    }
    y0 + (y1 - y0) * ((x - x0) / (x1 - x0))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalibrationTable {
    pairs: &'static [(f64, f64)],
}

impl CalibrationTable {
    /// Tables are trusted constants: non-empty and monotonic.
    pub const fn new(pairs: &'static [(f64, f64)]) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &'static [(f64, f64)] {
        self.pairs
    }

    /// Smallest and largest representable scale value
    pub fn domain(&self) -> (f64, f64) {
        (self.pairs[0].0, self.pairs[self.pairs.len() - 1].0)
    }

    /// Smallest and largest Punter value the table reaches
    pub fn range(&self) -> (f64, f64) {
        (self.pairs[0].1, self.pairs[self.pairs.len() - 1].1)
    }

    /// Scale value -> Punter
    pub fn to_canonical(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }
        for w in self.pairs.windows(2) {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            if value >= x0 && value <= x1 {
                return interpolate(x0, y0, x1, y1, value);
            }
        }
        let (lo, hi) = self.range();
        if value < self.pairs[0].0 {
            lo
        } else {
            hi
        }
    }

    /// Punter -> scale value
    pub fn from_canonical(&self, value: f64) -> f64 {
        if value.is_nan() {
            return value;
        }
        for w in self.pairs.windows(2) {
            let ((x0, y0), (x1, y1)) = (w[0], w[1]);
            if value >= y0 && value <= y1 {
                return interpolate(y0, x0, y1, x1, value);
            }
        }
        let (lo, hi) = self.domain();
        if value < self.pairs[0].1 {
            lo
        } else {
            hi
        }
    }
}

pub static MICHAEL_CHAN_TABLE: CalibrationTable = CalibrationTable::new(&[
    (0.1, 0.1),
    (1.0, 1.0),
    (2.0, 1.5),
    (3.0, 2.0),
    (4.0, 3.0),
    (8.0, 4.0),
    (10.0, 5.0),
    (20.0, 7.0),
    (30.0, 8.0),
    (40.0, 9.0),
    (50.0, 10.0),
    (60.0, 11.0),
    (80.0, 12.0),
    (100.0, 13.0),
    (200.0, 15.0),
]);

pub static SCHEEP_TABLE: CalibrationTable = CalibrationTable::new(&[
    (0.0, 0.0),
    (1.0, 0.5),
    (2.0, 1.0),
    (3.0, 2.0),
    (4.0, 3.5),
    (5.0, 4.0),
    (6.0, 5.0),
    (7.0, 6.0),
    (7.5, 7.0),
    (8.0, 8.0),
    (9.0, 9.0),
    (10.0, 10.0),
    (11.0, 11.0),
    (12.0, 12.0),
    (13.0, 13.0),
    (14.0, 13.5),
    (15.0, 15.0),
]);
