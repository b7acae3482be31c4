//! Bulk conversion of difficulty lists
//!
//! Reads one difficulty per line (numbers or labels, `#` comments and
//! blank lines skipped) and converts every entry between two scales in
//! parallel. Entries that don't parse are kept in the output with an
//! error message instead of aborting the batch.

use crate::convert::{Conversion, Input};
use crate::error::ScaleError;
use crate::scale::Scale;
use rayon::prelude::*;
use serde::Serialize;
use std::io::{self, BufRead};
use tracing::{debug, warn};

/// One converted line of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRecord {
    /// 1-based line number in the source
    pub line: usize,
    pub input: String,
    pub from: Scale,
    pub to: Scale,
    /// `None` when the input wasn't a difficulty
    pub value: Option<f64>,
    pub formatted: String,
    pub visual: Option<String>,
    pub error: Option<String>,
}

impl ConversionRecord {
    fn from_conversion(line: usize, c: Conversion, with_visual: bool) -> Self {
        let error = if c.ok() {
            None
        } else {
            Some(
                ScaleError::NotANumber {
                    input: c.input.clone(),
                    scale: c.from,
                }
                .to_string(),
            )
        };

        Self {
            line,
            value: c.ok().then_some(c.value),
            visual: (with_visual && c.ok()).then_some(c.visual),
            input: c.input,
            from: c.from,
            to: c.to,
            formatted: c.formatted,
            error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// A source line worth converting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: usize,
    pub text: String,
}

/// Collect entries from a line-oriented reader.
pub fn read_entries<R: BufRead>(reader: R) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        entries.push(Entry {
            line: idx + 1,
            text: text.to_string(),
        });
    }
    Ok(entries)
}

#[derive(Debug, Clone)]
pub struct BatchConverter {
    pub from: Scale,
    pub to: Scale,
    /// Attach destination labels to each record
    pub visual: bool,
}

impl Default for BatchConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchConverter {
    pub fn new() -> Self {
        Self {
            from: Scale::Punter,
            to: Scale::Punter,
            visual: true,
        }
    }

    pub fn with_from(mut self, scale: Scale) -> Self {
        self.from = scale;
        self
    }

    pub fn with_to(mut self, scale: Scale) -> Self {
        self.to = scale;
        self
    }

    pub fn with_visual(mut self, visual: bool) -> Self {
        self.visual = visual;
        self
    }

    pub fn convert_entry(&self, entry: &Entry) -> ConversionRecord {
        let conversion = Conversion::run(Input::Label(&entry.text), self.from, self.to);
        let record = ConversionRecord::from_conversion(entry.line, conversion, self.visual);
        if let Some(ref err) = record.error {
            warn!(line = entry.line, "{}", err);
        }
        record
    }

    /// Convert all entries, preserving their order.
    pub fn convert_all(&self, entries: &[Entry]) -> Vec<ConversionRecord> {
        debug!(
            count = entries.len(),
            from = %self.from,
            to = %self.to,
            "converting batch"
        );
        entries.par_iter().map(|e| self.convert_entry(e)).collect()
    }
}
