//! Report generation for batch conversions
//!
//! - **JSON**: machine-readable, with a generation timestamp and summary
//! - **CSV**: spreadsheet-compatible, one row per converted line
//!
//! # Usage
//!
//! ```ignore
//! use diffscale::report;
//!
//! // Format follows the extension
//! report::generate("levels.json", &records)?;  // JSON
//! report::generate("levels.csv", &records)?;   // CSV
//! ```

pub mod csv;
pub mod json;

use crate::batch::ConversionRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;

/// Generate a report in the appropriate format based on file extension
pub fn generate<P: AsRef<Path>>(path: P, records: &[ConversionRecord]) -> io::Result<()> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut file = std::fs::File::create(path)?;

    match ext.as_str() {
        "json" => json::write(&mut file, records),
        _ => csv::write(&mut file, records),
    }
}

/// Summary statistics for a batch of conversions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub converted: usize,
    pub unparsed: usize,
    /// How many entries landed in each destination label
    pub tiers: BTreeMap<String, usize>,
}

impl Summary {
    pub fn from_records(records: &[ConversionRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };

        for r in records {
            if r.is_error() {
                summary.unparsed += 1;
                continue;
            }
            summary.converted += 1;
            if let Some(ref label) = r.visual {
                *summary.tiers.entry(label.clone()).or_insert(0) += 1;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;

    // ==========================================================================
    // SUMMARY STATISTICS TESTS
    // ==========================================================================
    //
    // The summary sits at the top of JSON reports and is printed at the end
    // of a CLI batch run.
    // ==========================================================================

    fn create_record(visual: Option<&str>, error: Option<&str>) -> ConversionRecord {
        ConversionRecord {
            line: 1,
            input: "x".to_string(),
            from: Scale::Punter,
            to: Scale::Scheep,
            value: error.is_none().then_some(8.0),
            formatted: "8".to_string(),
            visual: visual.map(str::to_string),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_summary_empty() {
        let summary = Summary::from_records(&[]);
        assert_eq!(summary, Summary::default());
    }

    #[test]
    fn test_summary_counts_tiers() {
        let records = vec![
            create_record(Some("Madness"), None),
            create_record(Some("Madness"), None),
            create_record(Some("Extreme"), None),
        ];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.converted, 3);
        assert_eq!(summary.unparsed, 0);
        assert_eq!(summary.tiers.get("Madness"), Some(&2));
        assert_eq!(summary.tiers.get("Extreme"), Some(&1));
    }

    #[test]
    fn test_summary_mixed() {
        let records = vec![
            create_record(Some("Baby"), None),
            create_record(None, Some("'?' is not a punter difficulty")),
            create_record(None, None),
        ];
        let summary = Summary::from_records(&records);

        assert_eq!(summary.total, 3);
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.unparsed, 1);
        assert_eq!(summary.tiers.len(), 1);
    }

    #[test]
    fn test_generate_picks_format_from_extension() {
        let dir = std::env::temp_dir().join(format!("diffscale-report-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let records = vec![create_record(Some("Madness"), None)];

        let json_path = dir.join("out.json");
        generate(&json_path, &records).unwrap();
        let json = std::fs::read_to_string(&json_path).unwrap();
        assert!(json.trim_start().starts_with('{'));

        let csv_path = dir.join("out.csv");
        generate(&csv_path, &records).unwrap();
        let csv = std::fs::read_to_string(&csv_path).unwrap();
        assert!(csv.starts_with("line,"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
