//! JSON report output

use super::Summary;
use crate::batch::ConversionRecord;
use chrono::Local;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
pub struct Report<'a> {
    pub generated: String,
    pub summary: Summary,
    pub records: &'a [ConversionRecord],
}

impl<'a> Report<'a> {
    pub fn new(records: &'a [ConversionRecord]) -> Self {
        Self {
            generated: Local::now().to_rfc3339(),
            summary: Summary::from_records(records),
            records,
        }
    }
}

pub fn write<W: Write>(writer: &mut W, records: &[ConversionRecord]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Report::new(records))?;
    writeln!(writer)
}
