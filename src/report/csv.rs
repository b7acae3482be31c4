//! CSV report output

use crate::batch::ConversionRecord;
use std::io::{self, Write};

const HEADER: &str = "line,input,from,to,value,visual,error";

/// Quote a field when it contains a delimiter, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write<W: Write>(writer: &mut W, records: &[ConversionRecord]) -> io::Result<()> {
    writeln!(writer, "{}", HEADER)?;

    for r in records {
        let value = if r.value.is_some() { r.formatted.as_str() } else { "" };
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            r.line,
            escape(&r.input),
            r.from,
            r.to,
            value,
            escape(r.visual.as_deref().unwrap_or("")),
            escape(r.error.as_deref().unwrap_or("")),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;

    fn record(input: &str, value: Option<f64>, visual: Option<&str>) -> ConversionRecord {
        ConversionRecord {
            line: 7,
            input: input.to_string(),
            from: Scale::Scheep,
            to: Scale::Punter,
            value,
            formatted: value.map_or("NaN".to_string(), crate::format_number),
            visual: visual.map(str::to_string),
            error: None,
        }
    }

    fn render(records: &[ConversionRecord]) -> String {
        let mut out = Vec::new();
        write(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_only() {
        assert_eq!(render(&[]), format!("{}\n", HEADER));
    }

    #[test]
    fn test_row() {
        let out = render(&[record("Insane EX", Some(7.0), Some("Extreme"))]);
        assert_eq!(out.lines().nth(1), Some("7,Insane EX,scheep,punter,7,Extreme,"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape("Cwktao's Wrath"), "Cwktao's Wrath");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_missing_value_left_blank() {
        let out = render(&[record("Very Hard", None, None)]);
        assert_eq!(out.lines().nth(1), Some("7,Very Hard,scheep,punter,,,"));
    }
}
