//! Classic column output.

use crate::Columns;
use crate::count::{Count, Report};
use crate::errors::ConverterError;
use std::io::Write;

/// Write one line per input, then a `total` line when more than one file
/// was counted. Selected columns are right-aligned in eight-wide fields.
pub fn write<W: Write>(
    mut writer: W,
    report: &Report,
    columns: Columns,
) -> Result<(), ConverterError> {
    for file in &report.files {
        write_line(&mut writer, &file.count, file.name.as_deref(), columns)?;
    }
    if let Some(total) = &report.total {
        write_line(&mut writer, total, Some("total"), columns)?;
    }
    Ok(())
}

fn write_line<W: Write>(
    writer: &mut W,
    count: &Count,
    name: Option<&str>,
    columns: Columns,
) -> Result<(), ConverterError> {
    let mut line = String::new();
    if columns.lines {
        line.push_str(&format!("{:8}", count.lines));
    }
    if columns.words {
        line.push_str(&format!("{:8}", count.words));
    }
    if columns.chars {
        line.push_str(&format!("{:8}", count.characters));
    }
    if columns.bytes {
        line.push_str(&format!("{:8}", count.bytes));
    }
    if columns.longest {
        line.push_str(&format!("{:8}", count.longest_line));
    }
    match name {
        Some(name) => writeln!(writer, "{line} {name}"),
        None => writeln!(writer, "{line}"),
    }
    .map_err(|e| ConverterError::Io(e, "Failed to write text output".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::FileReport;
    use pretty_assertions::assert_eq;

    fn sample_report() -> Report {
        Report {
            files: vec![FileReport {
                name: Some("a.txt".to_string()),
                count: Count {
                    lines: 2,
                    words: 4,
                    bytes: 24,
                    characters: 24,
                    longest_line: 12,
                },
            }],
            total: None,
        }
    }

    #[test]
    fn test_default_columns() {
        let mut out = Vec::new();
        let columns = Columns::default().effective();
        write(&mut out, &sample_report(), columns).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "       2       4      24 a.txt\n"
        );
    }

    #[test]
    fn test_single_column_without_name() {
        let report = Report {
            files: vec![FileReport {
                name: None,
                count: Count {
                    lines: 7,
                    ..Count::default()
                },
            }],
            total: None,
        };
        let columns = Columns {
            lines: true,
            ..Columns::default()
        };

        let mut out = Vec::new();
        write(&mut out, &report, columns).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "       7\n");
    }

    #[test]
    fn test_total_line_is_last() {
        let mut report = sample_report();
        report.total = Some(report.files[0].count);
        let mut out = Vec::new();
        write(&mut out, &report, Columns::default().effective()).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.ends_with(" total\n"), "got: {rendered}");
    }
}
