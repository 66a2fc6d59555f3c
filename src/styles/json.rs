//! JSON output via serde.

use crate::Columns;
use crate::count::{Count, Report};
use crate::errors::ConverterError;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CountView {
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    characters: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bytes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    longest_line: Option<usize>,
}

impl CountView {
    fn new(count: &Count, columns: Columns) -> Self {
        Self {
            lines: columns.lines.then_some(count.lines),
            words: columns.words.then_some(count.words),
            characters: columns.chars.then_some(count.characters),
            bytes: columns.bytes.then_some(count.bytes),
            longest_line: columns.longest.then_some(count.longest_line),
        }
    }
}

#[derive(Serialize)]
struct FileView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(flatten)]
    count: CountView,
}

#[derive(Serialize)]
struct ReportView<'a> {
    files: Vec<FileView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<CountView>,
}

/// Write the report as JSON, pretty-printed unless `pretty` is off. Only
/// selected columns appear in the output.
pub fn write<W: Write>(
    mut writer: W,
    report: &Report,
    columns: Columns,
    pretty: bool,
) -> Result<(), ConverterError> {
    let view = ReportView {
        files: report
            .files
            .iter()
            .map(|file| FileView {
                name: file.name.as_deref(),
                count: CountView::new(&file.count, columns),
            })
            .collect(),
        total: report.total.as_ref().map(|t| CountView::new(t, columns)),
    };

    if pretty {
        serde_json::to_writer_pretty(&mut writer, &view)?;
    } else {
        serde_json::to_writer(&mut writer, &view)?;
    }
    writer
        .write_all(b"\n")
        .map_err(|e| ConverterError::Io(e, "Failed to write JSON output".to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::FileReport;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    #[test]
    fn test_selected_columns_only() {
        let report = Report {
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
        };
        let columns = Columns {
            lines: true,
            words: true,
            ..Columns::default()
        };

        let mut out = Vec::new();
        write(&mut out, &report, columns, true).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["files"][0]["name"], "a.txt");
        assert_eq!(value["files"][0]["lines"], 2);
        assert_eq!(value["files"][0]["words"], 4);
        assert!(value["files"][0].get("bytes").is_none());
        assert!(value.get("total").is_none());
    }

    #[test]
    fn test_total_round_trips() {
        let count = Count {
            lines: 3,
            words: 5,
            bytes: 40,
            characters: 40,
            longest_line: 20,
        };
        let report = Report {
            files: vec![
                FileReport {
                    name: Some("a".to_string()),
                    count,
                },
                FileReport {
                    name: Some("b".to_string()),
                    count,
                },
            ],
            total: Some({
                let mut total = count;
                total.accumulate(&count);
                total
            }),
        };

        let mut out = Vec::new();
        write(&mut out, &report, Columns::default().effective(), false).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["files"].as_array().unwrap().len(), 2);
        assert_eq!(value["total"]["lines"], 6);
    }
}
