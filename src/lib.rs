//! Main library for xwc.
//!
//! This crate counts lines, words, bytes, and characters over files or
//! standard input and renders the results in classic text columns, as
//! pretty-printed XML through an explicit formatting session, or as JSON.
//! The session layer is usable on its own: see [`session::XmlSession`] and
//! the classic [`adapter`] surface built on top of it.

pub mod adapter;
pub mod count;
pub mod errors;
pub mod session;
pub mod styles;

pub use adapter::{convert_to_xml, finalize_xo, initialize_xo};

use count::{Count, FileReport, Report};
use errors::ConverterError;
use log::info;
use session::{SessionOptions, XmlSession};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

/// Which count columns to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub lines: bool,
    pub words: bool,
    pub bytes: bool,
    pub chars: bool,
    pub longest: bool,
}

impl Columns {
    /// True when at least one column is selected.
    pub fn any(&self) -> bool {
        self.lines || self.words || self.bytes || self.chars || self.longest
    }

    /// The columns to actually report: the selection as-is, or the classic
    /// lines/words/bytes default when nothing was selected.
    pub fn effective(self) -> Self {
        if self.any() {
            self
        } else {
            Self {
                lines: true,
                words: true,
                bytes: true,
                ..Self::default()
            }
        }
    }
}

/// Top-level configuration for a run.
#[derive(Debug)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    pub columns: Columns,
    pub style: styles::Style,
    pub pretty: bool,
    pub convert: bool,
}

/// The main entry point.
///
/// Reads the configured inputs (standard input when none are given),
/// then either emits them verbatim through the XML converter or counts
/// them and renders a report in the chosen style.
pub fn run(config: Config) -> Result<(), ConverterError> {
    let start_time = Instant::now();
    info!("Starting run: {} input(s)", config.inputs.len().max(1));

    // --- 1. Pass-Through Conversion ---
    if config.convert {
        let mut session = XmlSession::open(
            io::stdout().lock(),
            SessionOptions {
                pretty: config.pretty,
            },
        );
        for content in read_inputs(&config.inputs)? {
            session.convert_to_xml(&String::from_utf8_lossy(&content))?;
        }
        session.finish()?;
        info!("Conversion finished. (Took {:.2?})", start_time.elapsed());
        return Ok(());
    }

    // --- 2. Counting ---
    let columns = config.columns.effective();
    let mut report = Report::default();

    if config.inputs.is_empty() {
        let content = read_stdin()?;
        report.files.push(FileReport {
            name: None,
            count: Count::from_content(&content, columns.chars),
        });
    } else {
        let mut total = Count::default();
        for path in &config.inputs {
            let content = fs::read(path).map_err(|e| {
                ConverterError::Io(e, format!("Failed to read {}", path.display()))
            })?;
            let count = Count::from_content(&content, columns.chars);
            total.accumulate(&count);
            report.files.push(FileReport {
                name: Some(path.display().to_string()),
                count,
            });
        }
        // Only report a total when more than one file was counted.
        if report.files.len() > 1 {
            report.total = Some(total);
        }
    }

    // --- 3. Rendering ---
    styles::write_report(
        io::stdout().lock(),
        &report,
        columns,
        config.style,
        config.pretty,
    )?;

    info!("Run finished. (Took {:.2?})", start_time.elapsed());
    Ok(())
}

fn read_inputs(inputs: &[PathBuf]) -> Result<Vec<Vec<u8>>, ConverterError> {
    if inputs.is_empty() {
        return Ok(vec![read_stdin()?]);
    }
    inputs
        .iter()
        .map(|path| {
            fs::read(path)
                .map_err(|e| ConverterError::Io(e, format!("Failed to read {}", path.display())))
        })
        .collect()
}

fn read_stdin() -> Result<Vec<u8>, ConverterError> {
    let mut content = Vec::new();
    io::stdin()
        .read_to_end(&mut content)
        .map_err(|e| ConverterError::Io(e, "Failed to read from standard input".to_string()))?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_default_to_classic_triple() {
        let columns = Columns::default().effective();
        assert!(columns.lines && columns.words && columns.bytes);
        assert!(!columns.chars && !columns.longest);
    }

    #[test]
    fn test_explicit_selection_is_kept() {
        let columns = Columns {
            longest: true,
            ..Columns::default()
        }
        .effective();
        assert!(columns.longest);
        assert!(!columns.lines && !columns.words && !columns.bytes);
    }
}
