//! XML output through a formatting session.

use crate::Columns;
use crate::count::{Count, Report};
use crate::errors::ConverterError;
use crate::session::{SessionOptions, XmlSession};
use std::io::Write;

/// Write the report as a `root` container holding one `file` container per
/// input and a `total` container when present.
pub fn write<W: Write>(
    sink: W,
    report: &Report,
    columns: Columns,
    pretty: bool,
) -> Result<(), ConverterError> {
    let mut session = XmlSession::open(sink, SessionOptions { pretty });
    session.open_container("root")?;
    for file in &report.files {
        session.open_container("file")?;
        if let Some(name) = &file.name {
            session.emit_element("name", name)?;
        }
        emit_count(&mut session, &file.count, columns)?;
        session.close_container("file")?;
    }
    if let Some(total) = &report.total {
        session.open_container("total")?;
        emit_count(&mut session, total, columns)?;
        session.close_container("total")?;
    }
    session.close_container("root")?;
    session.finish()?;
    Ok(())
}

fn emit_count<W: Write>(
    session: &mut XmlSession<W>,
    count: &Count,
    columns: Columns,
) -> Result<(), ConverterError> {
    if columns.lines {
        session.emit_element("lines", &count.lines.to_string())?;
    }
    if columns.words {
        session.emit_element("words", &count.words.to_string())?;
    }
    if columns.chars {
        session.emit_element("characters", &count.characters.to_string())?;
    }
    if columns.bytes {
        session.emit_element("bytes", &count.bytes.to_string())?;
    }
    if columns.longest {
        session.emit_element("longest_line", &count.longest_line.to_string())?;
    }
    Ok(())
}
