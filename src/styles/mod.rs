//! Output style selection and rendering.
//!
//! A report can be rendered as classic text columns, as XML through a
//! formatting session, or as JSON.

pub mod json;
pub mod text;
pub mod xml;

use crate::Columns;
use crate::count::Report;
use crate::errors::ConverterError;
use clap::ValueEnum;
use std::io::Write;

/// Supported output styles.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Classic right-aligned columns.
    Text,
    /// A `root` container wrapping one container per input.
    Xml,
    /// An object tree with the same shape as the XML output.
    Json,
}

/// Render `report` to `writer` in the chosen style.
pub fn write_report<W: Write>(
    writer: W,
    report: &Report,
    columns: Columns,
    style: Style,
    pretty: bool,
) -> Result<(), ConverterError> {
    match style {
        Style::Text => text::write(writer, report, columns),
        Style::Xml => xml::write(writer, report, columns, pretty),
        Style::Json => json::write(writer, report, columns, pretty),
    }
}
