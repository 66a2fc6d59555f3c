//! XML formatting sessions.
//!
//! An [`XmlSession`] replaces the process-global formatting state of the
//! classic adapter with an explicit value: it is created over any writer,
//! emits containers and fields while it is live, and is consumed by
//! [`XmlSession::finish`]. The lifecycle (open, emit any number of times,
//! finish exactly once) is therefore checked by the type system instead of
//! by call-order convention.

use crate::errors::ConverterError;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Options applied when a session is opened.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Emit human-readable indentation and line breaks.
    pub pretty: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// An XML emission session over an arbitrary writer.
pub struct XmlSession<W: Write> {
    writer: Writer<W>,
    stack: Vec<String>,
    dirty: bool,
}

impl<W: Write> XmlSession<W> {
    /// Open a new session writing to `sink`.
    pub fn open(sink: W, options: SessionOptions) -> Self {
        let writer = if options.pretty {
            Writer::new_with_indent(sink, b' ', 2)
        } else {
            Writer::new(sink)
        };
        Self {
            writer,
            stack: Vec::new(),
            dirty: false,
        }
    }

    /// Open a named container element. Containers may nest.
    pub fn open_container(&mut self, name: &str) -> Result<(), ConverterError> {
        validate_name(name)?;
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(|e| ConverterError::Emit(e.to_string()))?;
        self.stack.push(name.to_string());
        self.dirty = true;
        Ok(())
    }

    /// Close the innermost container, which must match `name`.
    pub fn close_container(&mut self, name: &str) -> Result<(), ConverterError> {
        match self.stack.last() {
            Some(top) if top == name => {}
            Some(top) => {
                return Err(ConverterError::ContainerMismatch {
                    expected: top.clone(),
                    found: name.to_string(),
                });
            }
            None => return Err(ConverterError::CloseWithoutOpen(name.to_string())),
        }
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(|e| ConverterError::Emit(e.to_string()))?;
        self.stack.pop();
        Ok(())
    }

    /// Emit text content at the current position. Markup characters are
    /// escaped; text carrying control characters that XML 1.0 cannot
    /// represent is rejected.
    pub fn emit(&mut self, text: &str) -> Result<(), ConverterError> {
        validate_text(text)?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(|e| ConverterError::Emit(e.to_string()))?;
        self.dirty = true;
        Ok(())
    }

    /// Emit a named leaf element wrapping `value`.
    pub fn emit_element(&mut self, name: &str, value: &str) -> Result<(), ConverterError> {
        validate_name(name)?;
        validate_text(value)?;
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(|e| ConverterError::Emit(e.to_string()))?;
        self.writer
            .write_event(Event::Text(BytesText::new(value)))
            .map_err(|e| ConverterError::Emit(e.to_string()))?;
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(|e| ConverterError::Emit(e.to_string()))?;
        self.dirty = true;
        Ok(())
    }

    /// Emit `data`, followed by a newline, as a single field wrapped in a
    /// `root` container. Each call produces one complete container.
    pub fn convert_to_xml(&mut self, data: &str) -> Result<(), ConverterError> {
        self.open_container("root")?;
        self.emit(&format!("{data}\n"))?;
        self.close_container("root")
    }

    /// Flush pending output and consume the session, returning the sink.
    ///
    /// Fails with [`ConverterError::UnclosedContainer`] if any container is
    /// still open. A trailing newline is written when the session emitted
    /// anything at all.
    pub fn finish(mut self) -> Result<W, ConverterError> {
        if let Some(open) = self.stack.last() {
            return Err(ConverterError::UnclosedContainer(open.clone()));
        }
        let inner = self.writer.get_mut();
        if self.dirty {
            inner
                .write_all(b"\n")
                .map_err(|e| ConverterError::Io(e, "Failed to finish output".to_string()))?;
        }
        inner
            .flush()
            .map_err(|e| ConverterError::Io(e, "Failed to flush output".to_string()))?;
        Ok(self.writer.into_inner())
    }

    /// Number of containers currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// Element names: ASCII letter or underscore first, then letters, digits,
/// `_`, `-`, or `.`. This is a practical subset of XML 1.0 Name.
fn validate_name(name: &str) -> Result<(), ConverterError> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(ConverterError::InvalidName(name.to_string()))
    }
}

/// XML 1.0 cannot carry control characters below U+0020 other than
/// tab, line feed, and carriage return.
fn validate_text(text: &str) -> Result<(), ConverterError> {
    if let Some(c) = text
        .chars()
        .find(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
    {
        return Err(ConverterError::InvalidInput(format!(
            "control character U+{:04X} cannot be represented in XML",
            c as u32
        )));
    }
    Ok(())
}
