//! The classic three-call converter surface.
//!
//! `initialize_xo` opens a pretty-printing session on standard output,
//! `convert_to_xml` wraps one value in a `root` container, and `finalize_xo`
//! flushes and consumes the session. The ordering contract (initialize, then
//! any number of conversions, then exactly one finalize) is enforced by
//! ownership: conversions need a live session, and finalize moves it.

use crate::errors::ConverterError;
use crate::session::{SessionOptions, XmlSession};
use std::io::{self, Stdout, Write};

/// Open a pretty-printing session on standard output.
pub fn initialize_xo() -> XmlSession<Stdout> {
    XmlSession::open(io::stdout(), SessionOptions { pretty: true })
}

/// Emit `data`, followed by a newline, as a single field inside a `root`
/// container. May be called any number of times on one session; each call
/// produces one container-wrapped emission, in call order.
pub fn convert_to_xml<W: Write>(
    session: &mut XmlSession<W>,
    data: &str,
) -> Result<(), ConverterError> {
    session.convert_to_xml(data)
}

/// Flush any buffered output and release the session.
pub fn finalize_xo<W: Write>(session: XmlSession<W>) -> Result<(), ConverterError> {
    session.finish().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_lifecycle() {
        let mut session = XmlSession::open(Vec::new(), SessionOptions { pretty: true });
        convert_to_xml(&mut session, "hello").unwrap();
        convert_to_xml(&mut session, "world").unwrap();
        let out = String::from_utf8(session.finish().unwrap()).unwrap();

        assert!(out.find("hello").unwrap() < out.find("world").unwrap());
        assert_eq!(out.matches("<root>").count(), 2);
    }

    #[test]
    fn test_finalize_flushes_cleanly() {
        let mut session = XmlSession::open(Vec::new(), SessionOptions { pretty: false });
        convert_to_xml(&mut session, "payload").unwrap();
        assert!(finalize_xo(session).is_ok());
    }
}
