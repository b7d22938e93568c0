//! Key echo mode (`pad --keys`).
//!
//! Prints one line per decoded key until a plain `q` is typed. Handy for
//! finding out what a terminal actually sends.

use std::io::Write;

use super::error::TerminalError;
use super::input::{ByteSource, ESC, KeyDecoder};
use crate::core::key::LogicalKey;

/// Text printed for a key: the decimal byte, plus the character when it is
/// printable. Navigation keys print their name.
pub fn describe_key(key: LogicalKey) -> String {
    match key {
        LogicalKey::Printable(byte) if byte.is_ascii_graphic() || byte == b' ' => {
            format!("{} ({})", byte, byte as char)
        }
        LogicalKey::Printable(byte) | LogicalKey::ControlCombo(byte) => byte.to_string(),
        LogicalKey::EscapeAlone => ESC.to_string(),
        other => format!("{other:?}"),
    }
}

pub fn echo_loop<S: ByteSource, W: Write>(
    decoder: &mut KeyDecoder<S>,
    out: &mut W,
) -> Result<(), TerminalError> {
    loop {
        let key = decoder.read_key()?;
        if key == LogicalKey::Printable(b'q') {
            return Ok(());
        }
        // Raw mode turns off output processing, so lines need an explicit \r
        let line = format!("{}\r\n", describe_key(key));
        out.write_all(line.as_bytes())
            .map_err(TerminalError::Write)?;
        out.flush().map_err(TerminalError::Write)?;
    }
}
