//! Byte input and key decoding.
//!
//! `ByteSource` is the single blocking primitive: one byte, or nothing if the
//! read window closed first. `KeyDecoder` turns those bytes into `LogicalKey`s,
//! consuming exactly the bytes of one key per call.
//!
//! ## Escape grammar
//!
//! ```text
//! ESC [ 1 ~  Home      ESC [ A  ArrowUp      ESC 0 H  Home
//! ESC [ 3 ~  Delete    ESC [ B  ArrowDown    ESC 0 F  End
//! ESC [ 4 ~  End       ESC [ C  ArrowRight
//! ESC [ 5 ~  PageUp    ESC [ D  ArrowLeft
//! ESC [ 6 ~  PageDown  ESC [ H  Home
//! ESC [ 7 ~  Home      ESC [ F  End
//! ESC [ 8 ~  End
//! ```
//!
//! Anything else, including a bare ESC whose follow-up bytes never arrive,
//! decodes to `EscapeAlone`.

use std::io;

use log::debug;

use super::error::TerminalError;
use crate::core::key::LogicalKey;

pub const ESC: u8 = 0x1b;

/// A blocking, one-byte-at-a-time input.
pub trait ByteSource {
    /// `Ok(Some(byte))` for a byte, `Ok(None)` when the read window closed
    /// with nothing to read.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;
}

/// Standard input in raw mode, where `read()` returns 0 once `VTIME` expires.
pub struct StdinBytes;

impl ByteSource for StdinBytes {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = 0u8;
        // SAFETY: reading at most one byte into a valid one-byte buffer.
        let n = unsafe {
            libc::read(
                libc::STDIN_FILENO,
                (&mut byte as *mut u8).cast::<libc::c_void>(),
                1,
            )
        };
        match n {
            1 => Ok(Some(byte)),
            0 => Ok(None),
            _ => {
                let err = io::Error::last_os_error();
                // Some platforms report an empty read window as EAGAIN
                if err.kind() == io::ErrorKind::WouldBlock
                    || err.kind() == io::ErrorKind::Interrupted
                {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }
}

pub struct KeyDecoder<S: ByteSource> {
    source: S,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Block until one whole key has been read.
    pub fn read_key(&mut self) -> Result<LogicalKey, TerminalError> {
        let byte = self.read_first_byte()?;
        if byte != ESC {
            return Ok(LogicalKey::from_byte(byte));
        }

        let Some(first) = self.follow_up() else {
            return Ok(LogicalKey::EscapeAlone);
        };
        let Some(second) = self.follow_up() else {
            return Ok(LogicalKey::EscapeAlone);
        };

        let key = match (first, second) {
            (b'[', digit @ b'0'..=b'9') => match self.follow_up() {
                Some(b'~') => tilde_key(digit),
                _ => None,
            },
            (b'[', letter) => bracket_key(letter),
            (b'0', letter) => zero_key(letter),
            _ => None,
        };

        Ok(key.unwrap_or_else(|| {
            debug!(
                "Unrecognized escape sequence ESC {:?} {:?}",
                first as char, second as char
            );
            LogicalKey::EscapeAlone
        }))
    }

    /// The first byte of a key waits as long as it takes.
    fn read_first_byte(&mut self) -> Result<u8, TerminalError> {
        loop {
            match self.source.read_byte() {
                Ok(Some(byte)) => return Ok(byte),
                Ok(None) => continue,
                Err(e) => return Err(TerminalError::Read(e)),
            }
        }
    }

    /// Bytes after an ESC get one read window; a miss or failure ends the sequence.
    fn follow_up(&mut self) -> Option<u8> {
        match self.source.read_byte() {
            Ok(byte) => byte,
            Err(e) => {
                debug!("Read inside escape sequence failed: {}", e);
                None
            }
        }
    }
}

fn tilde_key(digit: u8) -> Option<LogicalKey> {
    match digit {
        b'1' | b'7' => Some(LogicalKey::Home),
        b'3' => Some(LogicalKey::Delete),
        b'4' | b'8' => Some(LogicalKey::End),
        b'5' => Some(LogicalKey::PageUp),
        b'6' => Some(LogicalKey::PageDown),
        _ => None,
    }
}

fn bracket_key(letter: u8) -> Option<LogicalKey> {
    match letter {
        b'A' => Some(LogicalKey::ArrowUp),
        b'B' => Some(LogicalKey::ArrowDown),
        b'C' => Some(LogicalKey::ArrowRight),
        b'D' => Some(LogicalKey::ArrowLeft),
        b'H' => Some(LogicalKey::Home),
        b'F' => Some(LogicalKey::End),
        _ => None,
    }
}

fn zero_key(letter: u8) -> Option<LogicalKey> {
    match letter {
        b'H' => Some(LogicalKey::Home),
        b'F' => Some(LogicalKey::End),
        _ => None,
    }
}
