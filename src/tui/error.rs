//! Fatal terminal errors.
//!
//! Every variant ends the session. `Display` names the failing operation
//! so the diagnostic printed on exit says what went wrong.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum TerminalError {
    GetAttributes(io::Error),
    SetAttributes(io::Error),
    WindowSize(io::Error),
    DegenerateWindow { rows: u16, cols: u16 },
    Read(io::Error),
    Write(io::Error),
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalError::GetAttributes(e) => write!(f, "tcgetattr: {e}"),
            TerminalError::SetAttributes(e) => write!(f, "tcsetattr: {e}"),
            TerminalError::WindowSize(e) => write!(f, "window size query: {e}"),
            TerminalError::DegenerateWindow { rows, cols } => {
                write!(f, "window size query: unusable terminal size {rows}x{cols}")
            }
            TerminalError::Read(e) => write!(f, "read: {e}"),
            TerminalError::Write(e) => write!(f, "write: {e}"),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerminalError::GetAttributes(e)
            | TerminalError::SetAttributes(e)
            | TerminalError::WindowSize(e)
            | TerminalError::Read(e)
            | TerminalError::Write(e) => Some(e),
            TerminalError::DegenerateWindow { .. } => None,
        }
    }
}
