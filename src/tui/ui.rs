//! # Screen Rendering
//!
//! A frame is built into one `Vec<u8>` and handed to the terminal in a single
//! write, so the user never sees half a screen.
//!
//! ```text
//! ESC[?25l                hide cursor
//! ESC[H                   home
//! ~ ESC[K \r\n            one line per row ...
//! ~      banner ESC[K \r\n  ... the banner on row rows/3 ...
//! ~ ESC[K                 ... no newline after the last row
//! ESC[{row};{col}H        cursor, 1-indexed
//! ESC[?25h                show cursor
//! ```
//!
//! Building a frame is pure: same viewport, cursor and banner, same bytes.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::error::TerminalError;
use crate::core::cursor::CursorState;
use crate::core::state::Viewport;

/// `ESC[H`. Written literally since `MoveTo(0, 0)` spells it `ESC[1;1H`.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Build one full frame.
pub fn draw_frame(
    viewport: &Viewport,
    cursor: &CursorState,
    banner: &str,
) -> io::Result<Vec<u8>> {
    // Roughly: one tilde, one clear-line and one CRLF per row, plus the banner
    let mut frame = Vec::with_capacity(viewport.rows() as usize * 6 + banner.len() + 32);

    queue!(frame, Hide)?;
    frame.extend_from_slice(CURSOR_HOME);
    draw_rows(&mut frame, viewport, banner)?;
    queue!(frame, MoveTo(cursor.col, cursor.row), Show)?;

    Ok(frame)
}

fn draw_rows(frame: &mut Vec<u8>, viewport: &Viewport, banner: &str) -> io::Result<()> {
    for y in 0..viewport.rows() {
        if y == viewport.banner_row() {
            draw_banner(frame, banner, viewport.cols());
        } else {
            frame.push(b'~');
        }

        queue!(frame, Clear(ClearType::UntilNewLine))?;
        if y < viewport.rows() - 1 {
            frame.extend_from_slice(b"\r\n");
        }
    }
    Ok(())
}

/// Centered banner, truncated to the width, with the row's tilde in front.
fn draw_banner(frame: &mut Vec<u8>, banner: &str, cols: u16) {
    let cols = cols as usize;
    let text = &banner.as_bytes()[..banner.len().min(cols)];

    let mut padding = (cols - text.len()) / 2;
    if padding > 0 {
        frame.push(b'~');
        padding -= 1;
    }
    frame.extend(std::iter::repeat_n(b' ', padding));
    frame.extend_from_slice(text);
}

/// Hand a finished frame to the terminal.
pub fn flush_frame<W: Write>(out: &mut W, frame: &[u8]) -> Result<(), TerminalError> {
    out.write_all(frame).map_err(TerminalError::Write)?;
    out.flush().map_err(TerminalError::Write)
}

/// `ESC[2J ESC[H` in one write. Used on quit and before fatal diagnostics.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    let mut bytes = Vec::with_capacity(8);
    queue!(bytes, Clear(ClearType::All))?;
    bytes.extend_from_slice(CURSOR_HOME);
    out.write_all(&bytes)?;
    out.flush()
}

/// Unbuffered standard output.
///
/// `std::io::Stdout` is line buffered and would split a frame at every
/// newline; this goes straight to the file descriptor.
pub struct TerminalOutput;

impl Write for TerminalOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: `buf` is valid for `buf.len()` bytes.
        let n = unsafe {
            libc::write(
                libc::STDOUT_FILENO,
                buf.as_ptr().cast::<libc::c_void>(),
                buf.len(),
            )
        };
        if n < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(n as usize)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
