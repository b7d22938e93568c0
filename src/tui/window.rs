//! One-time terminal size query.

use std::io;

use log::info;

use super::error::TerminalError;
use crate::core::state::Viewport;

/// Ask the terminal for its size. An error or a zero dimension means the
/// terminal is unusable.
pub fn query_viewport() -> Result<Viewport, TerminalError> {
    viewport_from(crossterm::terminal::size())
}

/// Validate a `(cols, rows)` answer from the size query.
pub fn viewport_from(size: io::Result<(u16, u16)>) -> Result<Viewport, TerminalError> {
    let (cols, rows) = size.map_err(TerminalError::WindowSize)?;
    let viewport =
        Viewport::new(rows, cols).ok_or(TerminalError::DegenerateWindow { rows, cols })?;
    info!("Viewport {}x{}", viewport.rows(), viewport.cols());
    Ok(viewport)
}
