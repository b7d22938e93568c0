//! # Editor State
//!
//! Everything the event loop needs, in one place and passed by reference.
//!
//! ```text
//! Editor
//! ├── viewport: Viewport     // terminal size, fixed after startup
//! ├── cursor: CursorState    // clamped (row, col)
//! └── banner: String         // text centered on the welcome row
//! ```
//!
//! State changes only happen through `update(editor, key)` in action.rs.

use super::cursor::CursorState;

/// Visible terminal area. Both dimensions are non-zero; the fields are
/// private so `new` is the only way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    rows: u16,
    cols: u16,
}

impl Viewport {
    /// Returns `None` for a degenerate size, which no cursor could fit in.
    pub fn new(rows: u16, cols: u16) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            Some(Self { rows, cols })
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Row that carries the banner.
    pub fn banner_row(&self) -> u16 {
        self.rows / 3
    }
}

pub struct Editor {
    pub viewport: Viewport,
    pub cursor: CursorState,
    pub banner: String,
}

impl Editor {
    pub fn new(viewport: Viewport, banner: String) -> Self {
        Self {
            viewport,
            cursor: CursorState::new(),
            banner,
        }
    }
}
