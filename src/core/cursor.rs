//! Cursor position tracking inside the viewport.
//!
//! `CursorState` is clamped, never wrapped: every move that would leave the
//! viewport is dropped, so `row < rows` and `col < cols` hold after any call.

use super::key::LogicalKey;
use super::state::Viewport;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorState {
    pub row: u16,
    pub col: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the cursor for a navigation key. Non-navigation keys are ignored.
    pub fn apply(&mut self, key: LogicalKey, viewport: &Viewport) {
        match key {
            LogicalKey::ArrowUp => self.step_up(),
            LogicalKey::ArrowDown => self.step_down(viewport),
            LogicalKey::ArrowLeft => {
                if self.col > 0 {
                    self.col -= 1;
                }
            }
            LogicalKey::ArrowRight => {
                if self.col < viewport.cols() - 1 {
                    self.col += 1;
                }
            }
            LogicalKey::Home => self.col = 0,
            LogicalKey::End => self.col = viewport.cols() - 1,
            // A page is `rows` single steps, clamped each time like held arrows
            LogicalKey::PageUp => {
                for _ in 0..viewport.rows() {
                    self.step_up();
                }
            }
            LogicalKey::PageDown => {
                for _ in 0..viewport.rows() {
                    self.step_down(viewport);
                }
            }
            _ => {}
        }
    }

    fn step_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
        }
    }

    fn step_down(&mut self, viewport: &Viewport) {
        if self.row < viewport.rows() - 1 {
            self.row += 1;
        }
    }
}
