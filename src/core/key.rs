//! # Logical Keys
//!
//! One decoded keypress. Navigation keys get their own variants so an arrow
//! can never be mistaken for a literal byte that happens to share its value.

/// Mask that maps a letter onto the byte the terminal sends for Ctrl+letter.
pub const CTRL_MASK: u8 = 0x1f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    /// Any byte at or above 0x20 (including DEL).
    Printable(u8),
    /// A byte below 0x20, stored as received (`b'q' & 0x1f` for Ctrl+Q).
    ControlCombo(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,
    Delete,
    EscapeAlone,
}

impl LogicalKey {
    /// Classifies a single non-escape byte.
    pub fn from_byte(byte: u8) -> Self {
        if byte < 0x20 {
            LogicalKey::ControlCombo(byte)
        } else {
            LogicalKey::Printable(byte)
        }
    }

    /// The key produced by holding Ctrl and pressing `letter`.
    pub fn ctrl(letter: u8) -> Self {
        LogicalKey::ControlCombo(letter & CTRL_MASK)
    }

    /// Returns true for Ctrl+`letter`, ignoring letter case.
    pub fn is_ctrl(&self, letter: u8) -> bool {
        matches!(self, LogicalKey::ControlCombo(b) if *b == letter & CTRL_MASK)
    }

    /// Keys that move the cursor.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            LogicalKey::ArrowUp
                | LogicalKey::ArrowDown
                | LogicalKey::ArrowLeft
                | LogicalKey::ArrowRight
                | LogicalKey::Home
                | LogicalKey::End
                | LogicalKey::PageUp
                | LogicalKey::PageDown
        )
    }
}
