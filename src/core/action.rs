//! # Key Dispatch
//!
//! Every decoded key goes through `update()`. Navigation keys move the
//! cursor, Ctrl+Q asks the caller to quit, everything else is ignored.
//!
//! ```text
//! Editor + LogicalKey  →  update()  →  Effect
//! ```
//!
//! No I/O here. The event loop performs whatever the returned `Effect` asks for.

use log::debug;

use super::key::LogicalKey;
use super::state::Editor;

/// The key that ends the session.
pub const QUIT_LETTER: u8 = b'q';

/// Side effect requested from the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(editor: &mut Editor, key: LogicalKey) -> Effect {
    if key.is_ctrl(QUIT_LETTER) {
        debug!("Quit requested");
        return Effect::Quit;
    }
    if key.is_navigation() {
        editor.cursor.apply(key, &editor.viewport);
    }
    Effect::None
}
