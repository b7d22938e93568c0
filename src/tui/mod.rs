//! # TUI Adapter
//!
//! The terminal-specific layer. Puts the terminal in raw mode, decodes input
//! bytes into `LogicalKey`s, and renders frames.
//!
//! This is the only module that touches file descriptors or termios.
//!
//! ## Loop
//!
//! Strictly sequential: draw a frame, block for one key, react. The read in
//! `KeyDecoder` is the only place the process waits.
//!
//! ## Terminal Restoration
//!
//! `RawMode` is held for the whole session and restores the original
//! attributes when dropped, whichever way `run` exits. A panic hook restores
//! them before the panic message is printed.

pub mod echo;
pub mod error;
pub mod input;
pub mod raw_mode;
pub mod ui;
pub mod window;

use std::io::Write;

use log::{debug, info};

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Editor;
use crate::tui::error::TerminalError;
use crate::tui::input::{ByteSource, KeyDecoder, StdinBytes};
use crate::tui::raw_mode::{RawMode, StdinTerminal};
use crate::tui::ui::TerminalOutput;

pub fn run(config: &ResolvedConfig) -> Result<(), TerminalError> {
    let mut raw_mode = RawMode::enable(StdinTerminal, config.read_timeout_ds)?;
    raw_mode.install_panic_hook();

    let viewport = window::query_viewport()?;
    let mut editor = Editor::new(viewport, config.banner.clone());
    let mut decoder = KeyDecoder::new(StdinBytes);

    event_loop(&mut editor, &mut decoder, &mut TerminalOutput)
}

/// Raw mode without the screen: print every key as it is decoded.
pub fn run_key_echo(config: &ResolvedConfig) -> Result<(), TerminalError> {
    let mut raw_mode = RawMode::enable(StdinTerminal, config.read_timeout_ds)?;
    raw_mode.install_panic_hook();

    info!("Key echo mode, press q to exit");
    echo::echo_loop(&mut KeyDecoder::new(StdinBytes), &mut TerminalOutput)
}

/// Render, read one key, react, until Ctrl+Q.
pub fn event_loop<S: ByteSource, W: Write>(
    editor: &mut Editor,
    decoder: &mut KeyDecoder<S>,
    out: &mut W,
) -> Result<(), TerminalError> {
    loop {
        let frame = ui::draw_frame(&editor.viewport, &editor.cursor, &editor.banner)
            .map_err(TerminalError::Write)?;
        ui::flush_frame(out, &frame)?;

        let key = decoder.read_key()?;
        debug!("Key: {:?}", key);

        if update(editor, key) == Effect::Quit {
            ui::clear_screen(out).map_err(TerminalError::Write)?;
            info!(
                "Quit at cursor ({}, {})",
                editor.cursor.row, editor.cursor.col
            );
            return Ok(());
        }
    }
}
