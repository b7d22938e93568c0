//! Raw input mode on the controlling terminal.
//!
//! `RawMode` is a guard: creating it snapshots the terminal attributes and
//! switches to raw mode, dropping it puts the snapshot back. Early returns,
//! `?` and unwinding all go through `Drop`, so the terminal is never left raw.

use std::io::{self, Write};
use std::mem::MaybeUninit;
use std::panic::PanicHookInfo;
use std::sync::Arc;

use log::{info, warn};

use super::error::TerminalError;
use super::ui;

pub type Termios = libc::termios;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Read and write access to a terminal's attribute set.
pub trait TerminalDevice {
    fn get_attributes(&self) -> io::Result<Termios>;
    fn set_attributes(&self, attrs: &Termios) -> io::Result<()>;
}

/// The terminal attached to standard input.
pub struct StdinTerminal;

impl TerminalDevice for StdinTerminal {
    fn get_attributes(&self) -> io::Result<Termios> {
        let mut attrs = MaybeUninit::<Termios>::uninit();
        // SAFETY: tcgetattr fully initializes `attrs` when it returns 0.
        let ret = unsafe { libc::tcgetattr(libc::STDIN_FILENO, attrs.as_mut_ptr()) };
        if ret == -1 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: checked for success above.
        Ok(unsafe { attrs.assume_init() })
    }

    fn set_attributes(&self, attrs: &Termios) -> io::Result<()> {
        // TCSAFLUSH drops any input typed before the switch
        // SAFETY: `attrs` is a valid, initialized termios.
        let ret = unsafe { libc::tcsetattr(libc::STDIN_FILENO, libc::TCSAFLUSH, attrs) };
        if ret == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}

/// Derive the raw attribute set from the original one.
///
/// Input: no CR→NL translation, no XON/XOFF, no parity check, no 8th-bit
/// stripping, no SIGINT on break. Output: no post-processing. Local: no echo,
/// no canonical line buffering, no IEXTEN, no signal characters. 8-bit chars.
///
/// `read()` returns after at most `read_timeout_ds` tenths of a second even
/// when no byte arrived (`VMIN = 0`).
pub fn raw_attributes(original: &Termios, read_timeout_ds: u8) -> Termios {
    let mut raw = *original;
    raw.c_iflag &= !(libc::BRKINT | libc::ICRNL | libc::INPCK | libc::ISTRIP | libc::IXON);
    raw.c_oflag &= !libc::OPOST;
    raw.c_cflag |= libc::CS8;
    raw.c_lflag &= !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG);
    raw.c_cc[libc::VMIN] = 0;
    raw.c_cc[libc::VTIME] = read_timeout_ds;
    raw
}

/// Put the snapshot back and clear the screen. Errors are ignored: this
/// runs on the way out of a panic.
pub fn restore_after_panic<D: TerminalDevice, W: Write>(
    device: &D,
    original: &Termios,
    out: &mut W,
) {
    let _ = device.set_attributes(original);
    let _ = ui::clear_screen(out);
}

pub struct RawMode<D: TerminalDevice> {
    device: D,
    original: Termios,
    active: bool,
    /// Hook that was current before ours; put back on drop.
    previous_hook: Option<Arc<PanicHook>>,
}

impl<D: TerminalDevice> RawMode<D> {
    /// Snapshot the current attributes, then switch the device to raw mode.
    pub fn enable(device: D, read_timeout_ds: u8) -> Result<Self, TerminalError> {
        let original = device
            .get_attributes()
            .map_err(TerminalError::GetAttributes)?;

        // From here on the guard owns the snapshot; a failed switch below
        // still restores it on drop.
        let guard = Self {
            device,
            original,
            active: true,
            previous_hook: None,
        };
        let raw = raw_attributes(&original, read_timeout_ds);
        guard
            .device
            .set_attributes(&raw)
            .map_err(TerminalError::SetAttributes)?;

        info!("Raw mode enabled (read timeout {}ds)", read_timeout_ds);
        Ok(guard)
    }

    /// Put the snapshot back. Calling it again is a no-op.
    pub fn disable(&mut self) -> Result<(), TerminalError> {
        if !self.active {
            return Ok(());
        }
        self.device
            .set_attributes(&self.original)
            .map_err(TerminalError::SetAttributes)?;
        self.active = false;
        info!("Raw mode disabled, terminal attributes restored");
        Ok(())
    }

    pub fn original(&self) -> &Termios {
        &self.original
    }

    /// Run `cleanup` ahead of the current panic hook for as long as this
    /// guard lives. Dropping the guard reinstates the previous hook.
    pub fn install_panic_hook_with<F>(&mut self, cleanup: F)
    where
        F: Fn() + Sync + Send + 'static,
    {
        self.remove_panic_hook();
        let previous: Arc<PanicHook> = Arc::new(std::panic::take_hook());
        let chained = Arc::clone(&previous);
        std::panic::set_hook(Box::new(move |panic| {
            cleanup();
            (**chained)(panic);
        }));
        self.previous_hook = Some(previous);
    }

    fn remove_panic_hook(&mut self) {
        let Some(previous) = self.previous_hook.take() else {
            return;
        };
        // set_hook itself panics when called during unwinding
        if std::thread::panicking() {
            return;
        }
        std::panic::set_hook(Box::new(move |panic| (**previous)(panic)));
    }
}

impl RawMode<StdinTerminal> {
    /// Restore the terminal before the default panic message is printed.
    ///
    /// The hook keeps its own copy of the snapshot, so it works no matter
    /// where the panic happens.
    pub fn install_panic_hook(&mut self) {
        let original = self.original;
        self.install_panic_hook_with(move || {
            restore_after_panic(&StdinTerminal, &original, &mut io::stdout());
        });
    }
}

impl<D: TerminalDevice> Drop for RawMode<D> {
    fn drop(&mut self) {
        self.remove_panic_hook();
        if let Err(e) = self.disable() {
            warn!("Failed to restore terminal attributes: {}", e);
        }
    }
}
