//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

use crate::core::state::{Editor, Viewport};
use crate::tui::input::ByteSource;
use crate::tui::raw_mode::{TerminalDevice, Termios};

/// Creates a test Editor with cursor at the origin.
pub fn test_editor(rows: u16, cols: u16) -> Editor {
    Editor::new(Viewport::new(rows, cols).unwrap(), "Test banner".to_string())
}

enum Step {
    Byte(u8),
    Timeout,
    Error,
}

/// A byte source that replays a script. Running out of script is a read
/// error, so a decoder under test can never hang.
pub struct ScriptedBytes {
    steps: VecDeque<Step>,
}

impl ScriptedBytes {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            steps: bytes.iter().copied().map(Step::Byte).collect(),
        }
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.steps.push_back(Step::Byte(byte));
    }

    /// The read window closes with no byte.
    pub fn push_timeout(&mut self) {
        self.steps.push_back(Step::Timeout);
    }

    pub fn push_error(&mut self) {
        self.steps.push_back(Step::Error);
    }

    pub fn is_drained(&self) -> bool {
        self.steps.is_empty()
    }
}

impl ByteSource for ScriptedBytes {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        match self.steps.pop_front() {
            Some(Step::Byte(byte)) => Ok(Some(byte)),
            Some(Step::Timeout) => Ok(None),
            Some(Step::Error) => Err(io::Error::from_raw_os_error(libc::EIO)),
            None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")),
        }
    }
}

/// Records every `write` call separately.
#[derive(Default)]
pub struct CountingWriter {
    pub bytes: Vec<u8>,
    pub writes: usize,
}

impl Write for CountingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes += 1;
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A typical cooked-mode attribute set.
pub fn cooked_termios() -> Termios {
    // SAFETY: termios is plain old data; all-zero is a valid value.
    let mut t: Termios = unsafe { std::mem::zeroed() };
    t.c_iflag = libc::BRKINT | libc::ICRNL | libc::IXON | libc::IXANY | libc::INPCK;
    t.c_oflag = libc::OPOST | libc::ONLCR;
    t.c_cflag = libc::CREAD | libc::CS7 | libc::PARENB;
    t.c_lflag = libc::ECHO | libc::ECHOE | libc::ICANON | libc::IEXTEN | libc::ISIG;
    t.c_cc[libc::VMIN] = 1;
    t.c_cc[libc::VTIME] = 0;
    t.c_cc[libc::VINTR] = 0x03;
    t
}

struct DeviceState {
    attrs: Termios,
    set_calls: usize,
    fail_get: bool,
    fail_set: bool,
}

/// In-memory terminal. Clones share the same attributes.
#[derive(Clone)]
pub struct FakeTerminal {
    state: Rc<RefCell<DeviceState>>,
}

impl FakeTerminal {
    pub fn new(attrs: Termios) -> Self {
        Self::with_failures(attrs, false, false)
    }

    pub fn failing_get() -> Self {
        Self::with_failures(cooked_termios(), true, false)
    }

    pub fn failing_set(attrs: Termios) -> Self {
        Self::with_failures(attrs, false, true)
    }

    fn with_failures(attrs: Termios, fail_get: bool, fail_set: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(DeviceState {
                attrs,
                set_calls: 0,
                fail_get,
                fail_set,
            })),
        }
    }

    pub fn current(&self) -> Termios {
        self.state.borrow().attrs
    }

    pub fn set_calls(&self) -> usize {
        self.state.borrow().set_calls
    }
}

impl TerminalDevice for FakeTerminal {
    fn get_attributes(&self) -> io::Result<Termios> {
        let state = self.state.borrow();
        if state.fail_get {
            return Err(io::Error::from_raw_os_error(libc::ENOTTY));
        }
        Ok(state.attrs)
    }

    fn set_attributes(&self, attrs: &Termios) -> io::Result<()> {
        let mut state = self.state.borrow_mut();
        state.set_calls += 1;
        if state.fail_set {
            return Err(io::Error::from_raw_os_error(libc::EIO));
        }
        state.attrs = *attrs;
        Ok(())
    }
}
