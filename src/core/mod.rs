//! # Core Logic
//!
//! Pad's terminal-independent logic. Nothing here touches a file
//! descriptor: keys come in as values, cursor moves come out as state.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • LogicalKey (input)   │
//!                    │  • Editor (state)       │
//!                    │  • update() (dispatch)  │
//!                    │                         │
//!                    │  No I/O. Pure.          │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (termios)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`key`]: The `LogicalKey` enum — one decoded keypress
//! - [`state`]: `Viewport` and the `Editor` context
//! - [`cursor`]: `CursorState`, clamped to the viewport
//! - [`action`]: `update()` — key dispatch
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod cursor;
pub mod key;
pub mod state;
