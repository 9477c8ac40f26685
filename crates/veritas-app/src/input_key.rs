//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! this crate never depends on crossterm.

/// Abstract input key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    Enter,
    Esc,
    Tab,
    Backspace,
}
