//! The mutable state owned by the REPL across the whole session.

use crate::history::History;

/// Current working directory is delegated to the host process (`cd` calls
/// `std::env::set_current_dir`); `PATH`/`PATHEXT`/`HOME` are read from the
/// environment on demand rather than cached here.
pub struct ShellState {
    pub history: History,
    pub exit: bool,
}

impl ShellState {
    pub fn new() -> ShellState {
        ShellState {
            history: History::new(),
            exit: false,
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
