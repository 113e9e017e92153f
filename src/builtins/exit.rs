use std::io::{self, Read, Write};

use crate::shell_state::ShellState;

pub fn run(
    _argv: &[String],
    _stdin: &mut dyn Read,
    _stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    state: &mut ShellState,
) -> io::Result<()> {
    state.exit = true;
    Ok(())
}
