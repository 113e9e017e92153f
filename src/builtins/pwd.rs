use std::io::{self, Read, Write};

use crate::shell_state::ShellState;

pub fn run(
    _argv: &[String],
    _stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    _state: &mut ShellState,
) -> io::Result<()> {
    let cwd = std::env::current_dir()?;
    writeln!(stdout, "{}", cwd.display())
}
