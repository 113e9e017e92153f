use std::io::{self, Read, Write};

use crate::builtins::is_builtin_exact;
use crate::path_resolver;
use crate::shell_state::ShellState;

pub fn run(
    argv: &[String],
    _stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    _state: &mut ShellState,
) -> io::Result<()> {
    let Some(name) = argv.first() else {
        return Ok(());
    };

    if is_builtin_exact(name) {
        writeln!(stdout, "{name} is a shell builtin")
    } else if let Some(path) = path_resolver::resolve(name) {
        writeln!(stdout, "{name} is {}", path.display())
    } else {
        writeln!(stdout, "{name}: not found")
    }
}
