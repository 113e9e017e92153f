use std::io::{self, Read, Write};

use crate::shell_state::ShellState;

pub fn run(
    argv: &[String],
    _stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    _stderr: &mut dyn Write,
    _state: &mut ShellState,
) -> io::Result<()> {
    writeln!(stdout, "{}", argv.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_arguments_with_spaces() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut state = ShellState::new();
        run(
            &["hello".into(), "world".into()],
            &mut io::empty(),
            &mut out,
            &mut err,
            &mut state,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello world\n");
    }
}
