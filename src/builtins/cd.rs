use std::io::{self, Read, Write};

use crate::shell_state::ShellState;

pub fn run(
    argv: &[String],
    _stdin: &mut dyn Read,
    _stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    _state: &mut ShellState,
) -> io::Result<()> {
    // Zero or multiple arguments: join with single spaces to form the path.
    let joined = argv.join(" ");
    let path = if joined == "~" {
        std::env::var("HOME").unwrap_or(joined)
    } else {
        joined
    };

    if std::env::set_current_dir(&path).is_err() {
        writeln!(stderr, "cd: {path}: No such file or directory")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_reports_error_and_leaves_cwd() {
        let before = std::env::current_dir().unwrap();
        let mut err = Vec::new();
        let mut state = ShellState::new();
        run(
            &["/no/such/directory/xyz".into()],
            &mut io::empty(),
            &mut io::sink(),
            &mut err,
            &mut state,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "cd: /no/such/directory/xyz: No such file or directory\n"
        );
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
