use std::io::{self, Read, Write};
use std::path::Path;

use crate::shell_state::ShellState;

pub fn run(
    argv: &[String],
    _stdin: &mut dyn Read,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
    state: &mut ShellState,
) -> io::Result<()> {
    match argv {
        [] => list(state, stdout, None),
        [n] if n.parse::<usize>().is_ok_and(|n| n > 0) => {
            list(state, stdout, Some(n.parse().unwrap()))
        }
        [flag, file] if flag == "-r" => {
            if let Err(e) = state.history.load(Path::new(file)) {
                let reason = if e.kind() == io::ErrorKind::NotFound {
                    "No such file or directory".to_string()
                } else {
                    e.to_string()
                };
                writeln!(stderr, "history: {file}: {reason}")?;
            }
            Ok(())
        }
        [flag, file] if flag == "-w" => {
            if let Err(e) = state.history.save(Path::new(file)) {
                writeln!(stderr, "history: {file}: {e}")?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn list(state: &ShellState, stdout: &mut dyn Write, last_n: Option<usize>) -> io::Result<()> {
    let total = state.history.len();
    let start = match last_n {
        Some(n) => total.saturating_sub(n),
        None => 0,
    };
    for (i, entry) in state.history.iter().enumerate().skip(start) {
        writeln!(stdout, "{:>5}  {}", i + 1, entry)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_entries_with_padded_index() {
        let mut state = ShellState::new();
        state.history.push("echo one".into());
        state.history.push("echo two".into());
        let mut out = Vec::new();
        list(&state, &mut out, None).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "    1  echo one\n    2  echo two\n"
        );
    }

    #[test]
    fn zero_is_not_a_valid_count_and_is_ignored() {
        let mut state = ShellState::new();
        state.history.push("echo one".into());
        let mut out = Vec::new();
        run(&["0".into()], &mut io::empty(), &mut out, &mut io::sink(), &mut state).unwrap();
        assert_eq!(out, Vec::new());
    }

    #[test]
    fn last_n_preserves_absolute_indices() {
        let mut state = ShellState::new();
        for i in 1..=5 {
            state.history.push(format!("cmd{i}"));
        }
        let mut out = Vec::new();
        list(&state, &mut out, Some(2)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "    4  cmd4\n    5  cmd5\n");
    }

    #[test]
    fn dash_r_missing_file_reports_no_such_file() {
        let mut state = ShellState::new();
        let mut err = Vec::new();
        run(
            &["-r".into(), "/no/such/history-file-xyz".into()],
            &mut io::empty(),
            &mut io::sink(),
            &mut err,
            &mut state,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "history: /no/such/history-file-xyz: No such file or directory\n"
        );
    }

    #[test]
    fn dash_w_then_dash_r_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist");
        let path_str = path.to_str().unwrap().to_string();

        let mut writer_state = ShellState::new();
        writer_state.history.push("echo one".into());
        writer_state.history.push("echo two".into());
        run(
            &["-w".into(), path_str.clone()],
            &mut io::empty(),
            &mut io::sink(),
            &mut io::sink(),
            &mut writer_state,
        )
        .unwrap();

        let mut reader_state = ShellState::new();
        run(
            &["-r".into(), path_str],
            &mut io::empty(),
            &mut io::sink(),
            &mut io::sink(),
            &mut reader_state,
        )
        .unwrap();
        assert_eq!(reader_state.history.len(), 2);
        assert_eq!(reader_state.history.get(1), Some("echo one"));
    }
}
