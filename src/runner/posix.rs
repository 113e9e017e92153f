//! Unix argv[0] override: compose `exec -a <name> <path> <args...>` and
//! launch it through `/bin/sh -c`, the same `SHELL = ["sh", "-c"]`
//! indirection the process-plumbing layer this shell is built on already
//! uses for its own `Exec::shell`.

use std::path::Path;
use std::process::Command;

/// Wraps `s` in single quotes, escaping any embedded single quote as
/// `'"'"'` (close the quote, emit a literal quote via double quotes,
/// reopen the quote).
fn single_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            out.push_str("'\"'\"'");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}

pub fn build_command(name: &str, path: &Path, args: &[String]) -> Command {
    let mut script = String::from("exec -a ");
    script.push_str(&single_quote(name));
    script.push(' ');
    script.push_str(&single_quote(&path.to_string_lossy()));
    for arg in args {
        script.push(' ');
        script.push_str(&single_quote(arg));
    }

    let mut command = Command::new("/bin/sh");
    command.arg("-c").arg(script);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_embedded_single_quotes() {
        assert_eq!(single_quote("it's"), r#"'it'"'"'s'"#);
    }

    #[test]
    fn plain_arg_is_just_quoted() {
        assert_eq!(single_quote("hello"), "'hello'");
    }
}
