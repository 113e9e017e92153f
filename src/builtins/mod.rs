//! The fixed builtin command table.
//!
//! Handlers never touch a global stdout/stderr: the REPL (or the pipeline
//! engine, for a builtin mid-pipeline) passes in explicit sinks, which may
//! be the real terminal or a file/buffer opened for redirection. This is
//! the re-architecture spec.md's design notes recommend in place of
//! mutable global streams.

mod cd;
mod echo;
mod exit;
mod history_cmd;
mod pwd;
mod type_cmd;

use std::io::{self, Read, Write};

use crate::path_resolver;
use crate::shell_state::ShellState;

/// Names recognized as builtins, matched case-insensitively for dispatch.
pub const BUILTIN_NAMES: &[&str] = &["echo", "exit", "quit", "type", "pwd", "cd", "history"];

/// `type` reports builtin-ness with a case-sensitive match against this set.
pub fn is_builtin_exact(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

pub type Handler = fn(&[String], &mut dyn Read, &mut dyn Write, &mut dyn Write, &mut ShellState) -> io::Result<()>;

/// Looks up the handler for `name`, matched case-insensitively.
pub fn lookup(name: &str) -> Option<Handler> {
    let lower = name.to_lowercase();
    match lower.as_str() {
        "echo" => Some(echo::run),
        "exit" | "quit" => Some(exit::run),
        "type" => Some(type_cmd::run),
        "pwd" => Some(pwd::run),
        "cd" => Some(cd::run),
        "history" => Some(history_cmd::run),
        _ => None,
    }
}

/// Builtin names eligible for tab completion (a small subset of the full
/// registry, per spec.md's line-editor section).
pub const COMPLETION_NAMES: &[&str] = &["echo", "exit"];

/// Completion candidates starting with `prefix`: the union of
/// [`COMPLETION_NAMES`] and every executable on `PATH`.
pub fn completions(prefix: &str) -> Vec<String> {
    let mut names: Vec<String> = COMPLETION_NAMES
        .iter()
        .filter(|n| n.starts_with(prefix))
        .map(|s| s.to_string())
        .collect();
    names.extend(path_resolver::executables_with_prefix(prefix));
    names.sort();
    names.dedup();
    names
}
