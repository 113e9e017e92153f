//! Maps a command name to the first matching absolute executable path.
//!
//! `PATH` is read from the environment fresh on every call — never
//! cached — so `cd`/`export`-style mutation of the environment during a
//! session is picked up immediately.

use std::env;
use std::path::PathBuf;

#[cfg(unix)]
mod posix;
#[cfg(unix)]
use posix as os;

#[cfg(windows)]
mod win32;
#[cfg(windows)]
use win32 as os;

/// Resolves `name` against `PATH`, returning the canonicalized absolute
/// path of the first accepted candidate, or `None`.
pub fn resolve(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    resolve_in(name, path_var.to_str()?)
}

/// Same as [`resolve`] but takes an explicit `PATH`-style string, for
/// testing without mutating the process environment.
pub fn resolve_in(name: &str, path_var: &str) -> Option<PathBuf> {
    for dir in path_var.split(os::SEPARATOR) {
        if dir.is_empty() {
            continue;
        }
        let dir = PathBuf::from(dir);
        if !dir.is_dir() {
            continue;
        }
        if let Some(found) = os::find_in_dir(&dir, name) {
            return found.canonicalize().ok().or(Some(found));
        }
    }
    None
}

/// Every executable filename in `PATH` whose name starts with `prefix`,
/// used by the line editor's tab completion. Names are reported the way
/// the user would type them: with extension stripped on Windows, as-is
/// on Unix.
pub fn executables_with_prefix(prefix: &str) -> Vec<String> {
    let Some(path_var) = env::var_os("PATH") else {
        return Vec::new();
    };
    let Some(path_var) = path_var.to_str() else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for dir in path_var.split(os::SEPARATOR) {
        if dir.is_empty() {
            continue;
        }
        let Ok(entries) = std::fs::read_dir(dir) else {
            continue;
        };
        for entry in entries.flatten() {
            if let Some(name) = os::completion_name(&entry) {
                if name.starts_with(prefix) {
                    names.push(name);
                }
            }
        }
    }
    names
}
