//! Unix executable acceptance rule: exists, not a directory, and any of
//! user/group/other execute bits is set.

use std::fs::DirEntry;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const SEPARATOR: char = ':';

const EXEC_BITS: u32 = 0o111;

pub fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    let candidate = dir.join(name);
    let meta = candidate.metadata().ok()?;
    if meta.is_dir() {
        return None;
    }
    if meta.permissions().mode() & EXEC_BITS != 0 {
        Some(candidate)
    } else {
        None
    }
}

pub fn completion_name(entry: &DirEntry) -> Option<String> {
    let meta = entry.metadata().ok()?;
    if meta.is_dir() || meta.permissions().mode() & EXEC_BITS == 0 {
        return None;
    }
    entry.file_name().into_string().ok()
}
