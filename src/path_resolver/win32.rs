//! Windows executable acceptance rule: PATHEXT iteration when `name` has
//! no extension of its own; existence (and not a directory) is the only
//! check, since file-level execute permission isn't a meaningful concept
//! on Windows.

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

pub const SEPARATOR: char = ';';

const DEFAULT_PATHEXT: &str = ".EXE;.BAT;.CMD;.COM";

fn pathext() -> Vec<String> {
    std::env::var("PATHEXT")
        .unwrap_or_else(|_| DEFAULT_PATHEXT.to_string())
        .split(';')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

fn has_extension(name: &str) -> bool {
    Path::new(name).extension().is_some()
}

fn accept(candidate: &Path) -> Option<PathBuf> {
    let meta = candidate.metadata().ok()?;
    if meta.is_dir() {
        None
    } else {
        Some(candidate.to_path_buf())
    }
}

pub fn find_in_dir(dir: &Path, name: &str) -> Option<PathBuf> {
    if has_extension(name) {
        return accept(&dir.join(name));
    }
    for ext in pathext() {
        if let Some(found) = accept(&dir.join(format!("{name}{ext}"))) {
            return Some(found);
        }
    }
    None
}

pub fn completion_name(entry: &DirEntry) -> Option<String> {
    let meta = entry.metadata().ok()?;
    if meta.is_dir() {
        return None;
    }
    let path = entry.path();
    let stem = path.file_stem()?.to_str()?.to_string();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_uppercase()))
        .unwrap_or_default();
    if pathext().iter().any(|known| known.eq_ignore_ascii_case(&ext)) {
        Some(stem)
    } else {
        None
    }
}
