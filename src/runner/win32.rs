//! Windows has no `exec -a`; the resolved path is launched directly with
//! each argument as a distinct arg-vector entry. `name` (the typed,
//! possibly-unresolved form) is unused here — Windows has no concept of a
//! process-table name distinct from the launched executable.

use std::path::Path;
use std::process::Command;

pub fn build_command(_name: &str, path: &Path, args: &[String]) -> Command {
    let mut command = Command::new(path);
    command.args(args);
    command
}
