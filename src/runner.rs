//! Spawns a single external command: resolves it through the path
//! resolver, then launches it with an explicit argv and the stage's
//! redirections applied.
//!
//! The two platforms need genuinely different plumbing to get
//! `argv[0]` independent of the on-disk executable path: Unix does it by
//! shelling out to `exec -a`, Windows has no equivalent and instead passes
//! arguments directly and captures redirected streams in-process.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::process::Stdio;

use crate::planner::{RedirMode, Redirection, Stream};
use crate::path_resolver;

#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod win32;

#[cfg(unix)]
use posix as os;
#[cfg(windows)]
use win32 as os;

/// What an external stage's stdin/stdout should be wired to, beyond its
/// own file redirections: either inherited from the terminal, or a byte
/// buffer handed over by a neighboring pipeline stage.
pub enum StreamSource {
    Inherit,
    Piped(Vec<u8>),
}

pub enum StreamSink {
    Inherit,
    Captured,
}

/// Result of running one external stage with a captured stream requested.
pub struct Output {
    pub stdout: Vec<u8>,
}

fn open_redirection(r: &Redirection) -> io::Result<std::fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(r.mode == RedirMode::Truncate)
        .append(r.mode == RedirMode::Append)
        .open(&r.path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", r.path.display())))
}

/// Runs `argv` (`argv[0]` is the command name as typed, used for
/// process-title purposes; the executable is `argv[0]` resolved through
/// the path resolver) to completion.
///
/// `redirections` take precedence over `stdin_source`/`stdout_sink` for
/// their respective descriptor. Returns the captured stdout bytes when
/// `stdout_sink` is `Captured` and no stdout redirection overrides it.
pub fn run(
    argv: &[String],
    redirections: &HashMap<Stream, Redirection>,
    stdin_source: StreamSource,
    stdout_sink: StreamSink,
    stderr: &mut dyn Write,
) -> io::Result<Output> {
    let name = &argv[0];
    let Some(path) = path_resolver::resolve(name) else {
        writeln!(stderr, "{name}: command not found")?;
        return Ok(Output { stdout: Vec::new() });
    };

    let stdout_file = redirections.get(&Stream::Stdout).map(open_redirection).transpose()?;
    let stderr_file = redirections.get(&Stream::Stderr).map(open_redirection).transpose()?;

    let want_capture = stdout_file.is_none() && matches!(stdout_sink, StreamSink::Captured);

    let mut command = os::build_command(name, &path, &argv[1..]);

    command.stdin(match &stdin_source {
        StreamSource::Inherit => Stdio::inherit(),
        StreamSource::Piped(_) => Stdio::piped(),
    });
    command.stdout(if let Some(f) = stdout_file.as_ref() {
        Stdio::from(f.try_clone()?)
    } else if want_capture {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    command.stderr(if let Some(f) = stderr_file.as_ref() {
        Stdio::from(f.try_clone()?)
    } else {
        Stdio::inherit()
    });

    let mut child = match command.spawn() {
        Ok(c) => c,
        Err(e) => {
            writeln!(stderr, "Error executing {name}: {e}")?;
            return Ok(Output { stdout: Vec::new() });
        }
    };

    if let StreamSource::Piped(input) = stdin_source {
        if let Some(mut stdin) = child.stdin.take() {
            // Best-effort: a command that doesn't read stdin (e.g. `wc -l`
            // past EOF on a closed pipe) should not fail the whole pipeline.
            let _ = stdin.write_all(&input);
        }
    }

    let result = child.wait_with_output();
    match result {
        Ok(output) => Ok(Output { stdout: output.stdout }),
        Err(e) => {
            writeln!(stderr, "Error executing {name}: {e}")?;
            Ok(Output { stdout: Vec::new() })
        }
    }
}
