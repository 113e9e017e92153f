//! Wires N pipeline stages together, mixing builtins and externals.
//!
//! The shell is synchronous and single-threaded, so stages are run
//! sequentially with a full in-memory buffer handed from one stage's
//! stdout to the next one's stdin — acceptable because no stage here is a
//! long-running producer. Per-stage file redirections always take
//! precedence over pipeline wiring for their descriptor: a stage with its
//! own stdout redirection writes to that file instead of feeding the next
//! stage, which then sees empty input.

use std::fs::OpenOptions;
use std::io::{self, Cursor, Write};

use crate::builtins;
use crate::planner::{Pipeline, RedirMode, Redirection, Stage, Stream};
use crate::runner::{self, StreamSink, StreamSource};
use crate::shell_state::ShellState;

fn open_redirection(r: &Redirection) -> io::Result<std::fs::File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(r.mode == RedirMode::Truncate)
        .append(r.mode == RedirMode::Append)
        .open(&r.path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", r.path.display())))
}

/// Runs every stage of `pipeline` to completion before returning.
pub fn run(
    pipeline: &Pipeline,
    state: &mut ShellState,
    term_stdout: &mut dyn Write,
    term_stderr: &mut dyn Write,
) -> io::Result<()> {
    let last = pipeline.stages.len() - 1;
    let mut carried = Vec::new();

    for (i, stage) in pipeline.stages.iter().enumerate() {
        let is_first = i == 0;
        let is_last = i == last;
        carried = run_stage(stage, carried, is_first, is_last, state, term_stdout, term_stderr)?;
    }
    Ok(())
}

fn run_stage(
    stage: &Stage,
    input: Vec<u8>,
    is_first: bool,
    is_last: bool,
    state: &mut ShellState,
    term_stdout: &mut dyn Write,
    term_stderr: &mut dyn Write,
) -> io::Result<Vec<u8>> {
    let name = stage.argv[0].to_lowercase();

    if let Some(handler) = builtins::lookup(&name) {
        run_builtin_stage(handler, stage, input, is_last, state, term_stdout, term_stderr)
    } else {
        let source = if is_first {
            StreamSource::Inherit
        } else {
            StreamSource::Piped(input)
        };
        let sink = if is_last { StreamSink::Inherit } else { StreamSink::Captured };
        let output = runner::run(&stage.argv, &stage.redirections, source, sink, term_stderr)?;
        Ok(output.stdout)
    }
}

fn run_builtin_stage(
    handler: crate::builtins::Handler,
    stage: &Stage,
    input: Vec<u8>,
    is_last: bool,
    state: &mut ShellState,
    term_stdout: &mut dyn Write,
    term_stderr: &mut dyn Write,
) -> io::Result<Vec<u8>> {
    let mut stdin = Cursor::new(input);

    let mut out_file = stage.redirections.get(&Stream::Stdout).map(open_redirection).transpose()?;
    let mut err_file = stage.redirections.get(&Stream::Stderr).map(open_redirection).transpose()?;
    let mut out_buf = Vec::new();

    {
        let stdout: &mut dyn Write = if let Some(f) = out_file.as_mut() {
            f
        } else if is_last {
            term_stdout
        } else {
            &mut out_buf
        };
        let stderr: &mut dyn Write = if let Some(f) = err_file.as_mut() { f } else { term_stderr };

        handler(&stage.argv[1..], &mut stdin, stdout, stderr, state)?;
    }

    Ok(if out_file.is_some() || is_last { Vec::new() } else { out_buf })
}
