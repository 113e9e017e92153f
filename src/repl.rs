//! Top-level loop: print the prompt, read a line, lex/plan it, dispatch it.

use std::fs::OpenOptions;
use std::io::{self, Write};

use crate::builtins;
use crate::error::ShellError;
use crate::lexer::tokenize;
use crate::line_editor;
use crate::planner::{self, RedirMode, Redirection, Stage, Stream};
use crate::pipeline_engine;
use crate::runner::{self, StreamSink, StreamSource};
use crate::shell_state::ShellState;

pub fn run() {
    let mut state = ShellState::new();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    loop {
        let _ = write!(stdout, "$ ");
        let _ = stdout.flush();

        let line = match line_editor::read_line(&state.history) {
            Ok(Some(line)) => line,
            Ok(None) => {
                tracing::debug!("terminal EOF, ending session");
                break;
            }
            Err(e) => {
                tracing::warn!(error = %e, "terminal read failure, ending session");
                break;
            }
        };

        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            continue;
        }
        state.history.push(trimmed.to_string());

        let tokens = tokenize(trimmed);
        let pipeline = match planner::plan(tokens) {
            Ok(Some(p)) => p,
            Ok(None) => continue,
            Err(ShellError::EmptyPipelineStage) => {
                let _ = writeln!(stderr, "Empty pipeline stage");
                continue;
            }
            Err(e) => {
                let _ = writeln!(stderr, "{e}");
                continue;
            }
        };

        if pipeline.stages.len() >= 2 {
            if let Err(e) = pipeline_engine::run(&pipeline, &mut state, &mut stdout, &mut stderr) {
                tracing::warn!(error = %e, "pipeline execution failed");
                let _ = writeln!(stderr, "{e}");
            }
        } else {
            dispatch_single(&pipeline.stages[0], &mut state, &mut stdout, &mut stderr);
        }

        if state.exit {
            break;
        }
    }
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

/// Dispatches one non-pipeline stage through the builtin registry or the
/// external runner, applying its redirections.
///
/// For a builtin, this temporarily rebinds stdout/stderr to freshly opened
/// redirection files (truncate or append per the stage), runs the
/// handler, and unconditionally restores the real terminal streams on
/// every exit path — matching spec.md's design note recommendation by
/// passing explicit sink parameters instead of touching process globals.
fn dispatch_single(stage: &Stage, state: &mut ShellState, stdout: &mut io::Stdout, stderr: &mut io::Stderr) {
    let name = stage.argv[0].to_lowercase();

    if let Some(handler) = builtins::lookup(&name) {
        if let Err(e) = run_builtin_with_redirections(handler, stage, state, stdout, stderr) {
            tracing::warn!(error = %e, command = %name, "builtin failed");
            let _ = writeln!(stderr, "{e}");
        }
    } else if let Err(e) = run_external(stage, stderr) {
        tracing::warn!(error = %e, command = %name, "external command failed");
        let _ = writeln!(stderr, "{e}");
    }
}

fn run_builtin_with_redirections(
    handler: builtins::Handler,
    stage: &Stage,
    state: &mut ShellState,
    stdout: &mut io::Stdout,
    stderr: &mut io::Stderr,
) -> io::Result<()> {
    let mut out_file = stage
        .redirections
        .get(&Stream::Stdout)
        .map(open_redirection)
        .transpose()?;
    let mut err_file = stage
        .redirections
        .get(&Stream::Stderr)
        .map(open_redirection)
        .transpose()?;

    let out: &mut dyn Write = out_file.as_mut().map_or(stdout as &mut dyn Write, |f| f);
    let err: &mut dyn Write = err_file.as_mut().map_or(stderr as &mut dyn Write, |f| f);

    handler(&stage.argv[1..], &mut io::empty(), out, err, state)
}

fn run_external(stage: &Stage, stderr: &mut io::Stderr) -> io::Result<()> {
    runner::run(&stage.argv, &stage.redirections, StreamSource::Inherit, StreamSink::Inherit, stderr)?;
    Ok(())
}
