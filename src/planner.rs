//! Splits a token sequence into pipeline stages and per-stage redirections.
//!
//! The lexer never distinguishes operators from plain words; recognition
//! happens here, by exact string match against `|`, `>`, `>>`, `1>`, `1>>`,
//! `2>`, `2>>`.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ShellError;

/// Which standard stream a redirection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Whether a redirection target is truncated or appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirMode {
    Truncate,
    Append,
}

/// A single `{fd, path, mode}` redirection.
#[derive(Debug, Clone)]
pub struct Redirection {
    pub target: Stream,
    pub path: PathBuf,
    pub mode: RedirMode,
}

/// One command plus the redirections scoped to it.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    pub argv: Vec<String>,
    pub redirections: HashMap<Stream, Redirection>,
}

/// An ordered sequence of one or more stages, connected stdout-to-stdin.
#[derive(Debug, Clone)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

fn redir_operator(token: &str) -> Option<(Stream, RedirMode)> {
    match token {
        ">" | "1>" => Some((Stream::Stdout, RedirMode::Truncate)),
        ">>" | "1>>" => Some((Stream::Stdout, RedirMode::Append)),
        "2>" => Some((Stream::Stderr, RedirMode::Truncate)),
        "2>>" => Some((Stream::Stderr, RedirMode::Append)),
        _ => None,
    }
}

/// Builds a [`Pipeline`] from `tokens`.
///
/// Returns `Ok(None)` for the "nothing to run" case (every stage's argv
/// ended up empty after redirection extraction, or the whole line was
/// composed only of pipe tokens) — the caller should simply re-prompt.
/// A non-empty stage with an adjacent/leading/trailing `|` is a hard error.
pub fn plan(tokens: Vec<String>) -> Result<Option<Pipeline>, ShellError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut stage_tokens: Vec<Vec<String>> = vec![Vec::new()];
    for token in tokens {
        if token == "|" {
            stage_tokens.push(Vec::new());
        } else {
            stage_tokens.last_mut().unwrap().push(token);
        }
    }

    if stage_tokens.iter().any(|s| s.is_empty()) {
        return Err(ShellError::EmptyPipelineStage);
    }

    let mut stages = Vec::with_capacity(stage_tokens.len());
    for raw in stage_tokens {
        stages.push(extract_redirections(raw));
    }

    if stages.iter().any(|s| s.argv.is_empty()) {
        return Ok(None);
    }

    Ok(Some(Pipeline { stages }))
}

/// Scans `argv` left to right, pulling out redirection operator/operand
/// pairs. A redirection operator with no following token is silently
/// dropped. Repeated redirections to the same fd: last one wins.
fn extract_redirections(argv: Vec<String>) -> Stage {
    let mut out_argv = Vec::with_capacity(argv.len());
    let mut redirections = HashMap::new();

    let mut iter = argv.into_iter().peekable();
    while let Some(token) = iter.next() {
        if let Some((target, mode)) = redir_operator(&token) {
            if let Some(operand) = iter.next() {
                redirections.insert(
                    target,
                    Redirection {
                        target,
                        path: PathBuf::from(operand),
                        mode,
                    },
                );
            }
            // else: dangling operator, silently dropped.
        } else {
            out_argv.push(token);
        }
    }

    Stage {
        argv: out_argv,
        redirections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn plan_str(s: &str) -> Option<Pipeline> {
        plan(tokenize(s)).unwrap()
    }

    #[test]
    fn single_stage_no_redirection() {
        let p = plan_str("echo hi").unwrap();
        assert_eq!(p.stages.len(), 1);
        assert_eq!(p.stages[0].argv, vec!["echo", "hi"]);
        assert!(p.stages[0].redirections.is_empty());
    }

    #[test]
    fn pipeline_splits_on_pipe() {
        let p = plan_str("echo a b c | wc -w").unwrap();
        assert_eq!(p.stages.len(), 2);
        assert_eq!(p.stages[0].argv, vec!["echo", "a", "b", "c"]);
        assert_eq!(p.stages[1].argv, vec!["wc", "-w"]);
    }

    #[test]
    fn extracts_stdout_and_stderr_redirections() {
        let p = plan_str("cmd > out.txt 2>> err.txt").unwrap();
        let s = &p.stages[0];
        assert_eq!(s.argv, vec!["cmd"]);
        assert_eq!(s.redirections[&Stream::Stdout].mode, RedirMode::Truncate);
        assert_eq!(s.redirections[&Stream::Stdout].path, PathBuf::from("out.txt"));
        assert_eq!(s.redirections[&Stream::Stderr].mode, RedirMode::Append);
    }

    #[test]
    fn one_and_bare_redirect_equivalent() {
        let a = plan_str("cmd > a").unwrap();
        let b = plan_str("cmd 1> a").unwrap();
        assert_eq!(
            a.stages[0].redirections[&Stream::Stdout].path,
            b.stages[0].redirections[&Stream::Stdout].path
        );
    }

    #[test]
    fn repeated_redirection_last_wins() {
        let p = plan_str("cmd > a > b").unwrap();
        assert_eq!(p.stages[0].redirections[&Stream::Stdout].path, PathBuf::from("b"));
    }

    #[test]
    fn dangling_operator_is_dropped() {
        let p = plan_str("cmd >").unwrap();
        assert_eq!(p.stages[0].argv, vec!["cmd"]);
        assert!(p.stages[0].redirections.is_empty());
    }

    #[test]
    fn empty_stage_between_pipes_is_an_error() {
        assert!(matches!(
            plan(tokenize("echo a || echo b")),
            Err(ShellError::EmptyPipelineStage)
        ));
        assert!(matches!(
            plan(tokenize("| echo b")),
            Err(ShellError::EmptyPipelineStage)
        ));
    }

    #[test]
    fn blank_line_is_empty_pipeline() {
        assert!(plan_str("").is_none());
        assert!(plan(tokenize("  ")).unwrap().is_none());
    }

    #[test]
    fn a_stage_that_is_only_redirections_makes_the_whole_pipeline_empty() {
        // "> f" has no argv once its redirection is pulled out; this must
        // not plan to a stage with an empty argv (pipeline_engine would
        // then index argv[0] out of bounds).
        assert!(plan_str("> f | echo hi").is_none());
        assert!(plan_str("echo hi | 2> e | echo b").is_none());
    }

    #[test]
    fn preservation_matches_lexer_output() {
        let line = "echo a > out.txt | wc -l";
        let tokens = tokenize(line);
        let p = plan(tokens.clone()).unwrap().unwrap();
        let mut rebuilt = Vec::new();
        for (i, stage) in p.stages.iter().enumerate() {
            if i > 0 {
                rebuilt.push("|".to_string());
            }
            rebuilt.extend(stage.argv.iter().cloned());
            for r in stage.redirections.values() {
                let op = match (r.target, r.mode) {
                    (Stream::Stdout, RedirMode::Truncate) => ">",
                    (Stream::Stdout, RedirMode::Append) => ">>",
                    (Stream::Stderr, RedirMode::Truncate) => "2>",
                    (Stream::Stderr, RedirMode::Append) => "2>>",
                };
                rebuilt.push(op.to_string());
                rebuilt.push(r.path.to_string_lossy().into_owned());
            }
        }
        let mut a: Vec<_> = tokens.clone();
        a.sort();
        let mut b: Vec<_> = rebuilt;
        b.sort();
        assert_eq!(a, b);
    }
}
