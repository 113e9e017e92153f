//! End-to-end tests driving the lexer, planner and pipeline engine
//! together, the way `arg-escaping` and `pipeline` tests in the
//! process-plumbing layer this shell is built on drive the external
//! runner end to end.

use std::fs;

use posh::lexer::tokenize;
use posh::pipeline_engine;
use posh::planner::plan;
use posh::shell_state::ShellState;

fn run_line(line: &str, state: &mut ShellState) -> (String, String) {
    let pipeline = plan(tokenize(line)).unwrap().unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    pipeline_engine::run(&pipeline, state, &mut out, &mut err).unwrap();
    (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn echo_hello_with_preserved_spacing() {
    let mut state = ShellState::new();
    let pipeline = plan(tokenize("echo 'hello   world'")).unwrap().unwrap();
    assert_eq!(pipeline.stages[0].argv, vec!["echo", "hello   world"]);
    let mut out = Vec::new();
    posh::builtins::lookup("echo").unwrap()(
        &pipeline.stages[0].argv[1..],
        &mut std::io::empty(),
        &mut out,
        &mut std::io::sink(),
        &mut state,
    )
    .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "hello   world\n");
}

#[test]
fn double_quote_escapes_only_quote_and_backslash() {
    let tokens = tokenize(r#"echo "a\"b\\c""#);
    assert_eq!(tokens, vec!["echo", "a\"b\\c"]);
}

#[test]
fn redirection_truncates_then_appends() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut state = ShellState::new();
    let line = format!("echo hello > {}", path.display());
    let (stdout, _) = run_line(&line, &mut state);
    assert_eq!(stdout, "");
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");

    let line = format!("echo hello >> {}", path.display());
    run_line(&line, &mut state);
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello\nhello\n");
}

#[test]
fn type_on_a_builtin_is_unaffected_by_path() {
    let mut state = ShellState::new();
    let (stdout, _) = run_line("type echo", &mut state);
    assert_eq!(stdout, "");
    // single-stage dispatch (not a pipeline) is exercised in repl::tests;
    // here we only confirm the builtin runs cleanly under the pipeline
    // engine's single-stage path via a 2-stage pipeline wrapper.
    let (stdout, _) = run_line("type echo | echo should-not-matter", &mut state);
    let _ = stdout;
}

#[test]
fn history_builtin_lists_after_two_prior_commands() {
    let mut state = ShellState::new();
    state.history.push("echo one".to_string());
    state.history.push("echo two".to_string());
    state.history.push("history".to_string());
    let (stdout, _) = run_line("history", &mut state);
    assert_eq!(stdout, "    1  echo one\n    2  echo two\n    3  history\n");
}

#[test]
fn missing_external_command_reports_not_found_on_stderr() {
    let mut state = ShellState::new();
    let (stdout, stderr) = run_line("nosuchcmd-definitely-not-on-path | wc -l", &mut state);
    let _ = stdout;
    assert_eq!(stderr, "nosuchcmd-definitely-not-on-path: command not found\n");
}

#[test]
fn empty_pipeline_stage_is_a_planning_error() {
    assert!(plan(tokenize("echo a || echo b")).is_err());
}

#[cfg(unix)]
#[test]
fn builtin_to_external_pipeline_counts_words() {
    let mut state = ShellState::new();
    let (stdout, _) = run_line("echo a b c | wc -w", &mut state);
    assert_eq!(stdout.trim(), "3");
}
