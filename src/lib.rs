//! A minimal, correctly-quoting interactive POSIX-flavored shell.
//!
//! The core is the trio of tightly coupled subsystems that turn one line
//! of input into running processes with correct file descriptors: the
//! [`lexer`] (quoting/escaping), the [`planner`] (pipeline stages and
//! redirections), and the execution engine ([`runner`] for a single
//! external command, [`pipeline_engine`] for wiring several stages
//! together). [`builtins`] holds the fixed builtin command table;
//! [`path_resolver`] maps a command name to an executable; [`line_editor`]
//! is the raw-key terminal reader with history and completion; [`repl`]
//! composes all of the above into the read-parse-execute loop.

pub mod builtins;
pub mod error;
pub mod history;
pub mod lexer;
pub mod line_editor;
pub mod path_resolver;
pub mod pipeline_engine;
pub mod planner;
pub mod repl;
pub mod runner;
pub mod shell_state;
