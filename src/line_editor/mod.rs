//! Raw-key line editor: history browsing, tab completion, bell on
//! ambiguity. Prints to and reads from the real terminal; the prompt is
//! assumed to be `$ ` (two columns) per spec.md's design notes, so the
//! redraw sequences below clear exactly back to it.

use std::io::{self, Write};

use crate::builtins;
use crate::history::History;

#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod win32;

#[cfg(unix)]
use posix as raw;
#[cfg(windows)]
use win32 as raw;

const BEL: u8 = 0x07;

/// One raw keystroke, decoded from whatever multi-byte sequence the
/// terminal sent (e.g. `ESC [ A` for the up arrow).
#[derive(Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
    Tab,
    Eof,
    Other,
}

/// Reads one line from the terminal in raw mode. Returns `None` on EOF
/// (spec.md: terminate the REPL cleanly, no special Ctrl-D handling beyond
/// treating it like any other read failure).
pub fn read_line(history: &History) -> io::Result<Option<String>> {
    let _raw_mode = raw::RawMode::enable()?;
    let mut stdout = io::stdout();

    let mut buffer = String::new();
    // One past the last history entry: the "live" position.
    let mut cursor = history.len();
    let mut live_buffer = String::new();
    let mut consecutive_tabs = false;

    loop {
        let key = raw::read_key()?;
        if !matches!(key, Key::Tab) {
            consecutive_tabs = false;
        }

        match key {
            Key::Eof => return Ok(None),
            Key::Char(c) => {
                buffer.push(c);
                write!(stdout, "{c}")?;
                stdout.flush()?;
            }
            Key::Backspace => {
                if buffer.pop().is_some() {
                    write!(stdout, "\u{8} \u{8}")?;
                    stdout.flush()?;
                }
            }
            Key::Enter => {
                write!(stdout, "\r\n")?;
                stdout.flush()?;
                return Ok(Some(buffer));
            }
            Key::Up => {
                if cursor > 0 {
                    if cursor == history.len() {
                        live_buffer = buffer.clone();
                    }
                    cursor -= 1;
                    buffer = history.get(cursor + 1).unwrap_or("").to_string();
                    redraw_line(&mut stdout, &buffer)?;
                }
            }
            Key::Down => {
                if cursor < history.len() {
                    cursor += 1;
                    buffer = if cursor == history.len() {
                        live_buffer.clone()
                    } else {
                        history.get(cursor + 1).unwrap_or("").to_string()
                    };
                    redraw_line(&mut stdout, &buffer)?;
                }
            }
            Key::Tab => {
                if buffer.contains(' ') {
                    consecutive_tabs = false;
                    continue;
                }
                let matches = builtins::completions(&buffer);
                consecutive_tabs = match matches.len() {
                    0 => {
                        stdout.write_all(&[BEL])?;
                        stdout.flush()?;
                        false
                    }
                    1 => {
                        buffer = format!("{} ", matches[0]);
                        redraw_line(&mut stdout, &buffer)?;
                        false
                    }
                    _ => {
                        let lcp = longest_common_prefix(&matches);
                        if lcp.len() > buffer.len() {
                            buffer = lcp;
                            redraw_line(&mut stdout, &buffer)?;
                            false
                        } else if !consecutive_tabs {
                            stdout.write_all(&[BEL])?;
                            stdout.flush()?;
                            true
                        } else {
                            write!(stdout, "\r\n{}\r\n$ {}", matches.join("  "), buffer)?;
                            stdout.flush()?;
                            false
                        }
                    }
                };
            }
            Key::Other => {}
        }
    }
}

fn redraw_line(stdout: &mut io::Stdout, buffer: &str) -> io::Result<()> {
    write!(stdout, "\r$ \u{1b}[K{buffer}")?;
    stdout.flush()
}

fn longest_common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };
    let mut prefix_len = first.chars().count();
    for s in &strings[1..] {
        let common = first
            .chars()
            .zip(s.chars())
            .take_while(|(a, b)| a == b)
            .count();
        prefix_len = prefix_len.min(common);
    }
    first.chars().take(prefix_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcp_of_single_string_is_itself() {
        assert_eq!(longest_common_prefix(&["echo".to_string()]), "echo");
    }

    #[test]
    fn lcp_of_disjoint_strings_is_empty() {
        assert_eq!(
            longest_common_prefix(&["echo".to_string(), "pwd".to_string()]),
            ""
        );
    }

    #[test]
    fn lcp_extends_typed_prefix() {
        assert_eq!(
            longest_common_prefix(&["echo".to_string(), "exit".to_string()]),
            "e"
        );
    }
}
