//! Tokenizer for one input line.
//!
//! Turns a line of text into an ordered sequence of tokens, honoring POSIX-ish
//! quoting: single quotes suppress all escaping, double quotes only let a
//! backslash escape `"` and `\` itself, and outside quotes a backslash
//! escapes the very next character. Redirection operators (`|`, `>`, ...)
//! are not given special token kinds here — they come out as ordinary
//! strings and are recognized later, by exact match, in the planner.

/// Splits `line` into tokens. Never returns an empty token; collapses runs
/// of unquoted whitespace between tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    #[derive(PartialEq)]
    enum Mode {
        Unquoted,
        Single,
        Double,
    }
    let mut mode = Mode::Unquoted;

    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match mode {
            Mode::Unquoted => match c {
                '\\' => match chars.next() {
                    Some(escaped) => current.push(escaped),
                    // Trailing backslash at end of input: retained literally.
                    None => current.push('\\'),
                },
                '\'' => mode = Mode::Single,
                '"' => mode = Mode::Double,
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                c => current.push(c),
            },
            Mode::Single => {
                if c == '\'' {
                    mode = Mode::Unquoted;
                } else {
                    current.push(c);
                }
            }
            Mode::Double => match c {
                '"' => mode = Mode::Unquoted,
                '\\' => match chars.peek() {
                    Some('"') | Some('\\') => {
                        current.push(chars.next().unwrap());
                    }
                    _ => current.push('\\'),
                },
                c => current.push(c),
            },
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
