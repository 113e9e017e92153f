//! Unix raw-mode terminal I/O via `termios(3)`.

use std::io::{self, Read};
use std::os::unix::io::AsRawFd;

use super::Key;

/// Puts the terminal in raw mode (no canonical line buffering, no local
/// echo) for the lifetime of the guard, restoring the original
/// attributes on drop.
pub struct RawMode {
    fd: i32,
    original: libc::termios,
}

impl RawMode {
    pub fn enable() -> io::Result<RawMode> {
        let fd = io::stdin().as_raw_fd();
        let original = unsafe {
            let mut term: libc::termios = std::mem::zeroed();
            if libc::tcgetattr(fd, &mut term) != 0 {
                return Err(io::Error::last_os_error());
            }
            term
        };

        let mut raw = original;
        unsafe {
            libc::cfmakeraw(&mut raw);
        }
        // Keep ISIG so Ctrl-C still raises SIGINT; job control/signals are
        // out of scope, and killing the process outright is a reasonable
        // fallback that cfmakeraw would otherwise disable.
        raw.c_lflag |= libc::ISIG;

        if unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, &raw) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(RawMode { fd, original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSAFLUSH, &self.original);
        }
    }
}

fn read_byte() -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match io::stdin().read(&mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buf[0])),
        Err(e) => Err(e),
    }
}

/// Reads and decodes one keystroke, including `ESC [ A/B` arrow sequences.
pub fn read_key() -> io::Result<Key> {
    let Some(b) = read_byte()? else {
        return Ok(Key::Eof);
    };

    match b {
        0x1b => {
            // Arrow keys arrive as ESC '[' 'A'/'B'/'C'/'D'; anything else
            // starting with ESC is not a key this editor recognizes.
            match read_byte()? {
                Some(b'[') => match read_byte()? {
                    Some(b'A') => Ok(Key::Up),
                    Some(b'B') => Ok(Key::Down),
                    _ => Ok(Key::Other),
                },
                _ => Ok(Key::Other),
            }
        }
        b'\r' | b'\n' => Ok(Key::Enter),
        0x7f | 0x08 => Ok(Key::Backspace),
        b'\t' => Ok(Key::Tab),
        b if b < 0x20 => Ok(Key::Other),
        b => {
            // Decode a (possibly multi-byte) UTF-8 scalar starting at `b`.
            let extra = match b {
                0x00..=0x7f => 0,
                0xc0..=0xdf => 1,
                0xe0..=0xef => 2,
                0xf0..=0xf7 => 3,
                _ => return Ok(Key::Other),
            };
            let mut bytes = vec![b];
            for _ in 0..extra {
                match read_byte()? {
                    Some(cont) => bytes.push(cont),
                    None => return Ok(Key::Eof),
                }
            }
            match std::str::from_utf8(&bytes).ok().and_then(|s| s.chars().next()) {
                Some(c) => Ok(Key::Char(c)),
                None => Ok(Key::Other),
            }
        }
    }
}
