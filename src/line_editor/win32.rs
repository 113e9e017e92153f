//! Windows raw-mode console I/O via `SetConsoleMode`/`ReadConsoleInputW`.

use std::io;

use winapi::shared::minwindef::DWORD;
use winapi::um::consoleapi::{GetConsoleMode, ReadConsoleInputW, SetConsoleMode};
use winapi::um::handleapi::INVALID_HANDLE_VALUE;
use winapi::um::processenv::GetStdHandle;
use winapi::um::winbase::STD_INPUT_HANDLE;
use winapi::um::wincon::{
    ENABLE_ECHO_INPUT, ENABLE_LINE_INPUT, ENABLE_PROCESSED_INPUT, INPUT_RECORD, KEY_EVENT,
};
use winapi::um::winnt::HANDLE;
use winapi::um::winuser::{VK_BACK, VK_DOWN, VK_RETURN, VK_TAB, VK_UP};

use super::Key;

/// Disables line-input and echo on the console input handle for the
/// lifetime of the guard, restoring the original mode on drop.
pub struct RawMode {
    handle: HANDLE,
    original: DWORD,
}

impl RawMode {
    pub fn enable() -> io::Result<RawMode> {
        unsafe {
            let handle = GetStdHandle(STD_INPUT_HANDLE);
            if handle == INVALID_HANDLE_VALUE || handle.is_null() {
                return Err(io::Error::last_os_error());
            }
            let mut original: DWORD = 0;
            if GetConsoleMode(handle, &mut original) == 0 {
                return Err(io::Error::last_os_error());
            }
            let raw = original & !(ENABLE_LINE_INPUT | ENABLE_ECHO_INPUT | ENABLE_PROCESSED_INPUT);
            if SetConsoleMode(handle, raw) == 0 {
                return Err(io::Error::last_os_error());
            }
            Ok(RawMode { handle, original })
        }
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        unsafe {
            SetConsoleMode(self.handle, self.original);
        }
    }
}

/// Reads and decodes one keystroke from the console input buffer.
pub fn read_key() -> io::Result<Key> {
    unsafe {
        let handle = GetStdHandle(STD_INPUT_HANDLE);
        loop {
            let mut record: INPUT_RECORD = std::mem::zeroed();
            let mut read: DWORD = 0;
            if ReadConsoleInputW(handle, &mut record, 1, &mut read) == 0 {
                return Err(io::Error::last_os_error());
            }
            if record.EventType != KEY_EVENT {
                continue;
            }
            let key_event = record.Event.KeyEvent();
            if key_event.bKeyDown == 0 {
                continue;
            }

            let vk = key_event.wVirtualKeyCode as i32;
            if vk == VK_RETURN {
                return Ok(Key::Enter);
            }
            if vk == VK_BACK {
                return Ok(Key::Backspace);
            }
            if vk == VK_TAB {
                return Ok(Key::Tab);
            }
            if vk == VK_UP {
                return Ok(Key::Up);
            }
            if vk == VK_DOWN {
                return Ok(Key::Down);
            }

            let ch = *key_event.uChar.UnicodeChar();
            if ch == 0 {
                continue;
            }
            if ch as u32 == 0x1a {
                // Ctrl-Z, the conventional Windows console EOF marker.
                return Ok(Key::Eof);
            }
            if let Some(c) = char::from_u32(ch as u32) {
                if !c.is_control() {
                    return Ok(Key::Char(c));
                }
            }
        }
    }
}

