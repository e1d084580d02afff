//! Kernel-level self-tests, run on the real machine during boot.

use crate::config::SCREEN_WIDTH;
use crate::keyboard::{self, RingBuffer};
use crate::terminal::{dispatch, Command, Console, LineEditor};
use crate::testutil::{ScreenGrid, ScriptedKeys};

/// Runs all kernel tests.
pub fn run_all() {
    log::info!("running kernel self-tests");

    test_queue_overflow();
    test_translate_total();
    test_console_wrap();
    test_line_editing();

    log::info!("all kernel self-tests passed");
}

fn test_queue_overflow() {
    log::debug!("test_queue_overflow...");
    let queue: RingBuffer<4> = RingBuffer::new();
    for byte in b"abcd" {
        queue.push(*byte);
    }
    assert_eq!(queue.overflow_count(), 1);
    assert_eq!(queue.pop(), Some(b'b'));
    assert_eq!(queue.pop(), Some(b'c'));
    assert_eq!(queue.pop(), Some(b'd'));
    assert_eq!(queue.pop(), None);
    log::debug!("[ok]");
}

fn test_translate_total() {
    log::debug!("test_translate_total...");
    let mapped = (0..=u8::MAX).filter_map(keyboard::translate).count();
    assert!(mapped > 0);
    assert_eq!(keyboard::translate(0x9C), None);
    log::debug!("[ok]");
}

fn test_console_wrap() {
    log::debug!("test_console_wrap...");
    let mut console = Console::new(ScreenGrid::new());
    console.write_int(i32::MIN);
    assert_eq!(console.grid().row_text(0), b"-2147483648");
    console.put(b'\n');
    assert_eq!(console.cursor(), SCREEN_WIDTH);
    log::debug!("[ok]");
}

fn test_line_editing() {
    log::debug!("test_line_editing...");
    let queue: RingBuffer<16> = RingBuffer::new();
    let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b"he\x08ello\n"));
    let mut console = Console::new(ScreenGrid::new());
    let mut buffer = [0; 16];

    let line = editor.read_line(&mut console, &mut buffer);
    assert_eq!(line.as_bytes(), b"hello");
    assert_eq!(dispatch(line.as_bytes(), &mut console), Command::Hello);
    log::debug!("[ok]");
}

#[cfg(test)]
mod host {
    #[test]
    fn test_self_tests_pass_on_host() {
        super::run_all();
    }
}
