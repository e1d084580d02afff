//! Line editor: turns queued keystrokes into one completed line.
//!
//! Characters are echoed as they are accepted. Backspace removes the last
//! collected character and blanks its cell; newline completes the line. The
//! returned line always sits in the caller's buffer followed by a NUL byte.

use super::console::Console;
use crate::config::OverflowPolicy;
use crate::keyboard::{RingBuffer, BACKSPACE};
use core::str;
use lithax_hal::{Idle, TextGrid};

/// A line produced by [`LineEditor::read_line`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    bytes: &'a [u8],
    truncated: bool,
}

impl<'a> Line<'a> {
    /// The collected characters, without the terminating NUL.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The line as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        str::from_utf8(self.bytes).ok()
    }

    /// Number of collected characters.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a line with no characters.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns `true` if characters were dropped because the buffer was full.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Reads lines from the keyboard queue, parking the processor while it is empty.
pub struct LineEditor<'q, const N: usize, I> {
    queue: &'q RingBuffer<N>,
    idle: I,
    policy: OverflowPolicy,
}

impl<'q, const N: usize, I: Idle> LineEditor<'q, N, I> {
    /// Creates an editor consuming `queue`, waiting through `idle`.
    pub fn new(queue: &'q RingBuffer<N>, idle: I) -> Self {
        Self {
            queue,
            idle,
            policy: OverflowPolicy::default(),
        }
    }

    /// Sets what happens once a line fills its buffer.
    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The queue this editor consumes.
    pub fn queue(&self) -> &'q RingBuffer<N> {
        self.queue
    }

    /// The idle strategy used while the queue is empty.
    pub fn idle(&self) -> &I {
        &self.idle
    }

    /// Blocks until a character is available and returns it.
    ///
    /// There is no timeout: an interactive shell waits for its user.
    fn next_key(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.queue.pop() {
                return byte;
            }
            let queue = self.queue;
            self.idle.wait_for_interrupt(|| !queue.is_empty());
        }
    }

    /// Reads one line into `buffer`, echoing it through `console`.
    ///
    /// At most `buffer.len() - 1` characters are kept so the NUL sentinel
    /// always fits. With [`OverflowPolicy::Truncate`] a line reaching that
    /// limit is returned immediately without waiting for newline.
    pub fn read_line<'b, G: TextGrid>(
        &mut self,
        console: &mut Console<G>,
        buffer: &'b mut [u8],
    ) -> Line<'b> {
        let Some(limit) = buffer.len().checked_sub(1) else {
            return Line {
                bytes: buffer,
                truncated: false,
            };
        };

        let mut len = 0;
        let mut truncated = false;
        loop {
            if len == limit && self.policy == OverflowPolicy::Truncate {
                truncated = true;
                break;
            }

            match self.next_key() {
                b'\n' => {
                    console.put(b'\n');
                    break;
                }
                BACKSPACE => {
                    if len > 0 {
                        len -= 1;
                        erase_previous(console);
                    }
                }
                // the sentinel never appears inside a line
                0 => {}
                byte if len < limit => {
                    buffer[len] = byte;
                    len += 1;
                    console.put(byte);
                }
                // full under OverflowPolicy::Hold
                _ => truncated = true,
            }
        }

        buffer[len] = 0;
        Line {
            bytes: &buffer[..len],
            truncated,
        }
    }
}

/// Blanks the cell before the cursor and leaves the cursor on it.
///
/// Does nothing at the start of a screen row.
fn erase_previous<G: TextGrid>(console: &mut Console<G>) {
    if console.retreat() {
        console.put(b' ');
        console.retreat();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LINE_CAPACITY, SCREEN_WIDTH};
    use crate::testutil::{ScreenGrid, ScriptedKeys};

    type Queue = RingBuffer<128>;

    fn console() -> Console<ScreenGrid> {
        Console::new(ScreenGrid::new())
    }

    #[test]
    fn test_read_line_hello() {
        let queue = Queue::new();
        let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b"hello\n"));
        let mut console = console();
        let mut buffer = [0xff; LINE_CAPACITY];

        let line = editor.read_line(&mut console, &mut buffer);
        assert_eq!(line.as_str(), Some("hello"));
        assert!(!line.is_truncated());
        assert_eq!(console.grid().row_text(0), b"hello");
        assert_eq!(console.cursor(), SCREEN_WIDTH);
        assert_eq!(buffer[5], 0);
    }

    #[test]
    fn test_backspace_removes_last_character() {
        let queue = Queue::new();
        let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b"he\x08i\n"));
        let mut console = console();
        let mut buffer = [0; LINE_CAPACITY];

        let line = editor.read_line(&mut console, &mut buffer);
        assert_eq!(line.as_bytes(), b"hi");
        assert_eq!(console.grid().row_text(0), b"hi");
        assert_eq!(console.cursor(), SCREEN_WIDTH);
    }

    #[test]
    fn test_backspace_on_empty_line_is_ignored() {
        let queue = Queue::new();
        let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b"\x08\x08ok\n"));
        let mut console = console();
        console.write_str("$ ");
        let mut buffer = [0; LINE_CAPACITY];

        let line = editor.read_line(&mut console, &mut buffer);
        assert_eq!(line.as_bytes(), b"ok");
        assert_eq!(console.grid().row_text(0), b"$ ok");
    }

    #[test]
    fn test_backspace_at_row_start_only_edits_line() {
        let queue = Queue::new();
        let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b"ab\x08\x08c\n"));
        let mut console = console();
        for _ in 0..SCREEN_WIDTH - 1 {
            console.put(b'.');
        }
        let mut buffer = [0; LINE_CAPACITY];

        // 'a' lands in the last column, 'b' starts the next row
        let line = editor.read_line(&mut console, &mut buffer);
        assert_eq!(line.as_bytes(), b"c");
        assert_eq!(console.grid().cell(SCREEN_WIDTH - 1).0, b'a');
        assert_eq!(console.grid().row_text(1), b"c");
    }

    #[test]
    fn test_full_line_is_force_terminated() {
        let queue = Queue::new();
        let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b"abcdef\n"));
        let mut console = console();
        let mut buffer = [0xff; 4];

        let line = editor.read_line(&mut console, &mut buffer);
        assert_eq!(line.as_bytes(), b"abc");
        assert!(line.is_truncated());
        assert_eq!(editor.idle().remaining(), b"def\n");
        assert_eq!(buffer[3], 0);
        assert_eq!(console.cursor(), 3);
    }

    #[test]
    fn test_hold_policy_waits_for_newline() {
        let queue = Queue::new();
        let keys = ScriptedKeys::new(&queue, b"abcd\x08x\n");
        let mut editor = LineEditor::new(&queue, keys).with_policy(OverflowPolicy::Hold);
        let mut console = console();
        let mut buffer = [0; 4];

        let line = editor.read_line(&mut console, &mut buffer);
        assert_eq!(line.as_bytes(), b"abx");
        assert!(line.is_truncated());
        assert_eq!(console.grid().row_text(0), b"abx");
        assert!(editor.idle().remaining().is_empty());
    }

    #[test]
    fn test_queued_input_needs_no_wait() {
        let queue = Queue::new();
        for &byte in b"ls\n" {
            queue.push(byte);
        }
        let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b""));
        let mut console = console();
        let mut buffer = [0; LINE_CAPACITY];

        let line = editor.read_line(&mut console, &mut buffer);
        assert_eq!(line.as_bytes(), b"ls");
        assert_eq!(editor.idle().waits(), 0);
    }

    #[test]
    fn test_tiny_buffers() {
        let queue = Queue::new();
        let mut editor = LineEditor::new(&queue, ScriptedKeys::new(&queue, b""));
        let mut console = console();

        let mut empty: [u8; 0] = [];
        let line = editor.read_line(&mut console, &mut empty);
        assert!(line.is_empty());
        assert!(!line.is_truncated());

        let mut buffer = [0xff; 1];
        let line = editor.read_line(&mut console, &mut buffer);
        assert!(line.is_empty());
        assert!(line.is_truncated());
        assert_eq!(buffer[0], 0);
    }
}
