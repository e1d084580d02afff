//! The shell loop: prompt, read a line, dispatch it, repeat.
//!
//! [`Shell`] is the top-level context of the main thread. It owns the console
//! and the line editor; the keyboard queue is the only state it shares with
//! the interrupt handler.

use super::commands::{self, Command};
use super::console::Console;
use super::editor::LineEditor;
use crate::config::{ShellConfig, LINE_CAPACITY};
use crate::keyboard::RingBuffer;
use lithax_common::InputFault;
use lithax_hal::{Idle, TextGrid};

/// Interactive command shell.
pub struct Shell<'q, G, I, const N: usize> {
    console: Console<G>,
    editor: LineEditor<'q, N, I>,
    config: ShellConfig,
    /// Queue overflows already logged.
    reported_overflows: usize,
}

impl<'q, G: TextGrid, I: Idle, const N: usize> Shell<'q, G, I, N> {
    /// Create a new shell reading from `queue`.
    pub fn new(console: Console<G>, queue: &'q RingBuffer<N>, idle: I, config: ShellConfig) -> Self {
        let editor = LineEditor::new(queue, idle).with_policy(config.overflow);
        Self {
            console,
            editor,
            config,
            reported_overflows: queue.overflow_count(),
        }
    }

    /// The console the shell renders into.
    pub fn console(&self) -> &Console<G> {
        &self.console
    }

    /// Display the greeting.
    pub fn banner(&mut self) {
        self.console.write_str(self.config.banner);
    }

    /// Runs one prompt/read/dispatch cycle.
    ///
    /// Returns the name of the command that ran, or `None` if the line was
    /// not recognized.
    pub fn step(&mut self) -> Option<&'static str> {
        let mut buffer = [0u8; LINE_CAPACITY];

        self.console.write_str(self.config.prompt);
        let line = self.editor.read_line(&mut self.console, &mut buffer);

        if line.is_truncated() {
            log::debug!("{}", InputFault::LineTruncated { kept: line.len() });
        }
        self.report_overflows();

        let command = commands::dispatch(line.as_bytes(), &mut self.console);
        match command {
            Command::Unknown(_) => {
                log::info!("unrecognized command {:?}", line.as_str().unwrap_or("<binary>"));
            }
            command => log::trace!("ran {:?}", command),
        }
        command.name()
    }

    /// Greets the user and serves commands forever.
    pub fn run(&mut self) -> ! {
        self.banner();
        log::info!("shell ready");
        loop {
            self.step();
        }
    }

    /// Logs characters the queue has evicted since the last report.
    fn report_overflows(&mut self) {
        let total = self.editor.queue().overflow_count();
        if total != self.reported_overflows {
            let dropped = total.wrapping_sub(self.reported_overflows);
            log::warn!("{}", InputFault::QueueOverflow { dropped });
            self.reported_overflows = total;
        }
    }
}
