//! Compile-time configuration for the shell core.

/// Number of columns in the text display.
pub const SCREEN_WIDTH: usize = 80;

/// Number of rows in the text display.
pub const SCREEN_HEIGHT: usize = 25;

/// Attribute byte for every rendered cell: light grey on black.
pub const DEFAULT_ATTRIBUTE: u8 = 0x07;

/// Attribute byte for the panic screen: light red on black.
pub const PANIC_ATTRIBUTE: u8 = 0x0c;

/// Slots in the keyboard input queue. One slot is kept free to tell full from empty.
pub const INPUT_CAPACITY: usize = 128;

/// Size of the line buffer handed to the line editor, sentinel included.
pub const LINE_CAPACITY: usize = 128;

/// Prompt printed before every line.
pub const PROMPT: &str = "lithax $ ";

/// Greeting printed once when the shell starts.
pub const BANNER: &str = "Welcome to Lithax OS!\n";

/// What the line editor does once a line fills the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Force-terminate and return the line as soon as it is full.
    #[default]
    Truncate,
    /// Keep the line open: drop further characters until newline, but let
    /// backspace shrink the line back below the limit.
    Hold,
}

/// Runtime knobs for the shell loop.
#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    /// Prompt printed before every line.
    pub prompt: &'static str,
    /// Greeting printed by [`crate::terminal::Shell::banner`].
    pub banner: &'static str,
    /// Behavior of the line editor on a full line.
    pub overflow: OverflowPolicy,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: PROMPT,
            banner: BANNER,
            overflow: OverflowPolicy::default(),
        }
    }
}

/// Maximum log level compiled into the kernel logger.
pub const fn log_level() -> log::LevelFilter {
    if cfg!(feature = "verbose") {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    }
}
