//! Terminal subsystem for Lithax.
//!
//! Provides the console renderer, line editing and the command shell.
//!
//! # Architecture
//!
//! - `console`: Cursor-based renderer over a character grid
//! - `editor`: Line editor fed by the keyboard queue
//! - `commands`: Built-in shell commands
//! - `shell`: Prompt/read/dispatch loop

pub mod commands;
pub mod console;
pub mod editor;
pub mod shell;

pub use commands::{dispatch, Command};
pub use console::Console;
pub use editor::{Line, LineEditor};
pub use shell::Shell;
