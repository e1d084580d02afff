//! Built-in shell commands.
//!
//! A completed line is matched exactly, byte for byte and case-sensitively,
//! against a fixed table. Anything else is reported back to the user.

use super::console::Console;
use lithax_hal::TextGrid;

/// Shell command types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Print a greeting.
    Hello,
    /// Print the OS version.
    Version,
    /// Print the author.
    Author,
    /// List the available commands.
    Help,
    /// Clear the screen.
    Clear,
    /// A line matching no command, kept verbatim.
    Unknown(&'a [u8]),
}

/// Known commands in match order, with their help summaries.
const COMMANDS: &[(&str, Command<'static>, &str)] = &[
    ("hello", Command::Hello, "Print a greeting"),
    ("version", Command::Version, "Show the OS version"),
    ("author", Command::Author, "Show the author"),
    ("help", Command::Help, "List available commands"),
    ("clear", Command::Clear, "Clear the screen"),
];

/// Column where help summaries start.
const HELP_COLUMN: usize = 12;

impl<'a> Command<'a> {
    /// Parses a completed line.
    ///
    /// The first table entry whose name equals the whole line wins; there is
    /// no prefix matching and no whitespace trimming.
    pub fn parse(line: &'a [u8]) -> Command<'a> {
        COMMANDS
            .iter()
            .find(|(name, ..)| name.as_bytes() == line)
            .map_or(Command::Unknown(line), |&(_, command, _)| command)
    }

    /// The trigger string, or `None` for an unknown line.
    pub fn name(&self) -> Option<&'static str> {
        COMMANDS
            .iter()
            .find(|(_, command, _)| command == self)
            .map(|&(name, ..)| name)
    }

    /// Execute a command, rendering its output.
    pub fn execute<G: TextGrid>(self, console: &mut Console<G>) {
        match self {
            Command::Hello => console.write_str("Hello, World!\n"),
            Command::Version => console.write_str("OS Version: 1.0\n"),
            Command::Author => console.write_str("Author: Lithax\n"),
            Command::Help => cmd_help(console),
            Command::Clear => console.clear(),
            Command::Unknown(line) => {
                console.write_str("Command not recognized: ");
                console.write_bytes(line);
                console.put(b'\n');
            }
        }
    }
}

/// Parses and executes `line`, returning the command that ran.
///
/// Never fails: an unrecognized line is an ordinary outcome.
pub fn dispatch<'a, G: TextGrid>(line: &'a [u8], console: &mut Console<G>) -> Command<'a> {
    let command = Command::parse(line);
    command.execute(console);
    command
}

/// Display help information.
fn cmd_help<G: TextGrid>(console: &mut Console<G>) {
    console.write_str("Available commands:\n");
    for (name, _, summary) in COMMANDS {
        console.write_str("  ");
        console.write_str(name);
        for _ in name.len() + 2..HELP_COLUMN {
            console.put(b' ');
        }
        console.write_str(summary);
        console.put(b'\n');
    }
}
