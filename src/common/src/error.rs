//! Recovered-fault taxonomy for the Lithax input path.
//!
//! None of these are fatal. Each names a condition the shell degrades around
//! silently.

use core::fmt;

/// Input path conditions that were recovered from without user involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputFault {
    /// The keyboard queue was full and evicted its oldest characters.
    QueueOverflow {
        /// Characters discarded since the previous report.
        dropped: usize,
    },
    /// A line hit the caller's buffer limit and was force-terminated.
    LineTruncated {
        /// Visible characters kept in the line.
        kept: usize,
    },
    /// A scan code with no printable mapping (key release, modifier, etc).
    UnmappedScancode(u8),
}

impl fmt::Display for InputFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFault::QueueOverflow { dropped } => {
                write!(f, "keyboard queue overflow, {} oldest characters dropped", dropped)
            }
            InputFault::LineTruncated { kept } => {
                write!(f, "input line truncated at {} characters", kept)
            }
            InputFault::UnmappedScancode(code) => write!(f, "unmapped scan code {:#04x}", code),
        }
    }
}
