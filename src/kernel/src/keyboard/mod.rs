//! Keyboard input path: scan code translation and the interrupt-fed queue.
//!
//! The interrupt handler reads a scan code from the controller and hands it
//! to [`add_scancode`]; the shell drains [`KEYBOARD_QUEUE`] from the main loop.

pub mod queue;
pub mod scancode;

pub use queue::{RingBuffer, RingIndex};
pub use scancode::translate;

use crate::config::INPUT_CAPACITY;
use lithax_common::InputFault;

/// ASCII backspace, as produced by the backspace key.
pub const BACKSPACE: u8 = 0x08;

/// The queue type shared between the keyboard interrupt and the shell.
pub type KeyboardQueue = RingBuffer<INPUT_CAPACITY>;

/// Characters typed but not yet consumed by the line editor.
pub static KEYBOARD_QUEUE: KeyboardQueue = RingBuffer::new();

/// Translates `scancode` and queues the resulting character.
///
/// Called from interrupt context, so it never blocks and never logs. On
/// success returns the character evicted to make room, if the queue was full.
/// Scan codes that type nothing are reported as
/// [`InputFault::UnmappedScancode`] and leave the queue untouched.
pub fn add_scancode<const N: usize>(
    queue: &RingBuffer<N>,
    scancode: u8,
) -> Result<Option<u8>, InputFault> {
    let byte = translate(scancode).ok_or(InputFault::UnmappedScancode(scancode))?;
    Ok(queue.push(byte))
}
