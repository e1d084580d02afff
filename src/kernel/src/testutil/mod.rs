//! Test doubles for the shell core.
//!
//! Used by the host unit tests and by the boot-time self-tests in
//! [`crate::tests`], so everything here is heap-free.
//!
//! ```rust,ignore
//! use lithax_kernel::testutil::{ScreenGrid, ScriptedKeys};
//! ```

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::keyboard::RingBuffer;
use lithax_hal::{Idle, TextGrid};

/// An in-memory text grid standing in for the VGA buffer.
pub struct MemoryGrid<const W: usize, const H: usize> {
    characters: [[u8; W]; H],
    attributes: [[u8; W]; H],
}

/// A memory grid with the real screen's dimensions.
pub type ScreenGrid = MemoryGrid<SCREEN_WIDTH, SCREEN_HEIGHT>;

impl<const W: usize, const H: usize> MemoryGrid<W, H> {
    /// Creates a grid of blank cells with a zero attribute.
    pub const fn new() -> Self {
        Self {
            characters: [[b' '; W]; H],
            attributes: [[0; W]; H],
        }
    }

    /// The (character, attribute) pair at a linear offset.
    pub fn cell(&self, offset: usize) -> (u8, u8) {
        let (row, col) = (offset / W, offset % W);
        (self.characters[row][col], self.attributes[row][col])
    }

    /// Characters of one row with trailing blanks removed.
    pub fn row_text(&self, row: usize) -> &[u8] {
        let characters = &self.characters[row];
        let end = characters
            .iter()
            .rposition(|&c| c != b' ')
            .map_or(0, |last| last + 1);
        &characters[..end]
    }
}

impl<const W: usize, const H: usize> Default for MemoryGrid<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> TextGrid for MemoryGrid<W, H> {
    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    fn write_cell(&mut self, offset: usize, character: u8, attribute: u8) {
        let (row, col) = (offset / W, offset % W);
        self.characters[row][col] = character;
        self.attributes[row][col] = attribute;
    }
}

/// An [`Idle`] that plays the keyboard interrupt.
///
/// Every wait delivers the next scripted character into the queue, the way one
/// key press wakes a halted processor.
pub struct ScriptedKeys<'a, const N: usize> {
    queue: &'a RingBuffer<N>,
    script: &'a [u8],
    waits: usize,
}

impl<'a, const N: usize> ScriptedKeys<'a, N> {
    /// Scripts `keys` to arrive one per wait on `queue`.
    pub fn new(queue: &'a RingBuffer<N>, keys: &'a [u8]) -> Self {
        Self {
            queue,
            script: keys,
            waits: 0,
        }
    }

    /// Number of times the consumer actually parked.
    pub fn waits(&self) -> usize {
        self.waits
    }

    /// Characters not yet delivered.
    pub fn remaining(&self) -> &[u8] {
        self.script
    }
}

impl<const N: usize> Idle for ScriptedKeys<'_, N> {
    fn wait_for_interrupt<F: FnMut() -> bool>(&mut self, mut ready: F) {
        if ready() {
            return;
        }
        self.waits += 1;
        match self.script.split_first() {
            Some((&key, rest)) => {
                self.queue.push(key);
                self.script = rest;
            }
            None => panic!("waited for input after the key script ran out"),
        }
    }
}
