//! Lithax Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware details.

#![no_std]

/// Trait for a fixed-size grid of character cells, such as a text-mode frame buffer.
///
/// Cells are addressed by linear offset, row-major: `offset = row * width + column`.
pub trait TextGrid {
    /// Number of columns in the grid.
    fn width(&self) -> usize;
    /// Number of rows in the grid.
    fn height(&self) -> usize;
    /// Writes a character and its attribute byte into the cell at `offset`.
    ///
    /// `offset` is always below `width() * height()`.
    fn write_cell(&mut self, offset: usize, character: u8, attribute: u8);
}

/// Trait for parking the processor until an asynchronous event arrives.
pub trait Idle {
    /// Waits for the next interrupt unless `ready` already reports pending work.
    ///
    /// Implementations must leave interrupts deliverable while waiting, and must
    /// evaluate `ready` in a way that cannot miss an interrupt landing between
    /// the check and the wait.
    fn wait_for_interrupt<F: FnMut() -> bool>(&mut self, ready: F);
}
