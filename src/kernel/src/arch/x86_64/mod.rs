//! x86_64 architecture support.
//!
//! Provides VGA text mode output, serial port logging and interrupt handling
//! for bare-metal x86_64.

pub mod gdt;
pub mod interrupts;
pub mod pic;
pub mod serial;
pub mod vga;

pub use serial::SERIAL;
pub use vga::VgaBuffer;

use lithax_hal::Idle;
use x86_64::instructions::interrupts as cpu_interrupts;

/// Halts the CPU until the next interrupt.
///
/// Used in idle loops to reduce power consumption.
#[inline]
pub fn hlt() {
    x86_64::instructions::hlt();
}

/// Halts the CPU in an infinite loop.
///
/// Used after unrecoverable errors (panics).
pub fn halt_loop() -> ! {
    loop {
        hlt();
    }
}

/// Idles the processor with `hlt` until an interrupt delivers work.
#[derive(Debug, Default, Clone, Copy)]
pub struct Halt;

impl Idle for Halt {
    fn wait_for_interrupt<F: FnMut() -> bool>(&mut self, mut ready: F) {
        // With interrupts masked nothing can land between the check and the
        // halt; `sti; hlt` then re-enables them and sleeps as one step.
        cpu_interrupts::disable();
        if ready() {
            cpu_interrupts::enable();
        } else {
            cpu_interrupts::enable_and_hlt();
        }
    }
}
