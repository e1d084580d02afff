//! VGA text mode frame buffer for x86_64.
//!
//! Exposes the 80x25 text buffer at 0xB8000 as a [`TextGrid`]; cursor
//! handling and wrapping live in the terminal console.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use core::ptr;
use lithax_hal::TextGrid;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// A single character cell in the VGA buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
struct ScreenChar {
    ascii_character: u8,
    attribute: u8,
}

/// The VGA text buffer layout, row-major.
#[repr(transparent)]
struct Buffer {
    chars: [ScreenChar; SCREEN_WIDTH * SCREEN_HEIGHT],
}

/// Handle to the memory-mapped VGA text buffer.
pub struct VgaBuffer {
    /// SAFETY: valid for the lifetime of the kernel; the VGA buffer at
    /// 0xB8000 is always mapped in x86 protected and long mode.
    buffer: *mut Buffer,
}

// SAFETY: VgaBuffer only touches the VGA buffer through volatile writes, and
// the shell owns the only handle outside the panic path.
unsafe impl Send for VgaBuffer {}

impl VgaBuffer {
    /// Creates a handle to the VGA text buffer.
    ///
    /// # Safety
    ///
    /// The caller must make sure no other handle is writing at the same time.
    /// The panic handler may take a second handle because the shell never
    /// runs again once it does.
    pub unsafe fn new() -> Self {
        VgaBuffer {
            buffer: VGA_BUFFER_ADDR as *mut Buffer,
        }
    }
}

impl TextGrid for VgaBuffer {
    fn width(&self) -> usize {
        SCREEN_WIDTH
    }

    fn height(&self) -> usize {
        SCREEN_HEIGHT
    }

    fn write_cell(&mut self, offset: usize, character: u8, attribute: u8) {
        debug_assert!(offset < SCREEN_WIDTH * SCREEN_HEIGHT, "cell offset out of bounds");

        // SAFETY: the console keeps offset below width * height, and the
        // indexing below is bounds checked regardless. Volatile because the
        // VGA buffer is memory-mapped I/O read by the display hardware.
        unsafe {
            ptr::write_volatile(
                &mut (*self.buffer).chars[offset],
                ScreenChar {
                    ascii_character: character,
                    attribute,
                },
            );
        }
    }
}
