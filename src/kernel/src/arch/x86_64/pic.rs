//! The chained 8259 Programmable Interrupt Controllers (PICs).
//!
//! Hardware IRQs 0..15 are remapped above the CPU exception vectors.

use pic8259::ChainedPics;
use spin::Mutex;

/// Vector of IRQ 0 on the primary PIC; IRQs 0..7 land on 32..39.
pub const PIC_1_OFFSET: u8 = 32;

/// Vector of IRQ 8 on the secondary PIC; IRQs 8..15 land on 40..47.
pub const PIC_2_OFFSET: u8 = PIC_1_OFFSET + 8;

static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

/// Interrupt vectors of the hardware IRQs the kernel handles.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
pub enum InterruptIndex {
    /// IRQ 0, the programmable interval timer.
    Timer = PIC_1_OFFSET,
    /// IRQ 1, the PS/2 keyboard.
    Keyboard,
}

impl InterruptIndex {
    /// The vector number.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The vector number as an IDT index.
    pub fn as_usize(self) -> usize {
        usize::from(self.as_u8())
    }
}

/// Remaps and unmasks both PICs.
///
/// Must run with interrupts disabled, before they are first enabled.
pub fn init() {
    // SAFETY: the offsets keep IRQ vectors clear of CPU exceptions, and the
    // caller guarantees no interrupt is in flight during the remap.
    unsafe { PICS.lock().initialize() };
}

/// Acknowledges `irq` so the PIC delivers the next interrupt.
///
/// Called at the end of every hardware interrupt handler.
pub fn end_of_interrupt(irq: InterruptIndex) {
    // SAFETY: `irq` names a vector the PICs were remapped to in `init`, and
    // handlers only acknowledge the interrupt they are servicing.
    unsafe { PICS.lock().notify_end_of_interrupt(irq.as_u8()) };
}
