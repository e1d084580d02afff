//! Interrupt Descriptor Table (IDT) and interrupt handlers for x86_64.
//!
//! The keyboard handler is the producer side of the keyboard queue. Like
//! every handler here it runs with interrupts masked and may preempt the
//! shell at any instruction, so it only translates, pushes and acknowledges.

use super::gdt;
use super::pic::{self, InterruptIndex};
use crate::keyboard::{self, KEYBOARD_QUEUE};
use crate::serial_println;
use lazy_static::lazy_static;
use x86_64::instructions::port::Port;
use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame, PageFaultErrorCode};

/// PS/2 controller data port.
const KEYBOARD_DATA_PORT: u16 = 0x60;

lazy_static! {
    /// The Interrupt Descriptor Table (IDT).
    static ref IDT: InterruptDescriptorTable = {
        let mut idt = InterruptDescriptorTable::new();
        idt.breakpoint.set_handler_fn(breakpoint_handler);
        unsafe {
            idt.double_fault.set_handler_fn(double_fault_handler)
                .set_stack_index(gdt::DOUBLE_FAULT_IST_INDEX);
        }
        idt.page_fault.set_handler_fn(page_fault_handler);
        idt.general_protection_fault.set_handler_fn(general_protection_fault_handler);
        idt.divide_error.set_handler_fn(divide_error_handler);

        // Hardware interrupts
        idt[InterruptIndex::Timer.as_usize()]
            .set_handler_fn(timer_interrupt_handler);
        idt[InterruptIndex::Keyboard.as_usize()]
            .set_handler_fn(keyboard_interrupt_handler);

        idt
    };
}

/// Loads the IDT, remaps the PICs and enables hardware interrupts.
pub fn init_idt() {
    IDT.load();
    pic::init();
    x86_64::instructions::interrupts::enable();
}

/// Handler for the timer interrupt.
extern "x86-interrupt" fn timer_interrupt_handler(_stack_frame: InterruptStackFrame) {
    pic::end_of_interrupt(InterruptIndex::Timer);
}

/// Handler for the keyboard interrupt.
extern "x86-interrupt" fn keyboard_interrupt_handler(_stack_frame: InterruptStackFrame) {
    let mut port = Port::new(KEYBOARD_DATA_PORT);
    // SAFETY: reading the PS/2 data port has no side effects beyond consuming
    // the byte that raised this interrupt.
    let scancode: u8 = unsafe { port.read() };

    // Unmapped codes and evictions are both recovered silently here.
    let _ = keyboard::add_scancode(&KEYBOARD_QUEUE, scancode);

    pic::end_of_interrupt(InterruptIndex::Keyboard);
}

/// Handler for the breakpoint exception (INT3).
extern "x86-interrupt" fn breakpoint_handler(stack_frame: InterruptStackFrame) {
    serial_println!("EXCEPTION: BREAKPOINT\n{:#?}", stack_frame);
}

/// Handler for the double fault exception.
extern "x86-interrupt" fn double_fault_handler(
    stack_frame: InterruptStackFrame,
    _error_code: u64,
) -> ! {
    panic!("EXCEPTION: DOUBLE FAULT\n{:#?}", stack_frame);
}

/// Handler for the page fault exception.
extern "x86-interrupt" fn page_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: PageFaultErrorCode,
) {
    use x86_64::registers::control::Cr2;

    panic!(
        "EXCEPTION: PAGE FAULT at {:?} ({:?})\n{:#?}",
        Cr2::read(),
        error_code,
        stack_frame
    );
}

/// Handler for the general protection fault exception.
extern "x86-interrupt" fn general_protection_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: u64,
) {
    panic!(
        "EXCEPTION: GENERAL PROTECTION FAULT ({:#x})\n{:#?}",
        error_code, stack_frame
    );
}

/// Handler for the divide error exception.
extern "x86-interrupt" fn divide_error_handler(stack_frame: InterruptStackFrame) {
    panic!("EXCEPTION: DIVIDE ERROR\n{:#?}", stack_frame);
}
