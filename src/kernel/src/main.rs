//! Lithax Kernel Entry Point
//!
//! Brings up the machine, runs the boot self-tests and hands the CPU to the
//! interactive shell.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::fmt::Write;
    use core::panic::PanicInfo;
    use lithax_kernel::arch::x86_64::{self, Halt, VgaBuffer};
    use lithax_kernel::config::{ShellConfig, PANIC_ATTRIBUTE};
    use lithax_kernel::keyboard::KEYBOARD_QUEUE;
    use lithax_kernel::serial_println;
    use lithax_kernel::terminal::{Console, Shell};

    entry_point!(kernel_main);

    /// Kernel entry point.
    ///
    /// Called by the bootloader after setting up the initial environment.
    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        lithax_kernel::init();
        lithax_kernel::tests::run_all();

        // SAFETY: this is the only long-lived handle to the text buffer; the
        // panic handler only takes its own once the shell is gone for good.
        let mut console = Console::new(unsafe { VgaBuffer::new() });
        console.clear();

        Shell::new(console, &KEYBOARD_QUEUE, Halt, ShellConfig::default()).run()
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        serial_println!("KERNEL PANIC: {}", info);

        // SAFETY: nothing else runs after a panic, so this handle does not
        // race with the shell's.
        let mut console = Console::new(unsafe { VgaBuffer::new() });
        console.set_attribute(PANIC_ATTRIBUTE);
        console.write_str("\n\n!!! KERNEL PANIC !!!\n");
        let _ = write!(console, "{}", info);

        x86_64::halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("lithax-kernel only runs on a bare-metal x86_64 target; build it with `cargo bootimage`");
}
