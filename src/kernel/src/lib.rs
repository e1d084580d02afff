//! Lithax Kernel
//!
//! The interactive core of a minimal bare-metal command shell for x86_64.
//!
//! # Architecture
//!
//! The kernel is structured into the following modules:
//! - `keyboard`: Scan code translation and the interrupt-fed input queue
//! - `terminal`: Console renderer, line editor and command shell
//! - `logger`: `log` backend writing to the serial port
//! - `arch`: Platform-specific code (VGA, serial, interrupts), bare-metal builds only
//!
//! Everything outside `arch` is plain `core` code and runs under the host test
//! harness.
//!
//! # Safety
//!
//! This is a `#![no_std]` kernel. All unsafe code is documented with safety
//! invariants explaining why the usage is correct.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]
#![warn(missing_docs)]

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub mod arch;
pub mod config;
pub mod keyboard;
pub mod logger;
pub mod terminal;
pub mod tests;
pub mod testutil;

/// Initializes core kernel subsystems.
///
/// Called early in the boot process: brings up the serial logger, loads the
/// descriptor tables and enables interrupts.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub fn init() {
    arch::x86_64::serial::init();
    logger::init(arch::x86_64::serial::_print, config::log_level())
        .expect("logger installed twice");
    log::info!("serial logger ready");

    arch::x86_64::gdt::init();
    arch::x86_64::interrupts::init_idt();
    log::info!("interrupts enabled");
}
